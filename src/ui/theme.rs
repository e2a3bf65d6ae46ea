use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::model::sport_event::EventStatus;

/// Palette for one theme mode. The UI never hardcodes chrome colors; it pulls
/// them from here so the `t` toggle restyles every panel at once.
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub chat_border: Color,
    pub input_border: Color,
    pub user: Color,
    pub bot: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                background: Color::Rgb(0x12, 0x12, 0x1A),
                text: Color::Rgb(0xE6, 0xE6, 0xE6),
                dim: Color::DarkGray,
                accent: Color::Cyan,
                chat_border: Color::Magenta,
                input_border: Color::Yellow,
                user: Color::White,
                bot: Color::Rgb(0x4F, 0xC3, 0xF7),
                badge_fg: Color::Black,
                badge_bg: Color::DarkGray,
            },
            ThemeMode::Light => Self {
                background: Color::Rgb(0xF5, 0xF5, 0xF0),
                text: Color::Rgb(0x20, 0x20, 0x28),
                dim: Color::Gray,
                accent: Color::Blue,
                chat_border: Color::Rgb(0x8E, 0x24, 0xAA),
                input_border: Color::Rgb(0xB2, 0x6A, 0x00),
                user: Color::Black,
                bot: Color::Rgb(0x01, 0x57, 0x9B),
                badge_fg: Color::White,
                badge_bg: Color::Gray,
            },
        }
    }
}

/// LIVE and COMPLETED carry their own styling; everything else renders as an
/// upcoming fixture.
pub fn status_color(status: &EventStatus) -> Color {
    match status {
        EventStatus::Live => Color::Red,
        EventStatus::Completed => Color::Green,
        EventStatus::Other(_) => Color::Yellow,
    }
}

pub fn sport_color(sport: &str) -> Color {
    match sport.to_lowercase().as_str() {
        "football" => Color::Rgb(0x4C, 0xAF, 0x50),
        "basketball" => Color::Rgb(0xFF, 0x70, 0x43),
        "cricket" => Color::Rgb(0x42, 0xA5, 0xF5),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_and_completed_have_dedicated_colors() {
        assert_eq!(status_color(&EventStatus::Live), Color::Red);
        assert_eq!(status_color(&EventStatus::Completed), Color::Green);
    }

    #[test]
    fn any_other_status_renders_as_upcoming() {
        assert_eq!(
            status_color(&EventStatus::Other("Scheduled".into())),
            Color::Yellow
        );
        assert_eq!(
            status_color(&EventStatus::Other("Postponed".into())),
            Color::Yellow
        );
    }

    #[test]
    fn unknown_sport_falls_back_to_gray() {
        assert_eq!(sport_color("curling"), Color::Gray);
        assert_eq!(sport_color("FOOTBALL"), sport_color("football"));
    }
}
