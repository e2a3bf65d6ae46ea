use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Match status as reported by the events endpoint. The wire value is a free
/// string; only `LIVE` and `COMPLETED` carry special styling, everything else
/// renders as an upcoming fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Live,
    Completed,
    Other(String),
}

impl EventStatus {
    pub fn label(&self) -> &str {
        match self {
            EventStatus::Live => "LIVE",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Other(s) => s,
        }
    }

    fn from_wire(s: String) -> Self {
        match s.as_str() {
            "LIVE" => EventStatus::Live,
            "COMPLETED" => EventStatus::Completed,
            _ => EventStatus::Other(s),
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Other("Scheduled".to_string())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EventStatus::from_wire(s))
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sport: String,
    #[serde(default)]
    pub status: EventStatus,
    pub date: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i64>,
    #[serde(default)]
    pub competition: String,
    #[serde(default)]
    pub location: String,
}

impl SportEvent {
    /// Everything a card displays, lowercased, for client-side search.
    pub fn searchable_text(&self) -> String {
        let mut text = format!(
            "{} {} {} {} {} {} {}",
            self.sport,
            self.status.label(),
            self.home_team,
            self.away_team,
            self.competition,
            self.location,
            self.formatted_date(),
        );
        if let (Some(home), Some(away)) = (self.home_score, self.away_score) {
            text.push_str(&format!(" {home} {away}"));
        }
        text.to_lowercase()
    }

    pub fn formatted_date(&self) -> String {
        self.date.format("%a, %b %-d, %Y").to_string()
    }

    pub fn formatted_time(&self) -> String {
        self.date.format("%I:%M %p").to_string()
    }
}
