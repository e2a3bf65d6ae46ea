use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::SportsApi;
use crate::config::{self, ThemeMode};
use crate::event::KeyAction;
use crate::model::chat::ChatMessage;
use crate::model::sport_event::SportEvent;

/// Fixed fallback appended as the bot reply when a chat request fails.
pub const CHAT_FALLBACK: &str = "Sorry, I encountered an error processing your request.";
/// Shown in place of the card list when an events fetch fails.
pub const EVENTS_ERROR: &str = "Error loading events. Please try again.";

pub const SPORT_FILTERS: [&str; 4] = ["all", "football", "basketball", "cricket"];

/// Canned questions sendable with one key press from the events view.
pub const QUICK_QUERIES: [&str; 3] = [
    "What sports events are happening today?",
    "When is the next football match?",
    "Show me the live scores",
];

pub fn empty_events_message(filter: &str) -> String {
    let label = if filter == "all" { "sports" } else { filter };
    format!("No {label} events found.")
}

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    EventsLoaded(Vec<SportEvent>),
    EventsFailed(String),
    ChatReply(String),
    ChatFailed(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Chat,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventsView {
    Loading,
    Ready,
    Failed,
}

pub struct App {
    pub chat_messages: Vec<ChatMessage>,
    pub pending_replies: usize,
    pub chat_minimized: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_cursor: usize,
    pub events: Vec<SportEvent>,
    pub events_view: EventsView,
    pub filter_index: usize,
    pub search_query: String,
    pub selected_event: usize,
    pub theme: ThemeMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub action_tx: mpsc::UnboundedSender<Action>,
    api: Arc<dyn SportsApi>,
}

impl App {
    pub fn new(
        api: Arc<dyn SportsApi>,
        theme: ThemeMode,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            chat_messages: Vec::new(),
            pending_replies: 0,
            chat_minimized: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_cursor: 0,
            events: Vec::new(),
            events_view: EventsView::Loading,
            filter_index: 0,
            search_query: String::new(),
            selected_event: 0,
            theme,
            flash_message: None,
            should_quit: false,
            action_tx,
            api,
        }
    }

    pub fn filter(&self) -> &'static str {
        SPORT_FILTERS[self.filter_index]
    }

    /// Events surviving the client-side search filter. An empty query keeps
    /// every card visible.
    pub fn visible_events(&self) -> Vec<&SportEvent> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return self.events.iter().collect();
        }
        self.events
            .iter()
            .filter(|event| event.searchable_text().contains(&query))
            .collect()
    }

    pub fn typing_indicator_visible(&self) -> bool {
        self.pending_replies > 0
    }

    pub async fn update(&mut self, action: Action) {
        // Clear flash message after 3 seconds
        if let Some((_, t)) = &self.flash_message {
            if t.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Tick => {}
            Action::EventsLoaded(events) => {
                self.events = events;
                self.events_view = EventsView::Ready;
                let visible = self.visible_events().len();
                if self.selected_event >= visible {
                    self.selected_event = visible.saturating_sub(1);
                }
            }
            Action::EventsFailed(msg) => {
                tracing::warn!(error = %msg, "events fetch failed");
                self.events_view = EventsView::Failed;
            }
            Action::ChatReply(text) => {
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.chat_messages.push(ChatMessage::bot(text));
            }
            Action::ChatFailed(msg) => {
                tracing::warn!(error = %msg, "chat request failed");
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.chat_messages.push(ChatMessage::bot(CHAT_FALLBACK));
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyAction) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Chat | InputMode::Search => self.handle_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Char('q') => self.should_quit = true,
            KeyAction::Char(':') => {
                self.input_mode = InputMode::Chat;
                self.input_buffer.clear();
                self.input_cursor = 0;
                self.chat_minimized = false;
            }
            KeyAction::Char('/') => {
                self.input_mode = InputMode::Search;
                self.input_buffer.clear();
                self.input_cursor = 0;
            }
            KeyAction::Char('t') => self.toggle_theme(),
            KeyAction::Char('m') => self.chat_minimized = !self.chat_minimized,
            KeyAction::Char('r') => self.load_events(),
            KeyAction::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                self.chat_minimized = false;
                self.send_chat(QUICK_QUERIES[idx].to_string());
            }
            KeyAction::Tab | KeyAction::Right => {
                self.filter_index = (self.filter_index + 1) % SPORT_FILTERS.len();
                self.load_events();
            }
            KeyAction::Left => {
                self.filter_index =
                    (self.filter_index + SPORT_FILTERS.len() - 1) % SPORT_FILTERS.len();
                self.load_events();
            }
            KeyAction::Up => {
                if self.selected_event > 0 {
                    self.selected_event -= 1;
                }
            }
            KeyAction::Down => {
                let visible = self.visible_events().len();
                if visible > 0 && self.selected_event < visible - 1 {
                    self.selected_event += 1;
                }
            }
            KeyAction::Escape => {
                if !self.search_query.is_empty() {
                    self.search_query.clear();
                    self.selected_event = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Char(c) => self.insert_char(c),
            KeyAction::Backspace => self.delete_char(),
            KeyAction::Left => {
                if self.input_cursor > 0 {
                    self.input_cursor -= 1;
                }
            }
            KeyAction::Right => {
                if self.input_cursor < self.input_buffer.chars().count() {
                    self.input_cursor += 1;
                }
            }
            KeyAction::Submit => {
                let text = std::mem::take(&mut self.input_buffer);
                self.input_cursor = 0;
                match self.input_mode {
                    InputMode::Chat => self.send_chat(text),
                    InputMode::Search => {
                        self.search_query = text.trim().to_string();
                        self.selected_event = 0;
                    }
                    InputMode::Normal => {}
                }
                self.input_mode = InputMode::Normal;
            }
            KeyAction::Escape => {
                self.input_buffer.clear();
                self.input_cursor = 0;
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    /// Relay one user message to the backend. Whitespace-only input is a
    /// no-op: no entry is appended and no request goes out.
    pub fn send_chat(&mut self, text: String) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        self.chat_messages.push(ChatMessage::user(trimmed));
        self.pending_replies += 1;

        let api = self.api.clone();
        let tx = self.action_tx.clone();
        let message = trimmed.to_string();
        tokio::spawn(async move {
            match api.chat(&message).await {
                Ok(reply) => {
                    let _ = tx.send(Action::ChatReply(reply));
                }
                Err(e) => {
                    let _ = tx.send(Action::ChatFailed(e.to_string()));
                }
            }
        });
    }

    /// Refetch the event list for the active filter. Requests are not
    /// sequenced: if two are in flight, whichever reply lands last wins.
    pub fn load_events(&mut self) {
        self.events_view = EventsView::Loading;

        let api = self.api.clone();
        let tx = self.action_tx.clone();
        let filter = self.filter().to_string();
        tokio::spawn(async move {
            match api.events(&filter).await {
                Ok(events) => {
                    let _ = tx.send(Action::EventsLoaded(events));
                }
                Err(e) => {
                    let _ = tx.send(Action::EventsFailed(e.to_string()));
                }
            }
        });
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = config::save_theme(self.theme) {
            self.flash_message = Some((format!("Failed to save theme: {e}"), Instant::now()));
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte = byte_index(&self.input_buffer, self.input_cursor);
        self.input_buffer.insert(byte, c);
        self.input_cursor += 1;
    }

    fn delete_char(&mut self) {
        if self.input_cursor > 0 {
            let byte = byte_index(&self.input_buffer, self.input_cursor - 1);
            self.input_buffer.remove(byte);
            self.input_cursor -= 1;
        }
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{make_event, MockApi};
    use crate::model::chat::ChatSender;
    use crate::model::sport_event::EventStatus;

    fn test_app(api: MockApi) -> (App, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(Arc::new(api), ThemeMode::Dark, tx);
        (app, rx)
    }

    #[tokio::test]
    async fn send_appends_one_user_and_one_bot_entry() {
        let (mut app, mut rx) = test_app(MockApi::with_reply("**Arsenal** lead 2-1"));

        app.send_chat("show me the score".to_string());
        assert_eq!(app.chat_messages.len(), 1);
        assert_eq!(app.chat_messages[0].sender, ChatSender::User);
        assert!(app.typing_indicator_visible());

        let action = rx.recv().await.unwrap();
        app.update(action).await;

        assert_eq!(app.chat_messages.len(), 2);
        assert_eq!(app.chat_messages[1].sender, ChatSender::Bot);
        assert_eq!(app.chat_messages[1].text, "**Arsenal** lead 2-1");
        assert!(!app.typing_indicator_visible());
    }

    #[tokio::test]
    async fn whitespace_only_message_is_a_noop() {
        let (mut app, _rx) = test_app(MockApi::new());
        app.send_chat("   \t ".to_string());
        assert!(app.chat_messages.is_empty());
        assert!(!app.typing_indicator_visible());
    }

    #[tokio::test]
    async fn chat_failure_appends_fixed_fallback() {
        let (mut app, mut rx) = test_app(MockApi::failing());

        app.send_chat("hello".to_string());
        let action = rx.recv().await.unwrap();
        app.update(action).await;

        assert_eq!(app.chat_messages.len(), 2);
        assert_eq!(app.chat_messages[1].sender, ChatSender::Bot);
        assert_eq!(app.chat_messages[1].text, CHAT_FALLBACK);
        assert!(!app.typing_indicator_visible());
    }

    #[tokio::test]
    async fn load_events_replaces_list_on_success() {
        let (mut app, mut rx) = test_app(MockApi::with_events(vec![make_event(
            "football",
            EventStatus::Live,
            "Arsenal",
            "Chelsea",
        )]));

        app.load_events();
        assert_eq!(app.events_view, EventsView::Loading);

        let action = rx.recv().await.unwrap();
        app.update(action).await;

        assert_eq!(app.events_view, EventsView::Ready);
        assert_eq!(app.events.len(), 1);
    }

    #[tokio::test]
    async fn load_events_failure_sets_error_state() {
        let (mut app, mut rx) = test_app(MockApi::failing());

        app.load_events();
        let action = rx.recv().await.unwrap();
        app.update(action).await;

        assert_eq!(app.events_view, EventsView::Failed);
    }

    #[test]
    fn empty_state_message_names_the_filter() {
        assert_eq!(empty_events_message("soccer"), "No soccer events found.");
        assert_eq!(empty_events_message("all"), "No sports events found.");
    }

    #[tokio::test]
    async fn empty_search_shows_every_card() {
        let (mut app, _rx) = test_app(MockApi::new());
        app.events = vec![
            make_event("football", EventStatus::Live, "Arsenal", "Chelsea"),
            make_event("basketball", EventStatus::Completed, "Lakers", "Celtics"),
        ];
        app.search_query = String::new();
        assert_eq!(app.visible_events().len(), 2);
    }

    #[tokio::test]
    async fn search_hides_exactly_the_non_matching_cards() {
        let (mut app, _rx) = test_app(MockApi::new());
        app.events = vec![
            make_event("football", EventStatus::Live, "Arsenal", "Chelsea"),
            make_event("basketball", EventStatus::Completed, "Lakers", "Celtics"),
        ];

        app.search_query = "ARSENAL".to_string();
        let visible = app.visible_events();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].home_team, "Arsenal");

        app.search_query = "no such team".to_string();
        assert!(app.visible_events().is_empty());
    }

    #[tokio::test]
    async fn tab_cycles_filter_and_refetches() {
        let (mut app, mut rx) = test_app(MockApi::new());
        assert_eq!(app.filter(), "all");

        app.update(Action::Key(KeyAction::Tab)).await;
        assert_eq!(app.filter(), "football");
        assert_eq!(app.events_view, EventsView::Loading);

        // A fetch was actually issued for the new filter.
        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::EventsLoaded(_)));
    }

    #[tokio::test]
    async fn filter_cycles_back_around() {
        let (mut app, _rx) = test_app(MockApi::new());
        for _ in 0..SPORT_FILTERS.len() {
            app.update(Action::Key(KeyAction::Tab)).await;
        }
        assert_eq!(app.filter(), "all");
    }

    #[tokio::test]
    async fn chat_input_flow_sends_typed_message() {
        let (mut app, _rx) = test_app(MockApi::new());

        app.update(Action::Key(KeyAction::Char(':'))).await;
        assert_eq!(app.input_mode, InputMode::Chat);

        for c in "hi".chars() {
            app.update(Action::Key(KeyAction::Char(c))).await;
        }
        app.update(Action::Key(KeyAction::Submit)).await;

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.chat_messages.len(), 1);
        assert_eq!(app.chat_messages[0].text, "hi");
    }

    #[tokio::test]
    async fn search_input_flow_applies_and_escape_clears() {
        let (mut app, _rx) = test_app(MockApi::new());
        app.events = vec![
            make_event("football", EventStatus::Live, "Arsenal", "Chelsea"),
            make_event("cricket", EventStatus::Completed, "India", "Australia"),
        ];

        app.update(Action::Key(KeyAction::Char('/'))).await;
        for c in "india".chars() {
            app.update(Action::Key(KeyAction::Char(c))).await;
        }
        app.update(Action::Key(KeyAction::Submit)).await;
        assert_eq!(app.visible_events().len(), 1);

        app.update(Action::Key(KeyAction::Escape)).await;
        assert_eq!(app.visible_events().len(), 2);
    }

    #[tokio::test]
    async fn input_editing_respects_cursor() {
        let (mut app, _rx) = test_app(MockApi::new());
        app.update(Action::Key(KeyAction::Char(':'))).await;
        for c in "abc".chars() {
            app.update(Action::Key(KeyAction::Char(c))).await;
        }
        app.update(Action::Key(KeyAction::Left)).await;
        app.update(Action::Key(KeyAction::Backspace)).await;
        assert_eq!(app.input_buffer, "ac");
        app.update(Action::Key(KeyAction::Char('x'))).await;
        assert_eq!(app.input_buffer, "axc");
    }

    #[tokio::test]
    async fn overlapping_requests_show_a_single_indicator() {
        let (mut app, mut rx) = test_app(MockApi::with_reply("ok"));

        app.send_chat("first".to_string());
        app.send_chat("second".to_string());
        assert_eq!(app.pending_replies, 2);
        assert!(app.typing_indicator_visible());

        let action = rx.recv().await.unwrap();
        app.update(action).await;
        assert!(app.typing_indicator_visible());

        let action = rx.recv().await.unwrap();
        app.update(action).await;
        assert!(!app.typing_indicator_visible());
    }
}
