//! Unit tests for ViewState and the message slot
//! These are in a separate file to keep state.rs clean

#[cfg(test)]
mod tests {
    use crate::model::{Activity, ActivityCatalog};
    use crate::view::state::{MessageKind, MessageSlot, ViewState};
    use std::time::Duration;

    fn catalog_with(name: &str) -> ActivityCatalog {
        let mut catalog = ActivityCatalog::new();
        catalog.insert(
            name.to_string(),
            Activity {
                description: "d".to_string(),
                schedule: "s".to_string(),
                max_participants: 5,
                participants: vec![],
            },
        );
        catalog
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.catalog().is_none());
        assert!(!state.message().is_visible());
        assert!(state.refreshed_at().is_none());
    }

    #[test]
    fn test_replace_catalog_is_wholesale() {
        let mut state = ViewState::new();
        state.replace_catalog(catalog_with("Chess Club"));
        state.replace_catalog(catalog_with("Art Workshop"));

        let catalog = state.catalog().unwrap();
        assert!(catalog.contains_key("Art Workshop"));
        assert!(!catalog.contains_key("Chess Club"));
        assert!(state.refreshed_at().is_some());
    }

    #[test]
    fn test_show_then_expire_hides() {
        let mut state = ViewState::new();
        let generation = state.show_message(
            MessageKind::Success,
            "Signed up".to_string(),
            Duration::from_secs(5),
        );
        assert!(state.message().is_visible());
        assert!(state.expire_message(generation));
        assert!(!state.message().is_visible());
    }

    #[test]
    fn test_stale_timer_cannot_hide_newer_message() {
        let mut state = ViewState::new();
        let first = state.show_message(
            MessageKind::Success,
            "first".to_string(),
            Duration::from_secs(5),
        );
        let _second = state.show_message(
            MessageKind::Error,
            "second".to_string(),
            Duration::from_secs(5),
        );

        // The timer armed for the first message fires late — no-op
        assert!(!state.expire_message(first));
        match state.message() {
            MessageSlot::Showing { kind, text, .. } => {
                assert_eq!(*kind, MessageKind::Error);
                assert_eq!(text, "second");
            }
            MessageSlot::Hidden => panic!("newer message was hidden by a stale timer"),
        }
    }

    #[test]
    fn test_expire_is_idempotent() {
        let mut state = ViewState::new();
        let generation =
            state.show_message(MessageKind::Error, "oops".to_string(), Duration::from_secs(5));
        assert!(state.expire_message(generation));
        assert!(!state.expire_message(generation));
    }

    #[test]
    fn test_expire_due_message_respects_deadline() {
        let mut state = ViewState::new();
        state.show_message(
            MessageKind::Success,
            "visible".to_string(),
            Duration::from_secs(60),
        );
        assert!(!state.expire_due_message());
        assert!(state.message().is_visible());

        state.show_message(MessageKind::Success, "due".to_string(), Duration::ZERO);
        assert!(state.expire_due_message());
        assert!(!state.message().is_visible());
    }

    #[test]
    fn test_generations_are_monotonic() {
        let mut state = ViewState::new();
        let a = state.show_message(MessageKind::Success, "a".to_string(), Duration::from_secs(5));
        let b = state.show_message(MessageKind::Success, "b".to_string(), Duration::from_secs(5));
        assert!(b > a);
    }
}
