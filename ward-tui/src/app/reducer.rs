//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no side effects. Keys are mapped to
//! actions up front by [`map_key`], which needs the active view to resolve
//! view-specific bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libwardview::{Topic, View};

use super::actions::Action;
use super::state::{AppState, StatusBarState};
use crate::data::STAT_CARDS;

/// Pure reducer function
///
/// Shell requests pass through unchanged; the shell performs them and feeds
/// any follow-up back in as another action.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(_) => state, // Mapped by map_key before reaching here
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::CardUp => AppState {
            card_cursor: state.card_cursor.saturating_sub(1),
            ..state
        },

        Action::CardDown => AppState {
            card_cursor: (state.card_cursor + 1).min(AppState::card_count() - 1),
            ..state
        },

        Action::PatientUp => AppState {
            patient_cursor: state.patient_cursor.saturating_sub(1),
            ..state
        },

        Action::PatientDown => AppState {
            patient_cursor: (state.patient_cursor + 1).min(AppState::patient_count() - 1),
            ..state
        },

        // === Shell Requests ===
        Action::NotificationsDismissed => AppState {
            notifications_open: false,
            ..state
        },

        Action::Publish(_)
        | Action::Back
        | Action::SelectPatient
        | Action::ViewSpecialists
        | Action::BellClicked => state,

        // === Bus Events ===
        Action::Published(topic) => on_published(state, topic),

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn on_published(state: AppState, topic: Topic) -> AppState {
    match topic {
        Topic::ShowNotifications => AppState {
            notifications_open: true,
            help_visible: false,
            ..state
        },
        Topic::ResetNotificationCount => AppState {
            status: StatusBarState {
                message: Some("Notifications acknowledged".to_string()),
            },
            ..state
        },
        routing => match routing.target_view() {
            Some(view) => AppState {
                help_visible: false,
                status: StatusBarState {
                    message: Some(format!("{} ({})", view.title(), routing)),
                },
                ..state
            },
            None => state,
        },
    }
}

/// Map a key press to an action for the active `view`
///
/// Overlays take precedence, then global bindings, then the view's own.
pub fn map_key(state: &AppState, view: View, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    // Overlays
    if state.error.is_some() {
        return matches!(key.code, KeyCode::Esc | KeyCode::Enter).then_some(Action::DismissError);
    }
    if state.notifications_open {
        return matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('n'))
            .then_some(Action::NotificationsDismissed);
    }
    if state.help_visible {
        return matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?'))
            .then_some(Action::HideHelp);
    }

    // Global
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::F(1) | KeyCode::Char('?') => return Some(Action::ShowHelp),
        KeyCode::Char('n') => return Some(Action::BellClicked),
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            return STAT_CARDS.get(index).map(|card| Action::Publish(card.topic));
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') if view != View::Dashboard => {
            return Some(Action::Back);
        }
        _ => {}
    }

    // View-specific
    match (view, key.code) {
        (View::Dashboard, KeyCode::Up | KeyCode::Char('k')) => Some(Action::CardUp),
        (View::Dashboard, KeyCode::Down | KeyCode::Char('j')) => Some(Action::CardDown),
        (View::CriticalPatients, KeyCode::Up | KeyCode::Char('k')) => Some(Action::PatientUp),
        (View::CriticalPatients, KeyCode::Down | KeyCode::Char('j')) => {
            Some(Action::PatientDown)
        }
        (View::Dashboard, KeyCode::Enter) => STAT_CARDS
            .get(state.card_cursor)
            .map(|card| Action::Publish(card.topic)),
        (View::CriticalPatients, KeyCode::Enter) => Some(Action::SelectPatient),
        (View::PatientAlert, KeyCode::Char('s') | KeyCode::Enter) => Some(Action::ViewSpecialists),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        assert!(state_clone.status.message.is_none());
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let new_state = reduce(AppState::new(), Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_cursors_are_bounded() {
        let mut state = AppState::new();
        state = reduce(state, Action::CardUp);
        state = reduce(state, Action::PatientUp);
        assert_eq!(state.card_cursor, 0);
        assert_eq!(state.patient_cursor, 0);

        for _ in 0..20 {
            state = reduce(state, Action::CardDown);
            state = reduce(state, Action::PatientDown);
        }
        assert_eq!(state.card_cursor, AppState::card_count() - 1);
        assert_eq!(state.patient_cursor, AppState::patient_count() - 1);
    }

    #[test]
    fn test_card_scrolling_leaves_patient_cursor() {
        let mut state = AppState::new();
        for _ in 0..3 {
            state = reduce(state, Action::CardDown);
        }

        assert_eq!(state.card_cursor, 3);
        assert_eq!(state.patient_cursor, 0);
        assert_eq!(state.patient_under_cursor(), "PA-2024-001");
    }

    #[test]
    fn test_arrow_keys_target_active_view() {
        let state = AppState::new();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);

        assert_eq!(map_key(&state, View::Dashboard, down), Some(Action::CardDown));
        assert_eq!(
            map_key(&state, View::CriticalPatients, down),
            Some(Action::PatientDown)
        );
        assert_eq!(map_key(&state, View::Beds, down), None);
    }

    #[test]
    fn test_show_notifications_opens_overlay() {
        let state = reduce(AppState::new(), Action::ShowHelp);
        let state = reduce(state, Action::Published(Topic::ShowNotifications));

        assert!(state.notifications_open);
        assert!(!state.help_visible);

        let state = reduce(state, Action::NotificationsDismissed);
        assert!(!state.notifications_open);
    }

    #[test]
    fn test_routing_topic_sets_status() {
        let state = reduce(AppState::new(), Action::Published(Topic::ShowBedUtilization));
        assert_eq!(
            state.status.message.as_deref(),
            Some("Beds Management (showBedUtilization)")
        );
    }

    #[test]
    fn test_shell_requests_leave_state() {
        let state = AppState::new();
        for action in [
            Action::Publish(Topic::ShowAiAgent),
            Action::Back,
            Action::SelectPatient,
            Action::ViewSpecialists,
            Action::BellClicked,
        ] {
            assert!(action.is_shell_request());
            let next = reduce(state.clone(), action);
            assert_eq!(next.card_cursor, state.card_cursor);
            assert!(!next.should_quit);
        }
    }
}
