//! Test keybinding mappings to actions
//!
//! Keys resolve against the active view, with overlays taking precedence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libwardview::{Topic, View};
use ward_tui::{map_key, Action, AppState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_q_quits_from_any_view() {
    let state = AppState::new();
    for view in View::ALL {
        assert_eq!(
            map_key(&state, view, key(KeyCode::Char('q'))),
            Some(Action::Quit),
            "{}",
            view
        );
    }
}

#[test]
fn test_ctrl_c_quits() {
    let state = AppState::new();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(map_key(&state, View::Beds, ctrl_c), Some(Action::Quit));
}

#[test]
fn test_digits_publish_card_topics() {
    let state = AppState::new();

    assert_eq!(
        map_key(&state, View::Dashboard, key(KeyCode::Char('1'))),
        Some(Action::Publish(Topic::ShowAppointments))
    );
    assert_eq!(
        map_key(&state, View::Staff, key(KeyCode::Char('3'))),
        Some(Action::Publish(Topic::ShowCriticalPatients))
    );
    assert_eq!(
        map_key(&state, View::Dashboard, key(KeyCode::Char('7'))),
        Some(Action::Publish(Topic::ShowDoctorStatus))
    );
    assert_eq!(map_key(&state, View::Dashboard, key(KeyCode::Char('8'))), None);
}

#[test]
fn test_enter_opens_card_under_cursor() {
    let mut state = AppState::new();
    state.card_cursor = 3;

    assert_eq!(
        map_key(&state, View::Dashboard, key(KeyCode::Enter)),
        Some(Action::Publish(Topic::ShowBedUtilization))
    );
}

#[test]
fn test_enter_selects_patient_in_list() {
    let state = AppState::new();

    assert_eq!(
        map_key(&state, View::CriticalPatients, key(KeyCode::Enter)),
        Some(Action::SelectPatient)
    );
    assert_eq!(
        map_key(&state, View::CriticalPatients, key(KeyCode::Down)),
        Some(Action::PatientDown)
    );
}

#[test]
fn test_s_opens_specialists_only_from_alert() {
    let state = AppState::new();

    assert_eq!(
        map_key(&state, View::PatientAlert, key(KeyCode::Char('s'))),
        Some(Action::ViewSpecialists)
    );
    assert_eq!(map_key(&state, View::Dashboard, key(KeyCode::Char('s'))), None);
}

#[test]
fn test_esc_goes_back_except_on_dashboard() {
    let state = AppState::new();

    assert_eq!(
        map_key(&state, View::Specialists, key(KeyCode::Esc)),
        Some(Action::Back)
    );
    assert_eq!(
        map_key(&state, View::Treatments, key(KeyCode::Backspace)),
        Some(Action::Back)
    );
    assert_eq!(map_key(&state, View::Dashboard, key(KeyCode::Esc)), None);
}

#[test]
fn test_n_rings_the_bell() {
    let state = AppState::new();

    assert_eq!(
        map_key(&state, View::Appointments, key(KeyCode::Char('n'))),
        Some(Action::BellClicked)
    );
}

#[test]
fn test_overlays_capture_keys() {
    let mut state = AppState::new();
    state.error = Some("boom".to_string());
    assert_eq!(
        map_key(&state, View::Beds, key(KeyCode::Esc)),
        Some(Action::DismissError)
    );
    assert_eq!(map_key(&state, View::Beds, key(KeyCode::Char('q'))), None);

    state.error = None;
    state.notifications_open = true;
    assert_eq!(
        map_key(&state, View::Beds, key(KeyCode::Esc)),
        Some(Action::NotificationsDismissed)
    );

    state.notifications_open = false;
    state.help_visible = true;
    assert_eq!(
        map_key(&state, View::Beds, key(KeyCode::F(1))),
        Some(Action::HideHelp)
    );
    assert_eq!(
        map_key(&state, View::Beds, key(KeyCode::Char('1'))),
        None
    );
}
