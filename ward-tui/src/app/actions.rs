//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Some actions only touch
//! local UI state (cursor, overlays); the shell requests at the bottom are
//! carried out by [`crate::shell::Shell`] against the controller.

use crossterm::event::KeyEvent;
use libwardview::Topic;

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick for live panels
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move the dashboard card cursor up
    CardUp,

    /// Move the dashboard card cursor down
    CardDown,

    /// Move the critical patients cursor up
    PatientUp,

    /// Move the critical patients cursor down
    PatientDown,

    // === Shell Requests ===
    /// Stat card clicked; publishes the card's topic
    Publish(Topic),

    /// Back action of the active view
    Back,

    /// Open the patient under the cursor
    SelectPatient,

    /// Open the specialists panel for the selected patient
    ViewSpecialists,

    /// Header bell clicked
    BellClicked,

    /// Notifications overlay dismissed; resets the badge
    NotificationsDismissed,

    // === Bus Events ===
    /// A topic was published on the bus
    Published(Topic),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

impl Action {
    /// Whether the shell must carry this action out
    pub fn is_shell_request(&self) -> bool {
        matches!(
            self,
            Action::Publish(_)
                | Action::Back
                | Action::SelectPatient
                | Action::ViewSpecialists
                | Action::BellClicked
                | Action::NotificationsDismissed
        )
    }
}
