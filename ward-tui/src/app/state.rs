//! Application state
//!
//! Local UI state only. Which view is active belongs to the view router;
//! this holds cursors, overlays and the status line.

use crate::data::{CRITICAL_PATIENTS, STAT_CARDS};

/// Root UI state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Notifications overlay visible?
    pub notifications_open: bool,

    /// Highlighted stat card on the dashboard
    pub card_cursor: usize,

    /// Highlighted row in the critical patients list
    pub patient_cursor: usize,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            notifications_open: false,
            card_cursor: 0,
            patient_cursor: 0,
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("WARD_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("WARD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Is any overlay covering the active panel?
    pub fn overlay_open(&self) -> bool {
        self.help_visible || self.notifications_open || self.error.is_some()
    }

    /// Patient id under the list cursor
    pub fn patient_under_cursor(&self) -> &'static str {
        CRITICAL_PATIENTS[self.patient_cursor.min(CRITICAL_PATIENTS.len() - 1)].id
    }

    pub fn card_count() -> usize {
        STAT_CARDS.len()
    }

    pub fn patient_count() -> usize {
        CRITICAL_PATIENTS.len()
    }
}
