//! Controller adapter for the TUI
//!
//! Owns the event bus, the view router, the notification badge and the live
//! feeds, and bridges them to the synchronous event loop.
//!
//! # Architecture
//!
//! - Shell requests from the reducer are carried out by [`Shell::perform`]
//! - Every bus topic is forwarded into a crossbeam channel, drained once per
//!   loop iteration by [`Shell::drain_events`]
//! - Live feeds run on a private tokio runtime and are acquired or dropped
//!   to match the active view
//!
//! # Example
//!
//! ```
//! use libwardview::{Config, Topic, View};
//! use ward_tui::app::{Action, AppState};
//! use ward_tui::shell::Shell;
//!
//! # fn example() -> ward_tui::Result<()> {
//! let mut shell = Shell::new(&Config::default(), false)?;
//!
//! shell.perform(&Action::Publish(Topic::ShowBedUtilization), &AppState::new());
//! assert_eq!(shell.active_view(), View::Beds);
//!
//! let events = shell.drain_events();
//! assert_eq!(events, vec![Action::Published(Topic::ShowBedUtilization)]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use libwardview::live::availability::DoctorAvailability;
use libwardview::live::census::PatientCensus;
use libwardview::live::pulse::TrendPulse;
use libwardview::live::LiveFeed;
use libwardview::{Config, EventBus, NotificationBadge, Subscription, Topic, View, ViewRouter};
use tokio::runtime::Runtime;

use crate::app::{reduce, Action, AppState};
use crate::data::TRENDS;
use crate::error::{Result, TuiError};

/// Everything a frame needs from the controller side
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub view: View,
    pub selected_patient_id: Option<String>,
    pub badge: u32,
    pub census: PatientCensus,
    pub doctors: DoctorAvailability,
    pub pulse: TrendPulse,
    pub live: bool,
}

#[derive(Debug, Clone, Copy)]
struct Periods {
    census: Duration,
    availability: Duration,
    pulse: Duration,
}

#[derive(Default)]
struct Feeds {
    census: Option<LiveFeed<PatientCensus>>,
    doctors: Option<LiveFeed<DoctorAvailability>>,
    pulse: Option<LiveFeed<TrendPulse>>,
}

/// Controller handle for the TUI
///
/// Field order matters: feeds are dropped before the runtime they run on.
pub struct Shell {
    bus: EventBus,
    router: ViewRouter,
    badge: NotificationBadge,
    events: Receiver<Topic>,
    _bridge: Vec<Subscription>,
    feeds: Feeds,
    periods: Periods,
    runtime: Option<Runtime>,
}

impl Shell {
    /// Mount the controller and, when `live` is set, start the feed runtime
    ///
    /// # Errors
    ///
    /// Returns an error if a configured interval is invalid or the tokio
    /// runtime cannot be created.
    pub fn new(config: &Config, live: bool) -> Result<Self> {
        let periods = Periods {
            census: config.live.census_period()?,
            availability: config.live.availability_period()?,
            pulse: config.live.pulse_period()?,
        };

        let bus = EventBus::new();
        // Router first so bridged events see the view they caused
        let router = ViewRouter::mount(&bus);
        let badge = NotificationBadge::with_initial(&bus, config.notifications.initial_count);

        let (tx, events) = unbounded();
        let bridge: Vec<Subscription> = Topic::ALL
            .iter()
            .map(|&topic| {
                let tx = tx.clone();
                bus.subscribe(topic, move |event| {
                    // Receiver gone means the shell is shutting down
                    let _ = tx.send(event.topic);
                })
            })
            .collect();

        let runtime = if live && config.live.enabled {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("ward-live")
                .enable_time()
                .build()
                .map_err(|e| TuiError::Runtime(e.to_string()))?;
            Some(runtime)
        } else {
            None
        };

        let mut shell = Self {
            bus,
            router,
            badge,
            events,
            _bridge: bridge,
            feeds: Feeds::default(),
            periods,
            runtime,
        };
        shell.sync_feeds()?;

        tracing::debug!(live = shell.is_live(), "shell mounted");
        Ok(shell)
    }

    pub fn is_live(&self) -> bool {
        self.runtime.is_some()
    }

    pub fn active_view(&self) -> View {
        self.router.active()
    }

    pub fn badge(&self) -> u32 {
        self.badge.count()
    }

    /// Carry out a shell request
    ///
    /// Returns a follow-up action for the reducer, if any. Failures come
    /// back as `ShowError` so the loop keeps running.
    pub fn perform(&mut self, action: &Action, state: &AppState) -> Option<Action> {
        let follow_up = match action {
            Action::Publish(topic) => {
                let report = self.bus.publish(*topic);
                (report.failed > 0).then(|| {
                    Action::ShowError(format!(
                        "{} of {} handlers failed for {}",
                        report.failed,
                        report.handlers(),
                        topic
                    ))
                })
            }
            Action::Back => {
                self.router.back();
                None
            }
            Action::SelectPatient => {
                let patient_id = state.patient_under_cursor();
                match self.router.select_patient(patient_id) {
                    Ok(_) => Some(Action::SetStatus(format!("Patient {} selected", patient_id))),
                    Err(e) => Some(Action::ShowError(e.to_string())),
                }
            }
            Action::ViewSpecialists => match self.router.view_specialists() {
                Ok(_) => None,
                Err(e) => Some(Action::ShowError(e.to_string())),
            },
            Action::BellClicked => {
                self.badge.click_bell();
                None
            }
            Action::NotificationsDismissed => {
                self.bus.publish(Topic::ResetNotificationCount);
                None
            }
            _ => None,
        };

        match self.sync_feeds() {
            Ok(()) => follow_up,
            Err(e) => Some(Action::ShowError(e.to_string())),
        }
    }

    /// Run one action through the reducer and the shell
    ///
    /// Reduces `action`, performs it if it is a shell request, then reduces
    /// the follow-up and every bus event it caused.
    pub fn dispatch(&mut self, state: AppState, action: Action) -> AppState {
        let mut state = reduce(state, action.clone());

        if action.is_shell_request() {
            if let Some(follow_up) = self.perform(&action, &state) {
                state = reduce(state, follow_up);
            }
        }

        self.drain_events().into_iter().fold(state, reduce)
    }

    /// Topics published since the last call, as reducer actions
    pub fn drain_events(&self) -> Vec<Action> {
        self.events.try_iter().map(Action::Published).collect()
    }

    /// Acquire the feeds the active view shows and drop the rest
    pub fn sync_feeds(&mut self) -> Result<()> {
        let Some(runtime) = &self.runtime else {
            return Ok(());
        };
        // LiveFeed schedules onto the current runtime
        let _guard = runtime.enter();
        let view = self.router.active();
        let periods = self.periods;

        let on_dashboard = view == View::Dashboard;
        if on_dashboard && self.feeds.census.is_none() {
            self.feeds.census = Some(LiveFeed::start(PatientCensus::default(), periods.census)?);
            self.feeds.pulse = Some(LiveFeed::start(
                TrendPulse::new(TRENDS.iter().copied()),
                periods.pulse,
            )?);
            tracing::debug!("census feed acquired");
        } else if !on_dashboard && self.feeds.census.is_some() {
            self.feeds.census = None;
            self.feeds.pulse = None;
            tracing::debug!("census feed released");
        }

        let on_doctor_status = view == View::DoctorStatus;
        if on_doctor_status && self.feeds.doctors.is_none() {
            self.feeds.doctors = Some(LiveFeed::start(
                DoctorAvailability::default(),
                periods.availability,
            )?);
            tracing::debug!("availability feed acquired");
        } else if !on_doctor_status && self.feeds.doctors.is_some() {
            self.feeds.doctors = None;
            tracing::debug!("availability feed released");
        }

        Ok(())
    }

    /// Names of the feeds currently running
    pub fn running_feeds(&self) -> Vec<&'static str> {
        let mut running = Vec::new();
        if self.feeds.census.as_ref().is_some_and(LiveFeed::is_running) {
            running.push("census");
        }
        if self.feeds.doctors.as_ref().is_some_and(LiveFeed::is_running) {
            running.push("availability");
        }
        if self.feeds.pulse.as_ref().is_some_and(LiveFeed::is_running) {
            running.push("pulse");
        }
        running
    }

    /// Current controller state and feed values for rendering
    ///
    /// Views without a running feed show the simulators' starting values.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.router.state();
        Snapshot {
            view: state.active,
            selected_patient_id: state.selected_patient_id,
            badge: self.badge.count(),
            census: self
                .feeds
                .census
                .as_ref()
                .map(LiveFeed::snapshot)
                .unwrap_or_default(),
            doctors: self
                .feeds
                .doctors
                .as_ref()
                .map(LiveFeed::snapshot)
                .unwrap_or_default(),
            pulse: self
                .feeds
                .pulse
                .as_ref()
                .map(LiveFeed::snapshot)
                .unwrap_or_else(|| TrendPulse::new(TRENDS.iter().copied())),
            live: self.is_live(),
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("view", &self.router.active())
            .field("badge", &self.badge.count())
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_shell() -> Shell {
        Shell::new(&Config::default(), false).unwrap()
    }

    #[test]
    fn test_publish_routes_and_bridges() {
        let mut shell = offline_shell();
        let state = AppState::new();

        assert_eq!(shell.perform(&Action::Publish(Topic::ShowTreatments), &state), None);
        assert_eq!(shell.active_view(), View::Treatments);
        assert_eq!(
            shell.drain_events(),
            vec![Action::Published(Topic::ShowTreatments)]
        );
        assert!(shell.drain_events().is_empty());
    }

    #[test]
    fn test_select_patient_uses_cursor() {
        let mut shell = offline_shell();
        let mut state = AppState::new();
        state.patient_cursor = 1;

        shell.perform(&Action::Publish(Topic::ShowCriticalPatients), &state);
        let follow_up = shell.perform(&Action::SelectPatient, &state);

        assert_eq!(
            follow_up,
            Some(Action::SetStatus("Patient PA-2024-002 selected".to_string()))
        );
        let snapshot = shell.snapshot();
        assert_eq!(snapshot.view, View::PatientAlert);
        assert_eq!(snapshot.selected_patient_id.as_deref(), Some("PA-2024-002"));
    }

    #[test]
    fn test_rejected_request_becomes_error() {
        let mut shell = offline_shell();
        let follow_up = shell.perform(&Action::ViewSpecialists, &AppState::new());

        assert!(matches!(follow_up, Some(Action::ShowError(_))));
        assert_eq!(shell.active_view(), View::Dashboard);
    }

    #[test]
    fn test_bell_and_dismiss() {
        let mut shell = offline_shell();
        let state = AppState::new();
        assert_eq!(shell.badge(), 1);

        shell.perform(&Action::BellClicked, &state);
        assert_eq!(shell.badge(), 0);

        shell.perform(&Action::NotificationsDismissed, &state);
        assert_eq!(shell.badge(), 1);
        assert_eq!(
            shell.drain_events(),
            vec![
                Action::Published(Topic::ShowNotifications),
                Action::Published(Topic::ResetNotificationCount),
            ]
        );
    }

    #[test]
    fn test_dispatch_feeds_bus_events_back() {
        let mut shell = offline_shell();

        let state = shell.dispatch(AppState::new(), Action::BellClicked);
        assert!(state.notifications_open);
        assert_eq!(shell.badge(), 0);

        let state = shell.dispatch(state, Action::NotificationsDismissed);
        assert!(!state.notifications_open);
        assert_eq!(shell.badge(), 1);
        assert_eq!(
            state.status.message.as_deref(),
            Some("Notifications acknowledged")
        );
    }

    #[test]
    fn test_offline_shell_has_no_feeds() {
        let shell = offline_shell();
        assert!(!shell.is_live());
        assert!(shell.running_feeds().is_empty());
        assert_eq!(shell.snapshot().pulse.current(), Some(TRENDS[0]));
    }

    #[test]
    fn test_feeds_follow_view() {
        let mut shell = Shell::new(&Config::default(), true).unwrap();
        let state = AppState::new();
        assert_eq!(shell.running_feeds(), vec!["census", "pulse"]);

        shell.perform(&Action::Publish(Topic::ShowDoctorStatus), &state);
        assert_eq!(shell.running_feeds(), vec!["availability"]);

        shell.perform(&Action::Back, &state);
        assert_eq!(shell.running_feeds(), vec!["census", "pulse"]);

        shell.perform(&Action::Publish(Topic::ShowAppointments), &state);
        assert!(shell.running_feeds().is_empty());
    }
}
