//! View routing state machine
//!
//! Two layers:
//! - [`transition`]: pure function `(ViewState, Trigger) -> ViewState`
//! - [`ViewRouter`]: owns the live `ViewState`, listens on the routing topics
//!   and exposes the direct calls the rendering layer makes (back, select
//!   patient, view specialists)
//!
//! Routing topics are accepted from every view. Direct calls are only
//! accepted from the view that exposes them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::bus::{EventBus, Subscription};
use crate::error::{RouterError, WardError};
use crate::topic::Topic;
use crate::view::{View, ViewState};
use crate::Result;

/// Anything that can move the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A routing topic arrived on the bus
    Topic(Topic),
    /// Patient picked from the critical patients list
    SelectPatient(String),
    /// "View specialists" on the patient alert panel
    ViewSpecialists,
    /// Back action of the active view
    Back,
}

impl Trigger {
    fn describe(&self) -> String {
        match self {
            Trigger::Topic(topic) => topic.as_str().to_string(),
            Trigger::SelectPatient(_) => "select patient".to_string(),
            Trigger::ViewSpecialists => "view specialists".to_string(),
            Trigger::Back => "back".to_string(),
        }
    }
}

/// Pure transition function
///
/// Topics that do not route (notification topics) leave the state as is.
/// The selected patient survives only while the target view is
/// `PatientAlert` or `Specialists`.
pub fn transition(state: ViewState, trigger: Trigger) -> Result<ViewState> {
    let from = state.active;
    let (active, selected_patient_id) = match trigger {
        Trigger::Topic(topic) => match topic.target_view() {
            Some(target) => (target, state.selected_patient_id),
            None => return Ok(state),
        },
        Trigger::SelectPatient(patient_id) => {
            if from != View::CriticalPatients {
                return Err(invalid(from, &Trigger::SelectPatient(patient_id)));
            }
            if patient_id.trim().is_empty() {
                return Err(WardError::InvalidInput(
                    "patient id cannot be empty".to_string(),
                ));
            }
            (View::PatientAlert, Some(patient_id))
        }
        Trigger::ViewSpecialists => {
            if from != View::PatientAlert {
                return Err(invalid(from, &Trigger::ViewSpecialists));
            }
            (View::Specialists, state.selected_patient_id)
        }
        Trigger::Back => (from.parent(), state.selected_patient_id),
    };

    Ok(ViewState {
        active,
        selected_patient_id: selected_patient_id.filter(|_| active.keeps_patient_selection()),
    })
}

fn invalid(from: View, trigger: &Trigger) -> WardError {
    WardError::Routing(RouterError::InvalidTransition {
        from,
        trigger: trigger.describe(),
    })
}

/// Top-level view controller
///
/// Mounting registers one handler per routing topic; dropping the router (or
/// calling [`ViewRouter::unmount`]) releases them, so a remount never leaves
/// a second set of handlers behind.
pub struct ViewRouter {
    state: Arc<Mutex<ViewState>>,
    subscriptions: Vec<Subscription>,
}

impl ViewRouter {
    /// Create a router at `dashboard` that is not listening on any bus
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::default())),
            subscriptions: Vec::new(),
        }
    }

    /// Create a router at `dashboard` and listen on `bus`
    pub fn mount(bus: &EventBus) -> Self {
        let mut router = Self::new();
        router.attach(bus);
        router
    }

    /// Listen on the routing topics of `bus`
    ///
    /// Any previous subscriptions are released first.
    pub fn attach(&mut self, bus: &EventBus) {
        self.subscriptions.clear();
        self.subscriptions = Topic::ROUTING
            .iter()
            .map(|&topic| {
                let state = Arc::clone(&self.state);
                bus.subscribe(topic, move |_event| {
                    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                    apply(&mut state, Trigger::Topic(topic));
                })
            })
            .collect();
        tracing::debug!(topics = self.subscriptions.len(), "view router mounted");
    }

    /// Release every bus subscription; the current state is kept
    pub fn unmount(&mut self) {
        if !self.subscriptions.is_empty() {
            self.subscriptions.clear();
            tracing::debug!("view router unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn active(&self) -> View {
        self.lock().active
    }

    pub fn selected_patient_id(&self) -> Option<String> {
        self.lock().selected_patient_id.clone()
    }

    /// Apply a routing topic without going through a bus
    pub fn handle(&self, topic: Topic) -> ViewState {
        let mut state = self.lock();
        apply(&mut state, Trigger::Topic(topic));
        state.clone()
    }

    /// `criticalPatients` → `patientAlert`, remembering `patient_id`
    pub fn select_patient(&self, patient_id: impl Into<String>) -> Result<ViewState> {
        self.dispatch(Trigger::SelectPatient(patient_id.into()))
    }

    /// `patientAlert` → `specialists`
    pub fn view_specialists(&self) -> Result<ViewState> {
        self.dispatch(Trigger::ViewSpecialists)
    }

    /// Follow the back action of the active view
    pub fn back(&self) -> ViewState {
        let mut state = self.lock();
        apply(&mut state, Trigger::Back);
        state.clone()
    }

    fn dispatch(&self, trigger: Trigger) -> Result<ViewState> {
        let mut state = self.lock();
        let next = transition(state.clone(), trigger).map_err(|e| {
            tracing::warn!(view = %state.active, error = %e, "transition rejected");
            e
        })?;
        log_change(&state, &next);
        *state = next;
        Ok(state.clone())
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRouter")
            .field("state", &self.state())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

/// Apply a trigger that is defined from every view
fn apply(state: &mut ViewState, trigger: Trigger) {
    match transition(state.clone(), trigger) {
        Ok(next) => {
            log_change(state, &next);
            *state = next;
        }
        Err(e) => tracing::warn!(view = %state.active, error = %e, "transition rejected"),
    }
}

fn log_change(from: &ViewState, to: &ViewState) {
    if from.active != to.active {
        tracing::debug!(from = %from.active, to = %to.active, "view changed");
    }
}
