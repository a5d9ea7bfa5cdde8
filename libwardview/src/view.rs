//! View identifiers and the state the rendering layer reads each frame

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One full-panel display state of the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Dashboard,
    CriticalPatients,
    PatientAlert,
    Specialists,
    AiAgent,
    DoctorStatus,
    Appointments,
    Treatments,
    Beds,
    Staff,
}

impl View {
    /// Every view, in the order the shell lists them
    pub const ALL: [View; 10] = [
        View::Dashboard,
        View::CriticalPatients,
        View::PatientAlert,
        View::Specialists,
        View::AiAgent,
        View::DoctorStatus,
        View::Appointments,
        View::Treatments,
        View::Beds,
        View::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::CriticalPatients => "criticalPatients",
            View::PatientAlert => "patientAlert",
            View::Specialists => "specialists",
            View::AiAgent => "aiAgent",
            View::DoctorStatus => "doctorStatus",
            View::Appointments => "appointments",
            View::Treatments => "treatments",
            View::Beds => "beds",
            View::Staff => "staff",
        }
    }

    /// Target of the back action exposed by this view
    ///
    /// `Dashboard` is home and has no parent, so it maps to itself.
    pub fn parent(&self) -> View {
        match self {
            View::Dashboard => View::Dashboard,
            View::CriticalPatients => View::Dashboard,
            View::PatientAlert => View::CriticalPatients,
            View::Specialists => View::PatientAlert,
            View::AiAgent
            | View::DoctorStatus
            | View::Appointments
            | View::Treatments
            | View::Beds
            | View::Staff => View::Dashboard,
        }
    }

    /// Views that carry the selected patient
    pub fn keeps_patient_selection(&self) -> bool {
        matches!(self, View::PatientAlert | View::Specialists)
    }

    /// Human-readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::CriticalPatients => "Critical Patients",
            View::PatientAlert => "Patient Alert",
            View::Specialists => "Cardiac Specialists",
            View::AiAgent => "AI Provider Assistant",
            View::DoctorStatus => "Doctor Status",
            View::Appointments => "Appointments Management",
            View::Treatments => "Treatments Management",
            View::Beds => "Beds Management",
            View::Staff => "Staff Management",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| format!("Unknown view: '{}'", s))
    }
}

/// The active view plus the parameter that view needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active: View,
    pub selected_patient_id: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: View::Dashboard,
            selected_patient_id: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_home(&self) -> bool {
        self.active == View::Dashboard
    }
}
