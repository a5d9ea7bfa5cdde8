//! Named cross-component notifications
//!
//! Topic names are the interop surface between the shell and its panels, so
//! `as_str` returns the exact wire name each producer emits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "showCriticalPatients")]
    ShowCriticalPatients,
    #[serde(rename = "showAIAgent")]
    ShowAiAgent,
    #[serde(rename = "showDoctorStatus")]
    ShowDoctorStatus,
    #[serde(rename = "showAppointments")]
    ShowAppointments,
    #[serde(rename = "showTreatments")]
    ShowTreatments,
    #[serde(rename = "showBedUtilization")]
    ShowBedUtilization,
    #[serde(rename = "showStaffOptimization")]
    ShowStaffOptimization,
    #[serde(rename = "resetNotificationCount")]
    ResetNotificationCount,
    #[serde(rename = "showNotifications")]
    ShowNotifications,
}

impl Topic {
    pub const ALL: [Topic; 9] = [
        Topic::ShowCriticalPatients,
        Topic::ShowAiAgent,
        Topic::ShowDoctorStatus,
        Topic::ShowAppointments,
        Topic::ShowTreatments,
        Topic::ShowBedUtilization,
        Topic::ShowStaffOptimization,
        Topic::ResetNotificationCount,
        Topic::ShowNotifications,
    ];

    /// Topics the view router listens on
    pub const ROUTING: [Topic; 7] = [
        Topic::ShowCriticalPatients,
        Topic::ShowAiAgent,
        Topic::ShowDoctorStatus,
        Topic::ShowAppointments,
        Topic::ShowTreatments,
        Topic::ShowBedUtilization,
        Topic::ShowStaffOptimization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::ShowCriticalPatients => "showCriticalPatients",
            Topic::ShowAiAgent => "showAIAgent",
            Topic::ShowDoctorStatus => "showDoctorStatus",
            Topic::ShowAppointments => "showAppointments",
            Topic::ShowTreatments => "showTreatments",
            Topic::ShowBedUtilization => "showBedUtilization",
            Topic::ShowStaffOptimization => "showStaffOptimization",
            Topic::ResetNotificationCount => "resetNotificationCount",
            Topic::ShowNotifications => "showNotifications",
        }
    }

    /// View this topic switches to, if it is a routing topic
    pub fn target_view(&self) -> Option<View> {
        match self {
            Topic::ShowCriticalPatients => Some(View::CriticalPatients),
            Topic::ShowAiAgent => Some(View::AiAgent),
            Topic::ShowDoctorStatus => Some(View::DoctorStatus),
            Topic::ShowAppointments => Some(View::Appointments),
            Topic::ShowTreatments => Some(View::Treatments),
            Topic::ShowBedUtilization => Some(View::Beds),
            Topic::ShowStaffOptimization => Some(View::Staff),
            Topic::ResetNotificationCount | Topic::ShowNotifications => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| format!("Unknown topic: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_exact() {
        let names: Vec<&str> = Topic::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "showCriticalPatients",
                "showAIAgent",
                "showDoctorStatus",
                "showAppointments",
                "showTreatments",
                "showBedUtilization",
                "showStaffOptimization",
                "resetNotificationCount",
                "showNotifications",
            ]
        );
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for topic in Topic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.as_str()));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("showAIAgent".parse::<Topic>().unwrap(), Topic::ShowAiAgent);
        assert!("showAiAgent".parse::<Topic>().is_err());
        assert!("showEverything".parse::<Topic>().is_err());
    }

    #[test]
    fn test_routing_topics_have_targets() {
        for topic in Topic::ROUTING {
            assert!(topic.target_view().is_some(), "{topic}");
        }
        assert!(Topic::ShowNotifications.target_view().is_none());
        assert!(Topic::ResetNotificationCount.target_view().is_none());
    }
}
