//! Mock records rendered by the dashboard panels
//!
//! Static fixtures only. The controller never reads these.

use libwardview::live::{shares, Share};
use libwardview::Topic;

/// A clickable summary card on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    pub topic: Topic,
}

pub static STAT_CARDS: [StatCard; 7] = [
    StatCard {
        title: "Upcoming Appointments",
        value: "47",
        detail: "Next: Dr. Smith 9:00 AM",
        topic: Topic::ShowAppointments,
    },
    StatCard {
        title: "Active Treatments",
        value: "156",
        detail: "12 critical, 89 stable, 55 recovering",
        topic: Topic::ShowTreatments,
    },
    StatCard {
        title: "Critical Alerts",
        value: "8",
        detail: "AI-detected emergencies",
        topic: Topic::ShowCriticalPatients,
    },
    StatCard {
        title: "Bed Utilization",
        value: "87%",
        detail: "234/268 beds, 12 ICU available",
        topic: Topic::ShowBedUtilization,
    },
    StatCard {
        title: "Staff Optimization",
        value: "94%",
        detail: "87 active, 12 on-call",
        topic: Topic::ShowStaffOptimization,
    },
    StatCard {
        title: "AI Agent Status",
        value: "Online",
        detail: "Ready to assist",
        topic: Topic::ShowAiAgent,
    },
    StatCard {
        title: "Doctor Status",
        value: "31",
        detail: "On shift across 7 specialties",
        topic: Topic::ShowDoctorStatus,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalPatient {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub condition: &'static str,
    pub location: &'static str,
    pub heart_rate: u16,
    pub blood_pressure: &'static str,
    pub spo2: u8,
}

pub static CRITICAL_PATIENTS: [CriticalPatient; 4] = [
    CriticalPatient {
        id: "PA-2024-001",
        name: "Bob Anderson",
        age: 67,
        condition: "Imminent Cardiac Arrest Risk",
        location: "Home - 1234 Oak Street, Springfield, IL",
        heart_rate: 142,
        blood_pressure: "180/110",
        spo2: 88,
    },
    CriticalPatient {
        id: "PA-2024-002",
        name: "Maria Lopez",
        age: 54,
        condition: "Severe Sepsis",
        location: "ICU Bed 4",
        heart_rate: 124,
        blood_pressure: "85/50",
        spo2: 91,
    },
    CriticalPatient {
        id: "PA-2024-003",
        name: "James Okafor",
        age: 72,
        condition: "Acute Stroke Symptoms",
        location: "Emergency Bay 2",
        heart_rate: 98,
        blood_pressure: "195/120",
        spo2: 94,
    },
    CriticalPatient {
        id: "PA-2024-004",
        name: "Linh Tran",
        age: 39,
        condition: "Respiratory Failure",
        location: "En route - Paramedic Team Alpha-7",
        heart_rate: 131,
        blood_pressure: "100/60",
        spo2: 84,
    },
];

pub fn find_patient(id: &str) -> Option<&'static CriticalPatient> {
    CRITICAL_PATIENTS.iter().find(|patient| patient.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialist {
    pub name: &'static str,
    pub focus: &'static str,
    pub status: &'static str,
    pub eta: &'static str,
}

pub static SPECIALISTS: [Specialist; 3] = [
    Specialist {
        name: "Dr. Priya Raman",
        focus: "Interventional Cardiology",
        status: "Available",
        eta: "5 min",
    },
    Specialist {
        name: "Dr. Marcus Hale",
        focus: "Electrophysiology",
        status: "In Surgery",
        eta: "40 min",
    },
    Specialist {
        name: "Dr. Elena Petrova",
        focus: "Cardiac Critical Care",
        status: "On Call",
        eta: "15 min",
    },
];

/// Support staff on shift, by category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffCategory {
    pub category: &'static str,
    pub available: u32,
    pub busy: u32,
    pub offline: u32,
}

pub static SUPPORT_STAFF: [StaffCategory; 6] = [
    StaffCategory {
        category: "ICU Nurses",
        available: 8,
        busy: 4,
        offline: 2,
    },
    StaffCategory {
        category: "General Nurses",
        available: 12,
        busy: 6,
        offline: 3,
    },
    StaffCategory {
        category: "Technicians",
        available: 6,
        busy: 2,
        offline: 1,
    },
    StaffCategory {
        category: "Pharmacists",
        available: 3,
        busy: 1,
        offline: 0,
    },
    StaffCategory {
        category: "Lab Staff",
        available: 5,
        busy: 3,
        offline: 1,
    },
    StaffCategory {
        category: "Admin Staff",
        available: 4,
        busy: 2,
        offline: 1,
    },
];

/// Available/busy/offline breakdown across all support staff
pub fn support_staff_overall() -> Vec<Share> {
    let (available, busy, offline) = SUPPORT_STAFF.iter().fold((0, 0, 0), |acc, s| {
        (acc.0 + s.available, acc.1 + s.busy, acc.2 + s.offline)
    });
    shares(&[("Available", available), ("Busy", busy), ("Offline", offline)])
}

pub static TRENDS: [&str; 4] = [
    "ER admissions up 12% since 06:00",
    "ICU occupancy holding at 92%",
    "Average discharge time down 18 min",
    "Outpatient no-shows at weekly low",
];
