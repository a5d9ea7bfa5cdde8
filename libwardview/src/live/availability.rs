//! Doctor availability by specialty

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{shares, walk, Share, Simulate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String,
    pub available: u32,
    pub busy: u32,
    pub offline: u32,
}

impl Specialty {
    pub fn new(name: &str, available: u32, busy: u32, offline: u32) -> Self {
        Self {
            name: name.to_string(),
            available,
            busy,
            offline,
        }
    }

    pub fn total(&self) -> u32 {
        self.available + self.busy + self.offline
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAvailability {
    pub specialties: Vec<Specialty>,
}

impl Default for DoctorAvailability {
    fn default() -> Self {
        Self {
            specialties: vec![
                Specialty::new("Cardiology", 4, 1, 0),
                Specialty::new("Neurology", 2, 2, 1),
                Specialty::new("Pediatrics", 3, 2, 0),
                Specialty::new("Orthopedics", 2, 1, 0),
                Specialty::new("Dermatology", 2, 0, 1),
                Specialty::new("Psychiatry", 1, 1, 1),
                Specialty::new("Emergency", 5, 1, 1),
            ],
        }
    }
}

impl DoctorAvailability {
    /// Overall available/busy/offline breakdown
    pub fn overall(&self) -> Vec<Share> {
        let (available, busy, offline) = self.specialties.iter().fold((0, 0, 0), |acc, s| {
            (acc.0 + s.available, acc.1 + s.busy, acc.2 + s.offline)
        });
        shares(&[("Available", available), ("Busy", busy), ("Offline", offline)])
    }
}

impl Simulate for DoctorAvailability {
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for specialty in &mut self.specialties {
            specialty.available = walk(rng, specialty.available, -1, 1);
            specialty.busy = walk(rng, specialty.busy, -1, 1);
            specialty.offline = walk(rng, specialty.offline, -1, 0);
        }
    }
}
