//! Patient census by department

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{shares, walk, Share, Simulate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub inhouse: u32,
    pub opd: u32,
}

impl Department {
    pub fn new(name: &str, inhouse: u32, opd: u32) -> Self {
        Self {
            name: name.to_string(),
            inhouse,
            opd,
        }
    }
}

/// In-house and outpatient totals with their share of all patients
#[derive(Debug, Clone, PartialEq)]
pub struct CensusSplit {
    pub inhouse: u32,
    pub opd: u32,
    pub shares: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientCensus {
    pub departments: Vec<Department>,
}

impl Default for PatientCensus {
    fn default() -> Self {
        Self {
            departments: vec![
                Department::new("ICU", 12, 0),
                Department::new("Emergency", 8, 15),
                Department::new("Cardiology", 6, 25),
                Department::new("Neurology", 4, 18),
                Department::new("Pediatrics", 5, 22),
                Department::new("Orthopedics", 3, 20),
            ],
        }
    }
}

impl PatientCensus {
    pub fn split(&self) -> CensusSplit {
        let inhouse = self.departments.iter().map(|d| d.inhouse).sum();
        let opd = self.departments.iter().map(|d| d.opd).sum();
        CensusSplit {
            inhouse,
            opd,
            shares: shares(&[("In-house", inhouse), ("OPD", opd)]),
        }
    }
}

impl Simulate for PatientCensus {
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for department in &mut self.departments {
            department.inhouse = walk(rng, department.inhouse, -2, 1);
            department.opd = walk(rng, department.opd, -3, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_split() {
        let split = PatientCensus::default().split();
        assert_eq!(split.inhouse, 38);
        assert_eq!(split.opd, 100);
        assert_eq!(split.shares[0].name, "In-house");
        assert_eq!(split.shares[1].name, "OPD");
    }

    #[test]
    fn test_step_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut census = PatientCensus::default();

        for _ in 0..200 {
            let before = census.clone();
            census.step(&mut rng);
            for (old, new) in before.departments.iter().zip(&census.departments) {
                assert!(new.inhouse >= 1 && new.opd >= 1);
                assert!(i64::from(new.inhouse) - i64::from(old.inhouse) <= 1);
                assert!(i64::from(new.opd) - i64::from(old.opd) <= 2);
                assert!(i64::from(old.opd) - i64::from(new.opd) <= 3);
            }
        }
    }

    #[test]
    fn test_step_keeps_department_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut census = PatientCensus::default();
        census.step(&mut rng);

        let names: Vec<&str> = census.departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ICU", "Emergency", "Cardiology", "Neurology", "Pediatrics", "Orthopedics"]
        );
    }
}
