//! Rotating highlight over a list of trends

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Simulate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPulse {
    pub trends: Vec<String>,
    pub index: usize,
}

impl TrendPulse {
    pub fn new<I, S>(trends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trends: trends.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    /// The trend currently highlighted, if any
    pub fn current(&self) -> Option<&str> {
        self.trends.get(self.index).map(String::as_str)
    }
}

impl Simulate for TrendPulse {
    fn step<R: Rng + ?Sized>(&mut self, _rng: &mut R) {
        if !self.trends.is_empty() {
            self.index = (self.index + 1) % self.trends.len();
        }
    }
}
