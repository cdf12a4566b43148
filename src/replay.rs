//! Recorded-drive replay.
//!
//! Stands in for the control loop on the host: feeds recorded cycles
//! through a [`SafetyClassifier`] in order, carrying the previous snapshot
//! forward exactly as the vehicle loop does.  Each cycle is one JSON object
//! per line:
//!
//! ```text
//! {"car_state": {"vEgo": 12.0, "doorOpen": true, ...}, "car_control": {"enabled": false, "accel": 0.0}}
//! ```

use serde::{Deserialize, Serialize};

use crate::car_state::{CarControl, CarState};
use crate::config::VehicleConfig;
use crate::error::Result;
use crate::events::EventSet;
use crate::safety::SafetyClassifier;

/// One recorded control cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleRecord {
    pub car_state: CarState,
    pub car_control: CarControl,
}

/// Drives a classifier through a sequence of recorded cycles.
#[derive(Debug, Clone)]
pub struct Replay {
    classifier: SafetyClassifier,
    prev: CarState,
    cycles: u64,
}

impl Replay {
    pub fn new(config: VehicleConfig) -> Self {
        Self {
            classifier: SafetyClassifier::new(config),
            prev: CarState::default(),
            cycles: 0,
        }
    }

    /// Classify one cycle; the snapshot becomes the next cycle's previous.
    pub fn step(&mut self, record: CycleRecord) -> EventSet {
        let events = self
            .classifier
            .update(&record.car_state, &self.prev, &record.car_control);
        self.prev = record.car_state;
        self.cycles += 1;
        events
    }

    /// Decode one JSON line and classify it.  Blank lines yield `None`.
    pub fn step_json(&mut self, line: &str) -> Result<Option<EventSet>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let record: CycleRecord = serde_json::from_str(line)?;
        Ok(Some(self.step(record)))
    }

    /// Cycles classified so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn classifier(&self) -> &SafetyClassifier {
        &self.classifier
    }
}
