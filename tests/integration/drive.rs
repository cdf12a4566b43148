//! Test drive harness.
//!
//! Wraps a classifier and remembers the previous snapshot so tests can be
//! written as a sequence of cycles without threading `prev` by hand.

use carevents::{CarControl, CarState, EventSet, GearShifter, SafetyClassifier, VehicleConfig};

/// A snapshot with nothing to complain about: in drive, cruise available,
/// moving at 25 m/s.
pub fn nominal() -> CarState {
    let mut cs = CarState {
        gear_shifter: GearShifter::Drive,
        v_ego: 25.0,
        ..CarState::default()
    };
    cs.cruise_state.available = true;
    cs
}

/// `nominal()` at a different speed.
pub fn at_speed(v_ego: f32) -> CarState {
    CarState {
        v_ego,
        ..nominal()
    }
}

/// `nominal()` with the cruise module engaged or not.
pub fn cruise(enabled: bool) -> CarState {
    let mut cs = nominal();
    cs.cruise_state.enabled = enabled;
    cs
}

pub struct Drive {
    pub classifier: SafetyClassifier,
    prev: CarState,
    pub control: CarControl,
}

#[allow(dead_code)]
impl Drive {
    /// Start a drive whose first "previous" snapshot is `nominal()`.
    pub fn new(config: VehicleConfig) -> Self {
        Self::starting_from(config, nominal())
    }

    pub fn starting_from(config: VehicleConfig, prev: CarState) -> Self {
        Self {
            classifier: SafetyClassifier::new(config),
            prev,
            control: CarControl::default(),
        }
    }

    /// Run one cycle with the current control output.
    pub fn step(&mut self, cs: CarState) -> EventSet {
        let events = self.classifier.update(&cs, &self.prev, &self.control);
        self.prev = cs;
        events
    }

    /// Run `n` identical cycles and return the events of the last one.
    pub fn hold(&mut self, cs: &CarState, n: usize) -> EventSet {
        let mut events = EventSet::new();
        for _ in 0..n {
            events = self.step(cs.clone());
        }
        events
    }
}
