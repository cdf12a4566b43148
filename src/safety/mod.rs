//! Safety-event classifier.
//!
//! Runs **once per control cycle** after the vehicle snapshot is decoded and
//! before the alert supervisor.  Given the current and previous snapshot and
//! the latest control output it produces the complete set of events for the
//! cycle:
//!
//! ```text
//!  (CarState, CarState prev, CarControl)
//!            │
//!            ▼
//!   BrandRules::for_vehicle(config) ── Unmonitored ──▶ {}
//!            │
//!            ▼
//!   common_events(.., CommonParams, &mut HysteresisState)
//!            │
//!            ▼
//!   BrandRules::extra_events(.., &mut HysteresisState)
//!            │
//!            ▼
//!         EventSet
//! ```
//!
//! The only memory is [`HysteresisState`]; the event set itself is built
//! fresh every cycle.

pub mod brand;
pub mod common;

use log::{debug, info};

use crate::car_state::{CarControl, CarState};
use crate::config::VehicleConfig;
use crate::events::EventSet;
use crate::hysteresis::HysteresisState;

pub use brand::{BrandRules, LowSpeedBand};
pub use common::{CommonParams, common_events};

/// Classify one cycle.
///
/// Stateless apart from `state`, which carries the latches between cycles.
pub fn classify(
    cs: &CarState,
    cs_prev: &CarState,
    cc: &CarControl,
    config: &VehicleConfig,
    state: &mut HysteresisState,
) -> EventSet {
    classify_with(&BrandRules::for_vehicle(config), cs, cs_prev, cc, config, state)
}

fn classify_with(
    rules: &BrandRules,
    cs: &CarState,
    cs_prev: &CarState,
    cc: &CarControl,
    config: &VehicleConfig,
    state: &mut HysteresisState,
) -> EventSet {
    let params = match rules {
        BrandRules::Unmonitored => return EventSet::new(),
        BrandRules::Common(p)
        | BrandRules::Chrysler(p, _)
        | BrandRules::Honda(p)
        | BrandRules::Toyota(p)
        | BrandRules::Gm(p)
        | BrandRules::Volkswagen(p, _) => *p,
        BrandRules::Hyundai(p, _) => {
            // The cancel button doubles as pause/resume on newer cars; only
            // follow the cruise module if the driver asked for it recently.
            let intent = cs.has_any_button(&brand::HYUNDAI_ENABLE_BUTTONS);
            state.cruise_buttons.push(intent);
            CommonParams {
                allow_enable: state.cruise_buttons.any(),
                ..*p
            }
        }
    };

    let common = common_events(cs, cs_prev, config, &params, state);
    let events = common.union(rules.extra_events(cs, cs_prev, cc, config, state));

    debug!("cycle events: {events}");
    events
}

/// Classifier instance bound to one vehicle.
///
/// Owns the configuration, the resolved brand rules and the hysteresis
/// state for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SafetyClassifier {
    config: VehicleConfig,
    rules: BrandRules,
    state: HysteresisState,
}

impl SafetyClassifier {
    pub fn new(config: VehicleConfig) -> Self {
        let rules = BrandRules::for_vehicle(&config);
        info!(
            "safety classifier: brand={} pcm_cruise={} long_control={}",
            config.brand, config.pcm_cruise, config.openpilot_longitudinal_control
        );
        Self {
            config,
            rules,
            state: HysteresisState::new(),
        }
    }

    /// Evaluate one cycle and return its events.
    pub fn update(&mut self, cs: &CarState, cs_prev: &CarState, cc: &CarControl) -> EventSet {
        classify_with(&self.rules, cs, cs_prev, cc, &self.config, &mut self.state)
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub fn rules(&self) -> &BrandRules {
        &self.rules
    }

    /// Cross-cycle state (read-only).
    pub fn state(&self) -> &HysteresisState {
        &self.state
    }
}
