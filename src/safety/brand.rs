//! Per-brand rule bundles.
//!
//! Every [`Brand`] resolves to exactly one [`BrandRules`] variant.  The
//! variant carries the overrides handed to the common rules plus whatever
//! extra rules the brand layers on top.  Matching is exhaustive, so a new
//! brand does not compile until it is given a bundle.

use log::info;

use crate::car_state::{ButtonType, CarControl, CarState, GearShifter};
use crate::config::{Brand, NetworkLocation, STANDSTILL_SPEED, VehicleConfig};
use crate::events::{EventName, EventSet};
use crate::hysteresis::HysteresisState;

use super::common::CommonParams;

/// Volkswagen EPS racks fault below this speed on their own; no low-speed
/// alert is shown for a minimum steer speed at or below it (m/s).
pub const VW_DEFAULT_MIN_STEER_SPEED: f32 = 0.4;

/// Cruise buttons that count as driver intent to engage on Hyundai.
pub const HYUNDAI_ENABLE_BUTTONS: [ButtonType; 4] = [
    ButtonType::AccelCruise,
    ButtonType::DecelCruise,
    ButtonType::Cancel,
    ButtonType::MainCruise,
];

/// Toyota: positive acceleration command that makes a low-speed stop a
/// real cancellation rather than normal stopping.
const TOYOTA_SPEED_TOO_LOW_ACCEL: f32 = 0.3;

/// Honda: margin above the engage speed inside which a cruise dropout is
/// expected and alerted quietly (m/s).
const HONDA_QUIET_DISENGAGE_MARGIN: f32 = 2.0;

/// Volkswagen: engage-speed margin under own longitudinal control (m/s).
const VW_ENGAGE_MARGIN: f32 = 0.5;

/// GM: brake position that counts as firmly held for a standstill enable.
const GM_STANDSTILL_BRAKE: f32 = 20.0;

// ---------------------------------------------------------------------------
// Low-speed steering alert band
// ---------------------------------------------------------------------------

/// When the low-speed band is active for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandArm {
    /// Minimum steer speed is positive.
    Positive,
    /// Minimum steer speed exceeds the given floor (m/s).
    Above(f32),
}

/// Asymmetric hysteresis band above the minimum steer speed.
///
/// The alert latches once speed falls below `min + enter` and clears only
/// after speed rises past `min + exit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowSpeedBand {
    pub arm: BandArm,
    pub enter: f32,
    pub exit: f32,
}

impl LowSpeedBand {
    pub const CHRYSLER: Self = Self {
        arm: BandArm::Positive,
        enter: 0.5,
        exit: 1.0,
    };

    pub const VOLKSWAGEN: Self = Self {
        // Small epsilon so a fingerprint of exactly the default does not arm.
        arm: BandArm::Above(VW_DEFAULT_MIN_STEER_SPEED + 1e-3),
        enter: 1.0,
        exit: 2.0,
    };

    /// Only cars that cut steering above 10 m/s.
    pub const HYUNDAI: Self = Self {
        arm: BandArm::Above(10.0),
        enter: 2.0,
        exit: 4.0,
    };

    pub fn is_armed(&self, min_steer_speed: f32) -> bool {
        match self.arm {
            BandArm::Positive => min_steer_speed > 0.0,
            BandArm::Above(floor) => min_steer_speed > floor,
        }
    }

    /// Advance the latch for this cycle and return whether it is set.
    pub fn update(&self, latch: &mut bool, v_ego: f32, min_steer_speed: f32) -> bool {
        if self.is_armed(min_steer_speed) && v_ego < min_steer_speed + self.enter {
            if !*latch {
                info!("low speed steer alert: set at {v_ego:.2} m/s (min {min_steer_speed:.2})");
            }
            *latch = true;
        } else if v_ego > min_steer_speed + self.exit {
            if *latch {
                info!("low speed steer alert: cleared at {v_ego:.2} m/s");
            }
            *latch = false;
        }
        *latch
    }
}

// ---------------------------------------------------------------------------
// Rule bundles
// ---------------------------------------------------------------------------

/// Rules selected for one brand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrandRules {
    /// Externally monitored platform; the classifier raises nothing.
    Unmonitored,
    /// Common rules only.
    Common(CommonParams),
    Chrysler(CommonParams, LowSpeedBand),
    Honda(CommonParams),
    Toyota(CommonParams),
    Gm(CommonParams),
    Volkswagen(CommonParams, LowSpeedBand),
    /// Enable is vetoed unless an intent button was seen recently; the veto
    /// is resolved per cycle from the button window.
    Hyundai(CommonParams, LowSpeedBand),
}

impl BrandRules {
    /// Resolve the bundle for a vehicle.
    pub fn for_vehicle(config: &VehicleConfig) -> Self {
        match config.brand {
            Brand::Body | Brand::Mock => Self::Unmonitored,
            Brand::Ford => Self::Common(CommonParams::with_gears(&[GearShifter::Manumatic])),
            Brand::Nissan => Self::Common(CommonParams::with_gears(&[GearShifter::Brake])),
            Brand::Chrysler => Self::Chrysler(
                CommonParams::with_gears(&[GearShifter::Low]),
                LowSpeedBand::CHRYSLER,
            ),
            Brand::Honda => Self::Honda(CommonParams {
                pcm_enable: false,
                ..CommonParams::default()
            }),
            Brand::Toyota => Self::Toyota(CommonParams::default()),
            Brand::Gm => Self::Gm(CommonParams {
                extra_gears: &[
                    GearShifter::Sport,
                    GearShifter::Low,
                    GearShifter::Eco,
                    GearShifter::Manumatic,
                ],
                pcm_enable: config.pcm_cruise,
                ..CommonParams::default()
            }),
            Brand::Volkswagen => Self::Volkswagen(
                CommonParams {
                    extra_gears: &[GearShifter::Eco, GearShifter::Sport, GearShifter::Manumatic],
                    pcm_enable: config.pcm_cruise,
                    ..CommonParams::default()
                },
                LowSpeedBand::VOLKSWAGEN,
            ),
            Brand::Hyundai => Self::Hyundai(
                CommonParams {
                    extra_gears: &[GearShifter::Sport, GearShifter::Manumatic],
                    pcm_enable: config.pcm_cruise,
                    allow_button_cancel: false,
                    ..CommonParams::default()
                },
                LowSpeedBand::HYUNDAI,
            ),
            Brand::Mazda | Brand::Psa | Brand::Rivian | Brand::Subaru | Brand::Tesla => {
                Self::Common(CommonParams::default())
            }
        }
    }

    /// Brand-specific events layered over the common ones.
    ///
    /// Hyundai's button window is fed by the caller before the common
    /// rules run, so it is not touched here.
    pub fn extra_events(
        &self,
        cs: &CarState,
        cs_prev: &CarState,
        cc: &CarControl,
        config: &VehicleConfig,
        state: &mut HysteresisState,
    ) -> EventSet {
        let mut events = EventSet::new();
        match self {
            Self::Unmonitored | Self::Common(_) => {}
            Self::Chrysler(_, band) | Self::Volkswagen(_, band) | Self::Hyundai(_, band) => {
                if band.update(&mut state.low_speed_alert, cs.v_ego, config.min_steer_speed) {
                    events.add(EventName::BelowSteerSpeed);
                }
                if matches!(self, Self::Volkswagen(..)) {
                    volkswagen_events(cs, cc, config, &mut events);
                }
            }
            Self::Honda(_) => honda_events(cs, cs_prev, cc, config, &mut events),
            Self::Toyota(_) => toyota_events(cs, cc, config, &mut events),
            Self::Gm(_) => gm_events(cs, config, &mut events),
        }
        events
    }
}

// ---------------------------------------------------------------------------
// Brand-only rules
// ---------------------------------------------------------------------------

fn honda_events(
    cs: &CarState,
    cs_prev: &CarState,
    cc: &CarControl,
    config: &VehicleConfig,
    events: &mut EventSet,
) {
    if config.pcm_cruise {
        if cs.v_ego < config.min_enable_speed {
            events.add(EventName::BelowEngageSpeed);
        }

        if cs.cruise_state.enabled && !cs_prev.cruise_state.enabled {
            events.add(EventName::PcmEnable);
        } else if !cs.cruise_state.enabled
            && (cc.accel >= 0.0 || !config.openpilot_longitudinal_control)
        {
            // Level-triggered: repeats every cycle cruise stays off, unlike
            // the edge-triggered common `PcmDisable`.
            // Keep braking through a cruise dropout; disengage once not braking.
            if cs.v_ego < config.min_enable_speed + HONDA_QUIET_DISENGAGE_MARGIN {
                events.add(EventName::SpeedTooLow);
            } else {
                events.add(EventName::CruiseDisabled);
            }
        }
    }
    if config.min_enable_speed > 0.0 && cs.v_ego < STANDSTILL_SPEED {
        events.add(EventName::ManualRestart);
    }
}

fn toyota_events(cs: &CarState, cc: &CarControl, config: &VehicleConfig, events: &mut EventSet) {
    if !config.openpilot_longitudinal_control {
        return;
    }
    if cs.cruise_state.standstill && !cs.brake_pressed {
        events.add(EventName::ResumeRequired);
    }
    if cs.v_ego < config.min_enable_speed {
        events.add(EventName::BelowEngageSpeed);
        // Margin on the actuator so normal stopping does not cancel.
        if cc.accel > TOYOTA_SPEED_TOO_LOW_ACCEL {
            events.add(EventName::SpeedTooLow);
        }
        if cs.v_ego < STANDSTILL_SPEED {
            events.add(EventName::ManualRestart);
        }
    }
}

fn gm_events(cs: &CarState, config: &VehicleConfig, events: &mut EventSet) {
    let standstill_brake_enable = cs.standstill
        && cs.brake >= GM_STANDSTILL_BRAKE
        && config.network_location == NetworkLocation::FwdCamera;
    if cs.v_ego < config.min_enable_speed && !standstill_brake_enable {
        events.add(EventName::BelowEngageSpeed);
    }
    if cs.cruise_state.standstill {
        events.add(EventName::ResumeRequired);
    }
    if cs.v_ego < config.min_steer_speed {
        events.add(EventName::BelowSteerSpeed);
    }
}

fn volkswagen_events(cs: &CarState, cc: &CarControl, config: &VehicleConfig, events: &mut EventSet) {
    if !config.openpilot_longitudinal_control {
        return;
    }
    if cs.v_ego < config.min_enable_speed + VW_ENGAGE_MARGIN {
        events.add(EventName::BelowEngageSpeed);
    }
    if cc.enabled && cs.v_ego < config.min_enable_speed {
        events.add(EventName::SpeedTooLow);
    }
}
