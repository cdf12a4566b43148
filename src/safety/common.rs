//! Brand-independent rules.
//!
//! Each rule looks at the current snapshot (and, for edges, the previous
//! one) and raises at most a couple of events.  They are independent of
//! each other except for the steering-fault monitor, which is the only
//! rule with memory and which updates the steering fields of
//! [`HysteresisState`].

use log::{info, warn};

use crate::car_state::{ButtonType, CarState, GearShifter};
use crate::config::{MAX_CTRL_SPEED, STEER_UNPRESSED_ALERT_CYCLES, VehicleConfig};
use crate::events::{EventName, EventSet};
use crate::hysteresis::HysteresisState;

/// Brand overrides for the common rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonParams {
    /// Gear positions other than drive that the brand allows engaged.
    pub extra_gears: &'static [GearShifter],
    /// Raise enable/disable on cruise-module edges.
    pub pcm_enable: bool,
    /// External veto for the rising-edge enable.
    pub allow_enable: bool,
    /// Handle cancel presses even when the cruise module owns engagement.
    pub allow_button_cancel: bool,
}

impl Default for CommonParams {
    fn default() -> Self {
        Self {
            extra_gears: &[],
            pcm_enable: true,
            allow_enable: true,
            allow_button_cancel: true,
        }
    }
}

impl CommonParams {
    pub fn with_gears(extra_gears: &'static [GearShifter]) -> Self {
        Self {
            extra_gears,
            ..Self::default()
        }
    }
}

/// Evaluate every brand-independent rule for one cycle.
pub fn common_events(
    cs: &CarState,
    cs_prev: &CarState,
    config: &VehicleConfig,
    params: &CommonParams,
    state: &mut HysteresisState,
) -> EventSet {
    let mut events = EventSet::new();

    // ── Body / gear ───────────────────────────────────────────
    if cs.door_open {
        events.add(EventName::DoorOpen);
    }
    if cs.seatbelt_unlatched {
        events.add(EventName::SeatbeltNotLatched);
    }
    if cs.gear_shifter != GearShifter::Drive && !params.extra_gears.contains(&cs.gear_shifter) {
        events.add(EventName::WrongGear);
    }
    if cs.gear_shifter == GearShifter::Reverse {
        events.add(EventName::ReverseGear);
    }

    // ── Cruise module / stability control ─────────────────────
    if !cs.cruise_state.available {
        events.add(EventName::WrongCarMode);
    }
    if cs.esp_disabled {
        events.add(EventName::EspDisabled);
    }
    if cs.esp_active {
        events.add(EventName::EspActive);
    }
    if cs.stock_fcw {
        events.add(EventName::StockFcw);
    }
    if cs.stock_aeb {
        events.add(EventName::StockAeb);
    }
    if cs.v_ego > MAX_CTRL_SPEED {
        events.add(EventName::SpeedTooHigh);
    }
    if cs.cruise_state.non_adaptive {
        events.add(EventName::WrongCruiseMode);
    }
    if cs.brake_hold_active && config.openpilot_longitudinal_control {
        events.add(EventName::BrakeHold);
    }
    if cs.parking_brake {
        events.add(EventName::ParkBrake);
    }
    if cs.acc_faulted {
        events.add(EventName::AccFaulted);
    }

    // ── Driver input ──────────────────────────────────────────
    if cs.steering_pressed {
        events.add(EventName::SteerOverride);
    }
    if cs.brake_pressed && cs.standstill {
        events.add(EventName::PreEnableStandstill);
    }
    if cs.gas_pressed {
        events.add(EventName::GasPressedOverride);
    }

    // ── Vehicle-reported status ───────────────────────────────
    if cs.vehicle_sensors_invalid {
        events.add(EventName::VehicleSensorsInvalid);
    }
    if cs.invalid_lkas_setting {
        events.add(EventName::InvalidLkasSetting);
    }
    if cs.low_speed_alert {
        events.add(EventName::BelowSteerSpeed);
    }
    if cs.button_enable {
        events.add(EventName::ButtonEnable);
    }

    // Cancel on both press and release.
    if cs.has_button(ButtonType::Cancel) && (params.allow_button_cancel || !config.pcm_cruise) {
        events.add(EventName::ButtonCancel);
    }

    if let Some(event) = steer_fault_event(cs, cs_prev, state) {
        events.add(event);
    }
    if cs.steer_fault_permanent {
        events.add(EventName::SteerUnavailable);
    }

    // ── Cruise-module engagement edges ────────────────────────
    if params.pcm_enable {
        let enabled = cs.cruise_state.enabled;
        let was_enabled = cs_prev.cruise_state.enabled;
        if enabled && !was_enabled && params.allow_enable {
            events.add(EventName::PcmEnable);
        } else if !enabled && was_enabled {
            events.add(EventName::PcmDisable);
        }
    }

    events
}

/// Temporary steering-fault monitor.
///
/// A fault the driver is steering through is suppressed entirely.  A fault
/// that follows recent driver input, happens at standstill, or continues
/// one already reported quietly is raised silently; anything else is
/// raised audibly.
pub fn steer_fault_event(
    cs: &CarState,
    cs_prev: &CarState,
    state: &mut HysteresisState,
) -> Option<EventName> {
    state.steering_unpressed = if cs.steering_pressed {
        0
    } else {
        state.steering_unpressed.saturating_add(1)
    };

    if !cs.steer_fault_temporary {
        state.no_steer_warning = false;
        state.silent_steer_warning = false;
        return None;
    }

    if cs.steering_pressed && (!cs_prev.steer_fault_temporary || state.no_steer_warning) {
        state.no_steer_warning = true;
        return None;
    }
    state.no_steer_warning = false;

    if state.silent_steer_warning
        || cs.standstill
        || state.steering_unpressed < STEER_UNPRESSED_ALERT_CYCLES
    {
        if !state.silent_steer_warning {
            info!("steer fault: reporting silently (unpressed {} cycles)", state.steering_unpressed);
        }
        state.silent_steer_warning = true;
        Some(EventName::SteerTempUnavailableSilent)
    } else {
        warn!("steer fault: audible alert (unpressed {} cycles)", state.steering_unpressed);
        Some(EventName::SteerTempUnavailable)
    }
}
