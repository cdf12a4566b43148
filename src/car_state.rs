//! Per-cycle vehicle state and control output.
//!
//! `CarState` is the snapshot the classifier reads; the control loop keeps
//! the current and the previous cycle's copy and hands both in.  `CarControl`
//! is the most recent control output.  Both are plain owned data: the
//! classifier never keeps a reference to either past the call.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Gear shifter
// ---------------------------------------------------------------------------

/// Gear-shifter position as reported by the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GearShifter {
    #[default]
    Unknown,
    Park,
    Drive,
    Neutral,
    Reverse,
    Sport,
    Low,
    Brake,
    Eco,
    Manumatic,
}

impl GearShifter {
    pub const ALL: [Self; 10] = [
        Self::Unknown,
        Self::Park,
        Self::Drive,
        Self::Neutral,
        Self::Reverse,
        Self::Sport,
        Self::Low,
        Self::Brake,
        Self::Eco,
        Self::Manumatic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Park => "park",
            Self::Drive => "drive",
            Self::Neutral => "neutral",
            Self::Reverse => "reverse",
            Self::Sport => "sport",
            Self::Low => "low",
            Self::Brake => "brake",
            Self::Eco => "eco",
            Self::Manumatic => "manumatic",
        }
    }
}

impl fmt::Display for GearShifter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GearShifter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or(Error::UnknownGear)
    }
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Steering-wheel / stalk button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonType {
    #[default]
    Unknown,
    LeftBlinker,
    RightBlinker,
    AccelCruise,
    DecelCruise,
    Cancel,
    Lkas,
    AltButton1,
    SetCruise,
    ResumeCruise,
    GapAdjustCruise,
    MainCruise,
}

impl ButtonType {
    pub const ALL: [Self; 12] = [
        Self::Unknown,
        Self::LeftBlinker,
        Self::RightBlinker,
        Self::AccelCruise,
        Self::DecelCruise,
        Self::Cancel,
        Self::Lkas,
        Self::AltButton1,
        Self::SetCruise,
        Self::ResumeCruise,
        Self::GapAdjustCruise,
        Self::MainCruise,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::LeftBlinker => "leftBlinker",
            Self::RightBlinker => "rightBlinker",
            Self::AccelCruise => "accelCruise",
            Self::DecelCruise => "decelCruise",
            Self::Cancel => "cancel",
            Self::Lkas => "lkas",
            Self::AltButton1 => "altButton1",
            Self::SetCruise => "setCruise",
            Self::ResumeCruise => "resumeCruise",
            Self::GapAdjustCruise => "gapAdjustCruise",
            Self::MainCruise => "mainCruise",
        }
    }
}

impl FromStr for ButtonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or(Error::UnknownButton)
    }
}

/// A single press or release transition seen this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonEvent {
    /// `true` on press, `false` on release.
    #[serde(default)]
    pub pressed: bool,
    #[serde(rename = "type")]
    pub kind: ButtonType,
}

impl ButtonEvent {
    pub const fn press(kind: ButtonType) -> Self {
        Self { pressed: true, kind }
    }

    pub const fn release(kind: ButtonType) -> Self {
        Self { pressed: false, kind }
    }
}

// ---------------------------------------------------------------------------
// Cruise state
// ---------------------------------------------------------------------------

/// State of the vehicle's own cruise-control module.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CruiseState {
    pub enabled: bool,
    pub available: bool,
    /// Cruise is holding the car stopped and needs a resume.
    pub standstill: bool,
    /// Plain (non-adaptive) cruise is selected.
    pub non_adaptive: bool,
}

// ---------------------------------------------------------------------------
// Vehicle snapshot
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of every vehicle signal the classifier reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarState {
    // -- Body --
    pub door_open: bool,
    pub seatbelt_unlatched: bool,
    pub gear_shifter: GearShifter,

    // -- Cruise --
    pub cruise_state: CruiseState,
    pub acc_faulted: bool,
    pub button_enable: bool,
    /// Button transitions this cycle, in the order they happened.
    pub button_events: Vec<ButtonEvent>,

    // -- Stability / stock ADAS --
    pub esp_disabled: bool,
    pub esp_active: bool,
    pub stock_fcw: bool,
    pub stock_aeb: bool,

    // -- Motion --
    /// Longitudinal speed (m/s), signed.
    pub v_ego: f32,
    pub standstill: bool,

    // -- Pedals and brakes --
    pub brake_pressed: bool,
    /// Brake pedal position / pressure, brand units.
    pub brake: f32,
    pub gas_pressed: bool,
    pub brake_hold_active: bool,
    pub parking_brake: bool,

    // -- Steering --
    pub steering_pressed: bool,
    pub steer_fault_temporary: bool,
    pub steer_fault_permanent: bool,
    /// Vehicle itself reports it is below its steering cut-off.
    pub low_speed_alert: bool,

    // -- Integrity --
    pub vehicle_sensors_invalid: bool,
    pub invalid_lkas_setting: bool,
}

impl CarState {
    /// Whether any button transition this cycle is of the given type.
    pub fn has_button(&self, kind: ButtonType) -> bool {
        self.button_events.iter().any(|b| b.kind == kind)
    }

    /// Whether any button transition this cycle is in `kinds`.
    pub fn has_any_button(&self, kinds: &[ButtonType]) -> bool {
        self.button_events.iter().any(|b| kinds.contains(&b.kind))
    }
}

// ---------------------------------------------------------------------------
// Control output
// ---------------------------------------------------------------------------

/// Latest output of the control stack.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarControl {
    /// System is currently engaged.
    pub enabled: bool,
    /// Commanded longitudinal acceleration (m/s²).
    pub accel: f32,
}
