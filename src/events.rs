//! Named safety/status events and the per-cycle event set.
//!
//! The event names are a closed enumeration shared with the downstream
//! alert supervisor; `as_str` yields the identifier that supervisor keys
//! its alert table on.  An [`EventSet`] is a bitmask over that enumeration:
//! no duplicates, no ordering, set equality is integer equality.
//!
//! ```text
//!   bit  0 ─ doorOpen            bit 16 ─ gasPressedOverride
//!   bit  1 ─ seatbeltNotLatched  ...
//!   ...                          bit 31 ─ manualRestart
//! ```

use core::fmt;

/// Every event the classifier can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EventName {
    // ── Body / configuration ──────────────────────────────
    DoorOpen = 0,
    SeatbeltNotLatched = 1,
    WrongGear = 2,
    ReverseGear = 3,
    WrongCarMode = 4,
    WrongCruiseMode = 5,
    ParkBrake = 6,
    BrakeHold = 7,

    // ── Stability control / stock ADAS ────────────────────
    EspDisabled = 8,
    EspActive = 9,
    StockFcw = 10,
    StockAeb = 11,
    AccFaulted = 12,

    // ── Driver override ───────────────────────────────────
    SteerOverride = 13,
    PreEnableStandstill = 14,
    GasPressedOverride = 15,

    // ── Integrity ─────────────────────────────────────────
    VehicleSensorsInvalid = 16,
    InvalidLkasSetting = 17,

    // ── Steering availability ─────────────────────────────
    BelowSteerSpeed = 18,
    SteerTempUnavailableSilent = 19,
    SteerTempUnavailable = 20,
    SteerUnavailable = 21,

    // ── Engagement ────────────────────────────────────────
    ButtonEnable = 22,
    ButtonCancel = 23,
    PcmEnable = 24,
    PcmDisable = 25,
    SpeedTooHigh = 26,
    BelowEngageSpeed = 27,
    SpeedTooLow = 28,
    CruiseDisabled = 29,
    ResumeRequired = 30,
    ManualRestart = 31,
}

impl EventName {
    /// Total number of event names.
    pub const COUNT: usize = 32;

    pub const ALL: [Self; Self::COUNT] = [
        Self::DoorOpen,
        Self::SeatbeltNotLatched,
        Self::WrongGear,
        Self::ReverseGear,
        Self::WrongCarMode,
        Self::WrongCruiseMode,
        Self::ParkBrake,
        Self::BrakeHold,
        Self::EspDisabled,
        Self::EspActive,
        Self::StockFcw,
        Self::StockAeb,
        Self::AccFaulted,
        Self::SteerOverride,
        Self::PreEnableStandstill,
        Self::GasPressedOverride,
        Self::VehicleSensorsInvalid,
        Self::InvalidLkasSetting,
        Self::BelowSteerSpeed,
        Self::SteerTempUnavailableSilent,
        Self::SteerTempUnavailable,
        Self::SteerUnavailable,
        Self::ButtonEnable,
        Self::ButtonCancel,
        Self::PcmEnable,
        Self::PcmDisable,
        Self::SpeedTooHigh,
        Self::BelowEngageSpeed,
        Self::SpeedTooLow,
        Self::CruiseDisabled,
        Self::ResumeRequired,
        Self::ManualRestart,
    ];

    /// Return the bitmask for this event.
    pub const fn mask(self) -> u64 {
        1 << self as u8
    }

    /// Identifier understood by the alert supervisor.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoorOpen => "doorOpen",
            Self::SeatbeltNotLatched => "seatbeltNotLatched",
            Self::WrongGear => "wrongGear",
            Self::ReverseGear => "reverseGear",
            Self::WrongCarMode => "wrongCarMode",
            Self::WrongCruiseMode => "wrongCruiseMode",
            Self::ParkBrake => "parkBrake",
            Self::BrakeHold => "brakeHold",
            Self::EspDisabled => "espDisabled",
            Self::EspActive => "espActive",
            Self::StockFcw => "stockFcw",
            Self::StockAeb => "stockAeb",
            Self::AccFaulted => "accFaulted",
            Self::SteerOverride => "steerOverride",
            Self::PreEnableStandstill => "preEnableStandstill",
            Self::GasPressedOverride => "gasPressedOverride",
            Self::VehicleSensorsInvalid => "vehicleSensorsInvalid",
            Self::InvalidLkasSetting => "invalidLkasSetting",
            Self::BelowSteerSpeed => "belowSteerSpeed",
            Self::SteerTempUnavailableSilent => "steerTempUnavailableSilent",
            Self::SteerTempUnavailable => "steerTempUnavailable",
            Self::SteerUnavailable => "steerUnavailable",
            Self::ButtonEnable => "buttonEnable",
            Self::ButtonCancel => "buttonCancel",
            Self::PcmEnable => "pcmEnable",
            Self::PcmDisable => "pcmDisable",
            Self::SpeedTooHigh => "speedTooHigh",
            Self::BelowEngageSpeed => "belowEngageSpeed",
            Self::SpeedTooLow => "speedTooLow",
            Self::CruiseDisabled => "cruiseDisabled",
            Self::ResumeRequired => "resumeRequired",
            Self::ManualRestart => "manualRestart",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Event set ─────────────────────────────────────────────────

/// Duplicate-free, order-free set of events raised in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventSet(u64);

impl EventSet {
    /// The empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn add(&mut self, event: EventName) {
        self.0 |= event.mask();
    }

    pub fn remove(&mut self, event: EventName) {
        self.0 &= !event.mask();
    }

    pub const fn contains(&self, event: EventName) -> bool {
        self.0 & event.mask() != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bitmask (bit `n` = event with discriminant `n`).
    pub const fn bits(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Events in ascending discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = EventName> + '_ {
        EventName::ALL.into_iter().filter(|e| self.contains(*e))
    }

    /// Supervisor identifiers, ascending discriminant order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(EventName::as_str)
    }
}

impl Extend<EventName> for EventSet {
    fn extend<I: IntoIterator<Item = EventName>>(&mut self, iter: I) {
        for event in iter {
            self.add(event);
        }
    }
}

impl FromIterator<EventName> for EventSet {
    fn from_iter<I: IntoIterator<Item = EventName>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<const N: usize> From<[EventName; N]> for EventSet {
    fn from(events: [EventName; N]) -> Self {
        events.into_iter().collect()
    }
}

impl fmt::Display for EventSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("}")
    }
}
