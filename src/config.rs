//! Static vehicle configuration
//!
//! Set once at startup from the vehicle fingerprint and never changed
//! afterwards.  The brand selects the rule bundle; the speed thresholds
//! parameterise the brand rules.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Timing and speed constants
// ---------------------------------------------------------------------------

/// Control loop period (seconds), 100 Hz.
pub const DT_CTRL: f32 = 0.01;

/// Cycles of no steering input after which a temporary steering fault is
/// reported audibly (1.5 s).
pub const STEER_UNPRESSED_ALERT_CYCLES: u32 = 150;

/// Maximum cruise set speed (km/h).
pub const V_CRUISE_MAX_KPH: f32 = 145.0;

/// Absolute maximum speed the system will control (m/s).
pub const MAX_CTRL_SPEED: f32 = (V_CRUISE_MAX_KPH + 4.0) / 3.6;

/// Below this |speed| (m/s) the vehicle is considered stopped.
pub const STANDSTILL_SPEED: f32 = 0.001;

// ---------------------------------------------------------------------------
// Brand
// ---------------------------------------------------------------------------

/// Vehicle manufacturer / platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Body,
    Chrysler,
    Ford,
    Gm,
    Honda,
    Hyundai,
    Mazda,
    #[default]
    Mock,
    Nissan,
    Psa,
    Rivian,
    Subaru,
    Tesla,
    Toyota,
    Volkswagen,
}

impl Brand {
    pub const ALL: [Self; 15] = [
        Self::Body,
        Self::Chrysler,
        Self::Ford,
        Self::Gm,
        Self::Honda,
        Self::Hyundai,
        Self::Mazda,
        Self::Mock,
        Self::Nissan,
        Self::Psa,
        Self::Rivian,
        Self::Subaru,
        Self::Tesla,
        Self::Toyota,
        Self::Volkswagen,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Chrysler => "chrysler",
            Self::Ford => "ford",
            Self::Gm => "gm",
            Self::Honda => "honda",
            Self::Hyundai => "hyundai",
            Self::Mazda => "mazda",
            Self::Mock => "mock",
            Self::Nissan => "nissan",
            Self::Psa => "psa",
            Self::Rivian => "rivian",
            Self::Subaru => "subaru",
            Self::Tesla => "tesla",
            Self::Toyota => "toyota",
            Self::Volkswagen => "volkswagen",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or(Error::UnknownBrand)
    }
}

/// Where the driver-assistance unit sits on the vehicle network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NetworkLocation {
    FwdCamera,
    #[default]
    Gateway,
}

// ---------------------------------------------------------------------------
// Vehicle configuration
// ---------------------------------------------------------------------------

/// Immutable per-vehicle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub brand: Brand,

    // --- Speed thresholds (m/s) ---
    /// Steering is cut off below this speed.
    pub min_steer_speed: f32,
    /// Engagement is refused below this speed.
    pub min_enable_speed: f32,

    // --- Ownership ---
    /// This system commands longitudinal control (gas/brake).
    pub openpilot_longitudinal_control: bool,
    /// Engagement follows the vehicle's own cruise module (PCM).
    pub pcm_cruise: bool,

    pub network_location: NetworkLocation,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            brand: Brand::Mock,
            min_steer_speed: 0.0,
            min_enable_speed: 0.0,
            openpilot_longitudinal_control: false,
            pcm_cruise: false,
            network_location: NetworkLocation::Gateway,
        }
    }
}

impl VehicleConfig {
    /// Default configuration for a brand.
    pub fn for_brand(brand: Brand) -> Self {
        Self {
            brand,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds the brand rules cannot interpret.
    pub fn validate(&self) -> Result<()> {
        if !self.min_steer_speed.is_finite() {
            return Err(Error::Config("min_steer_speed must be finite"));
        }
        if !self.min_enable_speed.is_finite() {
            return Err(Error::Config("min_enable_speed must be finite"));
        }
        if self.min_steer_speed < 0.0 {
            return Err(Error::Config("min_steer_speed must not be negative"));
        }
        // -1 is the "no minimum" sentinel used by some fingerprints.
        if self.min_enable_speed < -1.0 {
            return Err(Error::Config("min_enable_speed below -1"));
        }
        Ok(())
    }
}
