//! CarEvents library.
//!
//! Per-cycle vehicle safety-event classifier.  Exposes the pure-logic
//! modules to the control loop, the replay tool and the integration tests;
//! nothing in here performs I/O or blocks.

pub mod car_state;
pub mod config;
pub mod events;
pub mod hysteresis;
pub mod replay;
pub mod safety;

mod error;

pub use car_state::{ButtonEvent, ButtonType, CarControl, CarState, CruiseState, GearShifter};
pub use config::{Brand, NetworkLocation, VehicleConfig};
pub use error::{Error, Result};
pub use events::{EventName, EventSet};
pub use hysteresis::{ButtonWindow, HysteresisState};
pub use safety::{SafetyClassifier, classify};
