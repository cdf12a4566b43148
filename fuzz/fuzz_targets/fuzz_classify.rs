//! Fuzz target: multi-cycle classification
//!
//! Decodes the input into a vehicle configuration followed by a stream of
//! cycles, then drives the classifier and verifies:
//! - No panics under arbitrary signal combinations
//! - Re-running a cycle from a cloned state gives identical events and state
//! - Body and mock platforms never raise anything
//!
//! cargo fuzz run fuzz_classify

#![no_main]

use carevents::{
    Brand, ButtonEvent, ButtonType, CarControl, CarState, GearShifter, HysteresisState,
    NetworkLocation, VehicleConfig, classify,
};
use libfuzzer_sys::fuzz_target;

/// Bytes consumed per cycle: 4 flag bytes, gear, button, speed, brake, accel.
const CYCLE_BYTES: usize = 9;

fn pick<T: Copy, const N: usize>(all: [T; N], b: u8) -> T {
    all[b as usize % N]
}

fn decode_config(b: &[u8; 4]) -> VehicleConfig {
    VehicleConfig {
        brand: pick(Brand::ALL, b[0]),
        min_steer_speed: f32::from(b[1]) / 8.0,
        min_enable_speed: f32::from(b[2]) / 8.0 - 1.0,
        openpilot_longitudinal_control: b[3] & 1 != 0,
        pcm_cruise: b[3] & 2 != 0,
        network_location: if b[3] & 4 != 0 {
            NetworkLocation::FwdCamera
        } else {
            NetworkLocation::Gateway
        },
    }
}

fn decode_cycle(b: &[u8]) -> (CarState, CarControl) {
    let flags = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    let bit = |n: u32| flags & (1 << n) != 0;

    let mut cs = CarState {
        door_open: bit(0),
        seatbelt_unlatched: bit(1),
        gear_shifter: pick(GearShifter::ALL, b[4]),
        acc_faulted: bit(2),
        button_enable: bit(3),
        esp_disabled: bit(4),
        esp_active: bit(5),
        stock_fcw: bit(6),
        stock_aeb: bit(7),
        v_ego: f32::from(b[6]) / 4.0 - 2.0,
        standstill: bit(8),
        brake_pressed: bit(9),
        brake: f32::from(b[7]) / 4.0,
        gas_pressed: bit(10),
        brake_hold_active: bit(11),
        parking_brake: bit(12),
        steering_pressed: bit(13),
        steer_fault_temporary: bit(14),
        steer_fault_permanent: bit(15),
        low_speed_alert: bit(16),
        vehicle_sensors_invalid: bit(17),
        invalid_lkas_setting: bit(18),
        ..CarState::default()
    };
    cs.cruise_state.enabled = bit(19);
    cs.cruise_state.available = bit(20);
    cs.cruise_state.standstill = bit(21);
    cs.cruise_state.non_adaptive = bit(22);
    if bit(23) {
        let kind = pick(ButtonType::ALL, b[5]);
        let event = if bit(24) {
            ButtonEvent::press(kind)
        } else {
            ButtonEvent::release(kind)
        };
        cs.button_events.push(event);
    }

    let cc = CarControl {
        enabled: bit(25),
        accel: f32::from(b[8] as i8) / 32.0,
    };
    (cs, cc)
}

fuzz_target!(|data: &[u8]| {
    let Some((head, rest)) = data.split_first_chunk::<4>() else {
        return;
    };
    let config = decode_config(head);
    let unmonitored = matches!(config.brand, Brand::Body | Brand::Mock);

    let mut state = HysteresisState::new();
    let mut prev = CarState::default();
    for chunk in rest.chunks_exact(CYCLE_BYTES) {
        let (cs, cc) = decode_cycle(chunk);

        let mut shadow = state.clone();
        let events = classify(&cs, &prev, &cc, &config, &mut state);
        let again = classify(&cs, &prev, &cc, &config, &mut shadow);
        assert_eq!(events, again, "classification not repeatable");
        assert_eq!(state, shadow, "state diverged on repeat");

        if unmonitored {
            assert!(events.is_empty(), "{} raised {events}", config.brand);
        }
        prev = cs;
    }
});
