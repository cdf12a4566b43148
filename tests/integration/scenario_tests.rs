//! End-to-end multi-cycle scenarios.

use carevents::replay::Replay;
use carevents::{
    Brand, ButtonEvent, ButtonType, CarState, EventName, EventSet, HysteresisState, VehicleConfig,
    classify,
};

use crate::drive::{Drive, at_speed, cruise, nominal};

// ── Single-cycle examples ─────────────────────────────────────

#[test]
fn door_open_alone() {
    let mut drive = Drive::new(VehicleConfig::for_brand(Brand::Toyota));
    let cs = CarState {
        door_open: true,
        ..nominal()
    };
    assert_eq!(drive.step(cs), EventSet::from([EventName::DoorOpen]));
}

#[test]
fn pcm_rising_edge_alone() {
    let mut drive = Drive::starting_from(VehicleConfig::for_brand(Brand::Toyota), cruise(false));
    assert_eq!(drive.step(cruise(true)), EventSet::from([EventName::PcmEnable]));
}

#[test]
fn cancel_handled_regardless_of_longitudinal_owner() {
    for long_control in [false, true] {
        for pcm_cruise in [false, true] {
            let config = VehicleConfig {
                openpilot_longitudinal_control: long_control,
                pcm_cruise,
                ..VehicleConfig::for_brand(Brand::Ford)
            };
            let mut drive = Drive::new(config);
            let mut cs = nominal();
            cs.button_events.push(ButtonEvent::press(ButtonType::Cancel));
            assert!(
                drive.step(cs).contains(EventName::ButtonCancel),
                "long={long_control} pcm={pcm_cruise}"
            );
        }
    }
}

#[test]
fn permanent_steer_fault_alone() {
    let mut drive = Drive::new(VehicleConfig::for_brand(Brand::Subaru));
    let cs = CarState {
        steer_fault_permanent: true,
        ..nominal()
    };
    assert_eq!(drive.step(cs), EventSet::from([EventName::SteerUnavailable]));
}

// ── Multi-cycle ───────────────────────────────────────────────

#[test]
fn low_speed_alert_does_not_chatter() {
    let config = VehicleConfig {
        min_steer_speed: 3.8,
        ..VehicleConfig::for_brand(Brand::Chrysler)
    };
    let mut drive = Drive::new(config);

    // Decelerate into the band, wobble inside it, then pull away.
    let profile = [12.0, 8.0, 5.0, 4.4, 4.25, 4.5, 4.2, 4.7, 4.6, 4.75, 4.85, 6.0];
    let alerted: Vec<bool> = profile
        .iter()
        .map(|&v| drive.step(at_speed(v)).contains(EventName::BelowSteerSpeed))
        .collect();

    assert_eq!(
        alerted,
        [false, false, false, false, true, true, true, true, true, true, false, false]
    );
}

#[test]
fn steer_fault_audible_then_silenced_by_driver() {
    let mut drive = Drive::new(VehicleConfig::for_brand(Brand::Toyota));
    // Long stretch with hands off the wheel.
    drive.hold(&nominal(), 200);

    let fault = CarState {
        steer_fault_temporary: true,
        ..nominal()
    };
    assert!(drive.step(fault.clone()).contains(EventName::SteerTempUnavailable));
    assert!(drive.step(fault.clone()).contains(EventName::SteerTempUnavailable));

    // Driver grabs the wheel mid-fault: the fault was already present, so
    // it is reported, but silently.
    let grabbed = CarState {
        steering_pressed: true,
        ..fault.clone()
    };
    assert_eq!(
        drive.step(grabbed),
        EventSet::from([EventName::SteerOverride, EventName::SteerTempUnavailableSilent])
    );

    // Hands off again: stays silent for as long as the fault persists.
    let events = drive.hold(&fault, 500);
    assert_eq!(events, EventSet::from([EventName::SteerTempUnavailableSilent]));

    // Fault clears, then returns after a long hands-off stretch: loud again.
    drive.hold(&nominal(), 200);
    assert!(drive.step(fault).contains(EventName::SteerTempUnavailable));
}

#[test]
fn fault_present_at_startup_is_silent() {
    let fault = CarState {
        steer_fault_temporary: true,
        ..nominal()
    };
    let mut drive = Drive::starting_from(VehicleConfig::for_brand(Brand::Toyota), fault.clone());
    let events = drive.hold(&fault, 300);
    assert_eq!(events, EventSet::from([EventName::SteerTempUnavailableSilent]));
}

#[test]
fn classify_is_repeatable_from_same_state() {
    let config = VehicleConfig {
        pcm_cruise: true,
        min_steer_speed: 16.0,
        ..VehicleConfig::for_brand(Brand::Hyundai)
    };
    let mut state = HysteresisState::new();
    let prev = cruise(false);
    let mut cs = cruise(true);
    cs.v_ego = 17.0;
    cs.steer_fault_temporary = true;
    cs.button_events.push(ButtonEvent::press(ButtonType::MainCruise));

    let before = state.clone();
    let a = classify(&cs, &prev, &Default::default(), &config, &mut state);
    let after_a = state.clone();

    let mut replayed = before;
    let b = classify(&cs, &prev, &Default::default(), &config, &mut replayed);

    assert_eq!(a, b);
    assert_eq!(after_a, replayed);
}

#[test]
fn replay_matches_direct_drive() {
    let config = VehicleConfig {
        min_steer_speed: 3.8,
        ..VehicleConfig::for_brand(Brand::Chrysler)
    };
    let lines = [
        r#"{"car_state": {"gearShifter": "drive", "vEgo": 10.0, "cruiseState": {"available": true}}}"#,
        r#"{"car_state": {"gearShifter": "drive", "vEgo": 4.0, "cruiseState": {"available": true}}}"#,
        r#"{"car_state": {"gearShifter": "drive", "vEgo": 4.0, "doorOpen": true, "cruiseState": {"available": true}}}"#,
        r#"{"car_state": {"gearShifter": "park", "vEgo": 0.0, "cruiseState": {"available": true}}}"#,
    ];

    let mut replay = Replay::new(config);
    let got: Vec<EventSet> = lines
        .iter()
        .map(|l| replay.step_json(l).unwrap().unwrap())
        .collect();

    use EventName::*;
    assert_eq!(
        got,
        [
            EventSet::new(),
            EventSet::from([BelowSteerSpeed]),
            EventSet::from([BelowSteerSpeed, DoorOpen]),
            EventSet::from([BelowSteerSpeed, WrongGear]),
        ]
    );
}
