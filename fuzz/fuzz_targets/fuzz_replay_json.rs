//! Fuzz target: JSON-lines replay input
//!
//! Feeds arbitrary text to the replay reader line by line and verifies:
//! - No panics on malformed or hostile JSON
//! - Rejected lines do not advance the cycle counter
//! - Blank lines are skipped without classifying
//!
//! cargo fuzz run fuzz_replay_json

#![no_main]

use carevents::VehicleConfig;
use carevents::replay::Replay;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let mut replay = Replay::new(VehicleConfig::default());
    for line in text.lines() {
        let before = replay.cycles();
        match replay.step_json(line) {
            Ok(Some(_)) => assert_eq!(replay.cycles(), before + 1),
            Ok(None) | Err(_) => assert_eq!(replay.cycles(), before),
        }
    }

    // Config parsing must reject, not panic.
    let _ = VehicleConfig::from_json(text);
});
