//! CarEvents replay tool: host entry point
//!
//! Replays a recorded drive through the safety classifier and prints the
//! events raised on every cycle, one JSON array per line.
//!
//! ```text
//! carevents <vehicle.json> <cycles.jsonl | ->
//! ```

use std::fs;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result, bail};
use log::info;
use tracing_subscriber::EnvFilter;

use carevents::config::VehicleConfig;
use carevents::replay::Replay;

/// Environment variable holding the log filter (`info` when unset).
const LOG_ENV: &str = "CAREVENTS_LOG";

fn main() -> Result<()> {
    // Library records arrive through the `log` bridge; stdout carries events.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(config_path), Some(cycles_path)) = (args.next(), args.next()) else {
        bail!("usage: carevents <vehicle.json> <cycles.jsonl | ->");
    };

    // ── 1. Vehicle configuration ──────────────────────────────
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("reading config {config_path}"))?;
    let config = VehicleConfig::from_json(&text)
        .with_context(|| format!("loading config {config_path}"))?;
    info!("CarEvents v{}: replaying {}", env!("CARGO_PKG_VERSION"), cycles_path);

    // ── 2. Cycle source ───────────────────────────────────────
    let input: Box<dyn BufRead> = if cycles_path == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = fs::File::open(&cycles_path)
            .with_context(|| format!("opening cycles {cycles_path}"))?;
        Box::new(io::BufReader::new(file))
    };

    // ── 3. Replay ─────────────────────────────────────────────
    let mut replay = Replay::new(config);
    let mut out = BufWriter::new(io::stdout().lock());
    for (lineno, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", lineno + 1))?;
        let Some(events) = replay
            .step_json(&line)
            .with_context(|| format!("cycle on line {}", lineno + 1))?
        else {
            continue;
        };
        let names: Vec<&str> = events.names().collect();
        writeln!(out, "{}", serde_json::to_string(&names)?)?;
    }
    out.flush()?;

    info!("replayed {} cycles", replay.cycles());
    Ok(())
}
