use std::io;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use anyhow::Context;
use clap::Arg;
use clap::Command;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lifeboard::board::BOARD_SIZE;
use lifeboard::board::Board;
use lifeboard::frame::Frame;
use lifeboard::preset::SeedMode;
use lifeboard::run;
use lifeboard::run::SleepPacer;
use lifeboard::sim::Simulation;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries nothing but frames.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conway's Game of Life on a bounded 15x15 board")
        .arg(Arg::new("mode").value_name("MODE").index(1).help(
            "Seeding mode: 1 glider, 2 blinker/oscillator, 3 LWSS, \
             4 glider+oscillator, 5 LWSS+oscillator, 6 glider+LWSS. \
             Anything else falls back to a random fill",
        ))
        .get_matches();

    let mode = match matches.get_one::<String>("mode") {
        None => SeedMode::Random,
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            warn!("{err}, falling back to a random fill");
            SeedMode::Random
        }),
    };

    let mut board = Board::new(BOARD_SIZE);
    mode.seed(&mut board, clock_seed());

    let mut sim = Simulation::new(board);
    let mut frame = Frame::new(BOARD_SIZE);
    let mut pacer = SleepPacer::new(Duration::from_micros(run::DEFAULT_DELAY_MICROS));

    run::run(&mut sim, &mut frame, &mut pacer, &mut io::stdout()).context("failed to draw frame")
}

/// Wall-clock seed for the random fill, in the spirit of `srand(time(NULL))`.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
