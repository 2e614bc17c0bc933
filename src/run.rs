use std::io;
use std::thread;
use std::time::Duration;

use crossterm::cursor;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

use crate::frame::Frame;
use crate::sim::Simulation;

/// Delay between generations, in microseconds.
pub const DEFAULT_DELAY_MICROS: u64 = 300_000;

/// Pacing between generations.
///
/// The run loop calls [`Pacer::pause`] exactly once per generation. Tests
/// swap in a pacer that returns immediately.
pub trait Pacer {
    fn pause(&mut self);
}

/// Wall-clock pacer backed by [`thread::sleep`].
///
/// Resumes after at least the configured delay; no tighter guarantee.
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new(Duration::from_micros(DEFAULT_DELAY_MICROS))
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self) {
        thread::sleep(self.delay);
    }
}

/// Draw the committed board to `out` as one full-screen frame.
pub fn draw<W: io::Write>(sim: &Simulation, frame: &mut Frame, out: &mut W) -> io::Result<()> {
    let rendered = frame.render(sim);

    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in rendered.lines() {
        execute!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    Ok(())
}

/// Drive the simulation until the process is killed: render the committed
/// generation, advance by one, pause.
///
/// The only way out is a terminal write error.
pub fn run<W: io::Write>(
    sim: &mut Simulation,
    frame: &mut Frame,
    pacer: &mut dyn Pacer,
    out: &mut W,
) -> io::Result<()> {
    loop {
        draw(sim, frame, out)?;

        sim.step();
        pacer.pause();
    }
}
