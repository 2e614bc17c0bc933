use std::fmt::Write;

use crate::sim::Simulation;

/// Glyph printed for a live cell.
const ALIVE: char = '0';

/// Glyph printed for a dead cell.
const DEAD: char = '.';

/// Text renderer for the committed board.
///
/// Owns a reusable string framebuffer, so rendering does not allocate once
/// the buffer has reached its steady size.
pub struct Frame {
    fb: String,
}

impl Frame {
    pub fn new(size: usize) -> Self {
        // Every cell prints as a glyph plus a space, every row ends in a
        // newline, and the footer is a blank line plus the tick counter.
        let fb = String::with_capacity(size * (2 * size + 1) + 24);

        Self { fb }
    }

    /// Render one frame: one line per row, two characters per cell, then a
    /// blank line and the tick count.
    pub fn render(&mut self, sim: &Simulation) -> &str {
        self.fb.clear();

        for row in sim.board().rows() {
            for cell in row {
                self.fb.push(if cell.is_alive() { ALIVE } else { DEAD });
                self.fb.push(' ');
            }

            self.fb.push('\n');
        }

        let _ = write!(self.fb, "\nTicks = {}\n\n", sim.ticks());

        &self.fb
    }
}

#[cfg(test)]
mod test {
    use super::Frame;
    use crate::board::Board;
    use crate::sim::Simulation;

    #[test]
    fn frame_layout() {
        let mut board = Board::new(3);
        board.set_alive(0, 0);
        board.set_alive(1, 1);
        board.set_alive(2, 2);
        let sim = Simulation::new(board);

        let mut frame = Frame::new(3);

        assert_eq!(
            frame.render(&sim),
            "0 . . \n. 0 . \n. . 0 \n\nTicks = 0\n\n"
        );
    }

    #[test]
    fn frame_tracks_ticks() {
        let mut sim = Simulation::new(Board::new(2));
        let mut frame = Frame::new(2);

        sim.step();
        sim.step();

        assert!(frame.render(&sim).ends_with("Ticks = 2\n\n"));
    }

    #[test]
    fn buffer_is_reused() {
        let sim = Simulation::new(Board::new(4));
        let mut frame = Frame::new(4);

        let first = frame.render(&sim).len();
        let second = frame.render(&sim).len();

        assert_eq!(first, second);
    }
}
