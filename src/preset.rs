use std::str::FromStr;

use thiserror::Error;

use crate::Position;
use crate::board::Board;

/// Diagonal glider in the top-left corner.
///
/// See: https://conwaylife.com/wiki/Glider
const GLIDER: &[Position] = &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)];

/// Two vertical bars bracketing a pair of lone cells, mid-board.
#[rustfmt::skip]
const OSCILLATOR: &[Position] = &[
    (5, 5), (6, 5), (7, 5), (8, 5), (9, 5),
    (5, 7), (9, 7),
    (5, 9), (6, 9), (7, 9), (8, 9), (9, 9),
];

/// Lightweight spaceship against the right edge.
///
/// See: https://conwaylife.com/wiki/Lightweight_spaceship
#[rustfmt::skip]
const LWSS: &[Position] = &[
    (1, 11), (2, 10), (3, 10), (4, 10), (4, 11),
    (4, 12), (4, 13), (1, 14), (3, 14),
];

/// Named start patterns.
///
/// Coordinates are fixed `(row, col)` tables on the default 15x15 board and
/// are not meaningful at other sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Glider,
    Oscillator,
    Lwss,
}

impl Preset {
    pub fn cells(self) -> &'static [Position] {
        match self {
            Preset::Glider => GLIDER,
            Preset::Oscillator => OSCILLATOR,
            Preset::Lwss => LWSS,
        }
    }

    /// Seed the preset onto the board.
    ///
    /// Only sets cells alive, so presets compose without clearing the board
    /// in between.
    pub fn apply(self, board: &mut Board) {
        for &(row, col) in self.cells() {
            board.set_alive(row, col);
        }
    }
}

/// How the board gets seeded at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// Independent ~50/50 random fill.
    Random,
    /// The listed presets, applied in order.
    Presets(&'static [Preset]),
}

impl SeedMode {
    pub fn seed(self, board: &mut Board, seed: u64) {
        match self {
            SeedMode::Random => board.randomize(seed),
            SeedMode::Presets(presets) => {
                for preset in presets {
                    preset.apply(board);
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedModeError {
    #[error("seed mode {0:?} is not an integer")]
    NotAnInteger(String),

    #[error("seed mode {0} does not name a preset")]
    UnknownMode(i64),
}

impl FromStr for SeedMode {
    type Err = SeedModeError;

    /// Parse a seed-mode argument: modes 1 through 3 are single presets,
    /// 4 through 6 are pairs.
    ///
    /// Anything else is an error; whether to fall back to a random fill is
    /// the caller's policy, not the parser's.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode: i64 = s
            .trim()
            .parse()
            .map_err(|_| SeedModeError::NotAnInteger(s.to_string()))?;

        let presets: &[Preset] = match mode {
            1 => &[Preset::Glider],
            2 => &[Preset::Oscillator],
            3 => &[Preset::Lwss],
            4 => &[Preset::Glider, Preset::Oscillator],
            5 => &[Preset::Lwss, Preset::Oscillator],
            6 => &[Preset::Glider, Preset::Lwss],
            _ => return Err(SeedModeError::UnknownMode(mode)),
        };

        Ok(SeedMode::Presets(presets))
    }
}
