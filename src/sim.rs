use crate::board::Board;

/// Decide a cell's next state from its current state and live-neighbor
/// count.
///
/// This is the standard life rule: a cell is alive in the next generation
/// iff it has exactly 3 live neighbors, or it is currently alive with
/// exactly 2. Everything else dies or stays dead.
///
/// See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life#Rules
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// One uncommitted generation: the next alive flag for every cell, in
/// row-major order.
///
/// A `Pending` is produced by [`Simulation::compute_next`] against one
/// committed board and consumed whole by [`Simulation::commit`]. Holding
/// the next generation here keeps every evaluation reading the same board.
pub struct Pending {
    next: Vec<bool>,
}

impl Pending {
    pub fn states(&self) -> &[bool] {
        &self.next
    }
}

/// The simulation state: the committed board plus the generation counter.
pub struct Simulation {
    board: Board,
    ticks: u64,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self { board, ticks: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of committed generations so far, starting at 0.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Evaluate every cell against the current committed board.
    ///
    /// The result is a pure function of the board, so the evaluation order
    /// of the cells cannot matter: no cell is mutated until [`commit`].
    ///
    /// [`commit`]: Simulation::commit
    pub fn compute_next(&self) -> Pending {
        let size = self.board.size();
        let mut next = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let alive = self.board.is_alive(row, col);
                let neighbors = self.board.alive_neighbors(row, col);

                next.push(next_state(alive, neighbors));
            }
        }

        Pending { next }
    }

    /// Overwrite the board from the pending generation and count the tick.
    ///
    /// Unconditional: there is no partial commit.
    pub fn commit(&mut self, pending: Pending) {
        self.board.overwrite(&pending.next);
        self.ticks += 1;
    }

    /// Advance the board by exactly one generation.
    pub fn step(&mut self) {
        let pending = self.compute_next();
        self.commit(pending);
    }
}

#[cfg(test)]
mod test {
    use super::Simulation;
    use super::next_state;
    use crate::board::Board;

    #[test]
    fn rule_truth_table() {
        for neighbors in 0..=8 {
            // Three live neighbors means life, whatever the cell was.
            assert_eq!(next_state(true, neighbors), matches!(neighbors, 2 | 3));
            assert_eq!(next_state(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn ticks_start_at_zero_and_count_commits() {
        let mut sim = Simulation::new(Board::new(5));

        assert_eq!(sim.ticks(), 0);

        sim.step();
        sim.step();
        sim.step();

        assert_eq!(sim.ticks(), 3);
    }

    #[test]
    fn empty_board_stays_empty() {
        let mut sim = Simulation::new(Board::new(5));

        sim.step();

        assert!(sim.board().cells().all(|c| !c.is_alive()));
    }

    #[test]
    fn lone_cell_dies() {
        let mut board = Board::new(5);
        board.set_alive(2, 2);
        let mut sim = Simulation::new(board);

        sim.step();

        assert!(sim.board().cells().all(|c| !c.is_alive()));
    }

    #[test]
    fn blinker_flips_as_a_whole() {
        // An in-place update would eat the row cell by cell; the pending
        // buffer must turn the whole row into a column at once.
        let mut board = Board::new(5);
        board.set_alive(2, 1);
        board.set_alive(2, 2);
        board.set_alive(2, 3);
        let mut sim = Simulation::new(board);

        sim.step();

        for (i, cell) in sim.board().cells().enumerate() {
            let (row, col) = (i / 5, i % 5);
            assert_eq!(cell.is_alive(), col == 2 && (1..=3).contains(&row));
        }
    }

    #[test]
    fn compute_next_leaves_the_board_alone() {
        let mut board = Board::new(5);
        board.set_alive(2, 2);
        let sim = Simulation::new(board.clone());

        let pending = sim.compute_next();

        assert_eq!(*sim.board(), board);
        assert_eq!(pending.states().len(), 25);
        assert_eq!(sim.ticks(), 0);
    }
}
