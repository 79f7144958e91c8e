use crate::config::ALIVE_PROBABILITY;
use crate::grid::CellState::{Alive, Dead};
use rand::Rng;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Bounded Game of Life grid. Edges do not wrap.
///
/// The shape is fixed when the grid is built; every operation that produces
/// a new state produces a grid of the same shape.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
    cols: usize,
}

impl Grid {
    /// All-dead grid of `rows` x `cols`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive, got {rows}x{cols}");
        Grid {
            cells: vec![vec![Dead; cols]; rows],
            cols,
        }
    }

    /// Grid where every cell is independently alive with [`ALIVE_PROBABILITY`].
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut grid = Grid::new(rows, cols);
        grid.randomize(rng);
        grid
    }

    /// Builds a grid from rows of cells, mostly useful for placing patterns.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, the first row is empty, or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(cols > 0, "grid dimensions must be positive");
        assert!(rows.iter().all(|row| row.len() == cols), "grid rows must all have {cols} cells");
        Grid { cells: rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(CellState::is_alive)
    }

    /// Sets a single cell. Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = state;
        }
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    /// Re-seeds every cell from `rng`, keeping the shape.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut new_grid = Grid::new(self.rows(), self.cols);

        for row in &mut new_grid.cells {
            for cell in row.iter_mut() {
                *cell = rng.random_bool(ALIVE_PROBABILITY).into();
            }
        }
        self.cells = new_grid.cells;
    }

    /// Kills every cell, keeping the shape.
    pub fn clear(&mut self) {
        self.cells = Grid::new(self.rows(), self.cols).cells;
    }

    /// Count the number of alive neighbors for a cell.
    ///
    /// Positions outside the grid are skipped, so corners see at most 3
    /// candidates and edges at most 5.
    pub fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    // Skip the current cell
                    continue;
                }

                let (Some(neighbor_row), Some(neighbor_col)) =
                    (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };

                if self.is_alive(neighbor_row, neighbor_col) {
                    count += 1;
                }
            }
        }

        count
    }

    /// The next generation under Conway's rule (B3/S23).
    ///
    /// Reads only from `self` and writes only into the returned grid.
    pub fn next_generation(&self) -> Grid {
        let mut next_grid = vec![vec![Dead; self.cols]; self.rows()];

        for (row, next_row) in next_grid.iter_mut().enumerate() {
            for (col, next_cell) in next_row.iter_mut().enumerate() {
                let alive_neighbors = self.count_neighbors(row, col);

                *next_cell = match (self.cells[row][col], alive_neighbors) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
            }
        }

        Grid {
            cells: next_grid,
            cols: self.cols,
        }
    }

    /// Advance the grid by one step, returns whether any cell changed
    pub fn advance(&mut self) -> bool {
        let next_grid = self.next_generation();

        if *self == next_grid {
            return false;
        }
        *self = next_grid;
        true
    }
}
