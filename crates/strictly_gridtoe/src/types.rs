//! Core domain types for N×N tic-tac-toe.

use crate::error::DimensionError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Slot holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Side length of the board, always within 3..=9.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(u8);

impl Dimension {
    /// Smallest supported side length.
    pub const MIN: usize = 3;
    /// Largest supported side length.
    pub const MAX: usize = 9;
    /// The classic 3×3 board.
    pub const CLASSIC: Dimension = Dimension(3);

    /// Every selectable dimension, smallest first.
    pub const ALL: [Dimension; 7] = [
        Dimension(3),
        Dimension(4),
        Dimension(5),
        Dimension(6),
        Dimension(7),
        Dimension(8),
        Dimension(9),
    ];

    /// Validates a requested side length.
    #[track_caller]
    #[instrument]
    pub fn new(n: usize) -> Result<Self, DimensionError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(DimensionError::new(n))
        }
    }

    /// Side length N.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Number of cells on the board (N²).
    pub fn cell_count(self) -> usize {
        self.get() * self.get()
    }

    /// Number of winning lines (2N + 2).
    pub fn line_count(self) -> usize {
        2 * self.get() + 2
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for Dimension {
    type Error = DimensionError;

    #[track_caller]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Dimension> for usize {
    fn from(dimension: Dimension) -> Self {
        dimension.get()
    }
}

/// N×N board with cells in row-major order (`index = row * N + col`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    dimension: Dimension,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            cells: vec![Cell::Empty; dimension.cell_count()],
        }
    }

    /// Side length of this board.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Gets the cell at the given index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Marks an empty cell. Occupied or out-of-range cells are left alone.
    ///
    /// Returns whether the mark was written.
    pub(crate) fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell @ Cell::Empty) => {
                *cell = Cell::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Empties every cell. The only way a mark is ever removed.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Builds a board from explicit cells, for tests and replay tooling.
    ///
    /// Returns `None` if the cell count is not N².
    pub fn from_cells(dimension: Dimension, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == dimension.cell_count()).then_some(Self { dimension, cells })
    }
}
