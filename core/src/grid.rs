use crate::Direction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(*c),
            Cell::Empty => None,
        }
    }

    /// Whether `c` may be written here: the cell is free or already holds `c`.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Letter(existing) => *existing == c,
        }
    }

    pub fn get_display_char(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Letter(c) => *c,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Position ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Square letter matrix, indexed as `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
        }
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let size = self.size;
        let slot = self
            .get_cell_mut(row, col)
            .ok_or(GridError::OutOfBounds { row, col, size })?;
        *slot = cell;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Letters met walking `len` cells from `(row, col)` along `direction`.
    ///
    /// Returns `None` if the walk leaves the grid or crosses an empty cell.
    pub fn read_along(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    ) -> Option<String> {
        (0..len)
            .map(|i| {
                let (r, c) = direction.step(row, col, i, self.size)?;
                self.get_cell(r, c)?.letter()
            })
            .collect()
    }
}
