use crate::{Direction, Grid};
use serde::{Deserialize, Serialize};

/// Where a word ended up in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn length(&self) -> usize {
        self.word.chars().count()
    }

    /// Cells covered by the word, stopping early if it would run off the coordinate space.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        (0..self.length())
            .map_while(|i| self.direction.step(self.row, self.col, i, usize::MAX))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    Placed(Placement),
    /// Holds a character the filler alphabet does not contain, never attempted.
    InvalidChars,
    /// Longer than the grid side, never attempted.
    TooLong,
    /// Retry budget exhausted without finding a compatible slot.
    NoSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub outcome: PlacementOutcome,
    /// Attempts spent on this word, including the successful one.
    pub attempts: usize,
}

impl WordReport {
    pub fn is_placed(&self) -> bool {
        matches!(self.outcome, PlacementOutcome::Placed(_))
    }
}

/// A finished puzzle: the filled grid and what happened to every input word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearch {
    pub grid: Grid,
    pub report: Vec<WordReport>,
}

impl WordSearch {
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.report.iter().filter_map(|entry| match &entry.outcome {
            PlacementOutcome::Placed(placement) => Some(placement),
            _ => None,
        })
    }

    /// Placed words in the order they were committed to the grid.
    pub fn placed_words(&self) -> Vec<&str> {
        self.placements().map(|p| p.word.as_str()).collect()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &WordReport> {
        self.report.iter().filter(|entry| !entry.is_placed())
    }
}
