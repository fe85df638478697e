use serde::{Deserialize, Serialize};

/// One of the eight straight lines a word can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Left,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Unit vector as `(row, col)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Position `i` steps away from `(row, col)`, or `None` once it leaves a `size`x`size` grid.
    pub fn step(self, row: usize, col: usize, i: usize, size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let i = isize::try_from(i).ok()?;
        let r = row.checked_add_signed(dr * i)?;
        let c = col.checked_add_signed(dc * i)?;
        (r < size && c < size).then_some((r, c))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
            Direction::UpLeft => "up-left",
        }
    }
}
