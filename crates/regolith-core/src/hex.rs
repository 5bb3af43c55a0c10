//! Offset-hex coordinate system for the game board.
//!
//! Board spaces carry a flat `(x, y)` pair. Rows are horizontal and the grid is
//! widest at its middle row, so the x-offset of a diagonal neighbour depends on
//! whether the row sits above, on, or below the middle:
//!
//! ```text
//!  row 0      . . . . .
//!  row 1     . . . . . .
//!  row 2    . . . . . . .        rows above the middle lean right
//!  row 3   . . . . . . . .
//!  row 4  . . . . . . . . .      middle row
//!  row 5   . . . . . . . .
//!  row 6    . . . . . . .        rows below the middle lean left
//! ```
//!
//! The mapping assumes an odd number of rows. With an even row count there is
//! no middle row and the derived relation is not symmetric.

use serde::{Deserialize, Serialize};

/// Direction of a neighbouring space, clockwise from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
}

impl HexDirection {
    /// All directions in clockwise order starting from the top left
    pub const ALL: [HexDirection; 6] = [
        HexDirection::TopLeft,
        HexDirection::TopRight,
        HexDirection::Right,
        HexDirection::BottomRight,
        HexDirection::BottomLeft,
        HexDirection::Left,
    ];

    /// The direction pointing back from the neighbour
    pub fn opposite(&self) -> HexDirection {
        match self {
            HexDirection::TopLeft => HexDirection::BottomRight,
            HexDirection::TopRight => HexDirection::BottomLeft,
            HexDirection::Right => HexDirection::Left,
            HexDirection::BottomRight => HexDirection::TopLeft,
            HexDirection::BottomLeft => HexDirection::TopRight,
            HexDirection::Left => HexDirection::Right,
        }
    }
}

/// Where a row sits relative to the middle row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBand {
    AboveMiddle,
    Middle,
    BelowMiddle,
}

impl RowBand {
    /// Classify row `y` on a grid whose last row index is `max_y`.
    ///
    /// Compares `2y` against `max_y` so an odd `max_y` never reports a middle row.
    pub fn of(y: i32, max_y: i32) -> Self {
        match (2 * y).cmp(&max_y) {
            std::cmp::Ordering::Less => RowBand::AboveMiddle,
            std::cmp::Ordering::Equal => RowBand::Middle,
            std::cmp::Ordering::Greater => RowBand::BelowMiddle,
        }
    }
}

/// Grid coordinate of a board space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GridCoord {
    /// Column within the row
    pub x: i32,
    /// Row, 0 at the top
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset applied to this coordinate to reach the neighbour in `direction`.
    pub fn offset(&self, direction: HexDirection, max_y: i32) -> (i32, i32) {
        let band = RowBand::of(self.y, max_y);
        match direction {
            HexDirection::Left => (-1, 0),
            HexDirection::Right => (1, 0),
            HexDirection::TopLeft => match band {
                RowBand::BelowMiddle => (-1, -1),
                _ => (0, -1),
            },
            HexDirection::TopRight => match band {
                RowBand::BelowMiddle => (0, -1),
                _ => (1, -1),
            },
            HexDirection::BottomLeft => match band {
                RowBand::AboveMiddle => (-1, 1),
                _ => (0, 1),
            },
            HexDirection::BottomRight => match band {
                RowBand::AboveMiddle => (0, 1),
                _ => (1, 1),
            },
        }
    }

    /// Coordinate of the neighbour in `direction`. It may not exist on the board.
    pub fn neighbor(&self, direction: HexDirection, max_y: i32) -> GridCoord {
        let (dx, dy) = self.offset(direction, max_y);
        GridCoord::new(self.x + dx, self.y + dy)
    }

    /// The six candidate neighbours in clockwise order starting from the top left
    pub fn neighbors(&self, max_y: i32) -> [GridCoord; 6] {
        HexDirection::ALL.map(|dir| self.neighbor(dir, max_y))
    }

    /// Whether this coordinate lies inside `[0, max_x] x [0, max_y]`
    pub fn in_bounds(&self, max_x: i32, max_y: i32) -> bool {
        (0..=max_x).contains(&self.x) && (0..=max_y).contains(&self.y)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
