//! Construction of the standard hex layout.
//!
//! The map is nine rows of 5, 6, 7, 8, 9, 8, 7, 6 and 5 spaces. Rows above
//! the middle start further right, so row `y` begins at column `|4 - y|`.
//! Colony spaces come first and take the lowest ids.

use crate::board::{Board, BoardConfig, BoardError};
use crate::space::{Space, SpaceBonus, SpaceId, SpaceType};

/// Spaces per row, top to bottom
pub const ROW_WIDTHS: [i32; 9] = [5, 6, 7, 8, 9, 8, 7, 6, 5];

/// Number of grid spaces in the standard layout
pub const GRID_SPACES: usize = 61;

const MIDDLE_ROW: i32 = 4;

struct PendingSpace {
    space_type: SpaceType,
    bonus: Vec<SpaceBonus>,
}

/// Lays out a map space by space, in reading order from the top left.
///
/// ```
/// use regolith_core::{BoardBuilder, SpaceBonus};
///
/// let board = BoardBuilder::new()
///     .colony()
///     .land([SpaceBonus::Steel, SpaceBonus::Steel])
///     .ocean([SpaceBonus::DrawCard])
///     .volcanic()
///     .build()
///     .unwrap();
/// assert_eq!(board.spaces().len(), 62);
/// assert_eq!(board.volcanic_space_ids()[0].as_str(), "03");
/// ```
#[derive(Default)]
pub struct BoardBuilder {
    colonies: usize,
    grid: Vec<PendingSpace>,
    volcanic: Vec<usize>,
    noctis_city: Option<usize>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an off-map colony space
    pub fn colony(mut self) -> Self {
        self.colonies += 1;
        self
    }

    pub fn land(self, bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        self.push(SpaceType::Land, bonus)
    }

    pub fn ocean(self, bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        self.push(SpaceType::Ocean, bonus)
    }

    pub fn cove(self, bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        self.push(SpaceType::Cove, bonus)
    }

    /// A land space no tile may be placed on
    pub fn restricted(self) -> Self {
        self.push(SpaceType::Land, [SpaceBonus::Restricted])
    }

    /// Mark the last grid space as volcanic
    pub fn volcanic(mut self) -> Self {
        if let Some(last) = self.grid.len().checked_sub(1) {
            self.volcanic.push(last);
        }
        self
    }

    /// Mark the last grid space as the Noctis City space
    pub fn noctis_city(mut self) -> Self {
        self.noctis_city = self.grid.len().checked_sub(1);
        self
    }

    fn push(mut self, space_type: SpaceType, bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        self.grid.push(PendingSpace {
            space_type,
            bonus: bonus.into_iter().collect(),
        });
        self
    }

    fn grid_id(&self, grid_index: usize) -> SpaceId {
        space_id(self.colonies + grid_index + 1)
    }

    /// Lay out the spaces and build the board.
    ///
    /// Grid positions left undefined become plain land.
    pub fn build(self) -> Result<Board, BoardError> {
        if self.grid.len() > GRID_SPACES {
            return Err(BoardError::LayoutOverflow {
                capacity: GRID_SPACES,
                given: self.grid.len(),
            });
        }

        let mut spaces: Vec<Space> = (1..=self.colonies).map(|n| Space::colony(space_id(n))).collect();

        let mut pending = self.grid.iter();
        let mut grid_index = 0;
        for (y, width) in ROW_WIDTHS.iter().enumerate() {
            let y = y as i32;
            let offset = (MIDDLE_ROW - y).abs();
            for i in 0..*width {
                let space = match pending.next() {
                    Some(p) => Space::new(self.grid_id(grid_index), p.space_type, offset + i, y)
                        .with_bonus(p.bonus.iter().copied()),
                    None => Space::new(self.grid_id(grid_index), SpaceType::Land, offset + i, y),
                };
                spaces.push(space);
                grid_index += 1;
            }
        }

        let config = BoardConfig {
            volcanic_space_ids: self.volcanic.iter().map(|&i| self.grid_id(i)).collect(),
            noctis_city_space_id: self.noctis_city.map(|i| self.grid_id(i)),
        };
        Board::new(spaces, config)
    }
}

fn space_id(n: usize) -> SpaceId {
    SpaceId::new(format!("{:02}", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_widths_total() {
        assert_eq!(ROW_WIDTHS.iter().sum::<i32>() as usize, GRID_SPACES);
    }

    #[test]
    fn test_empty_builder_fills_with_land() {
        let board = BoardBuilder::new().build().unwrap();
        assert_eq!(board.spaces().len(), GRID_SPACES);
        assert!(board.spaces().iter().all(|s| s.space_type == SpaceType::Land));
        assert_eq!(board.bounds(), (8, 8));
    }

    #[test]
    fn test_colonies_take_first_ids() {
        let board = BoardBuilder::new().colony().colony().ocean([]).build().unwrap();
        assert_eq!(board.space(&"01".into()).unwrap().space_type, SpaceType::Colony);
        assert_eq!(board.space(&"02".into()).unwrap().space_type, SpaceType::Colony);

        let first = board.space(&"03".into()).unwrap();
        assert_eq!(first.space_type, SpaceType::Ocean);
        assert_eq!((first.coord.x, first.coord.y), (4, 0));
        assert_eq!(board.spaces().last().unwrap().id.as_str(), "63");
    }

    #[test]
    fn test_middle_row_is_widest() {
        let board = BoardBuilder::new().build().unwrap();
        let middle: Vec<_> = board.spaces().iter().filter(|s| s.coord.y == 4).collect();
        assert_eq!(middle.len(), 9);
        assert_eq!(middle[0].coord.x, 0);
        assert_eq!(middle[8].coord.x, 8);
    }

    #[test]
    fn test_interior_space_has_six_neighbors() {
        let board = BoardBuilder::new().build().unwrap();
        let (max_x, max_y) = board.bounds();
        let mut interior = 0;
        for space in board.spaces() {
            let count = board.adjacent_spaces(&space.id).unwrap().len();
            assert!((3..=6).contains(&count), "{} has {} neighbours", space.id, count);
            if count == 6 {
                interior += 1;
            }
        }
        // 61 spaces minus the 24 on the rim
        assert_eq!(interior, 37);
        assert_eq!((max_x, max_y), (8, 8));
    }

    #[test]
    fn test_volcanic_and_noctis_markers() {
        let board = BoardBuilder::new()
            .land([])
            .land([])
            .volcanic()
            .land([])
            .noctis_city()
            .build()
            .unwrap();
        let volcanic: Vec<_> = board.volcanic_space_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(volcanic, ["02"]);
        assert_eq!(board.noctis_city_space_id().map(|id| id.as_str()), Some("03"));
    }

    #[test]
    fn test_too_many_spaces() {
        let mut builder = BoardBuilder::new();
        for _ in 0..=GRID_SPACES {
            builder = builder.land([]);
        }
        assert_eq!(
            builder.build().unwrap_err(),
            BoardError::LayoutOverflow {
                capacity: GRID_SPACES,
                given: GRID_SPACES + 1
            }
        );
    }

    #[test]
    fn test_restricted_space() {
        let board = BoardBuilder::new().restricted().build().unwrap();
        assert!(board.space(&"01".into()).unwrap().is_restricted());
    }
}
