//! Per-player legal-space reports.

use regolith_core::{
    Board, BoardError, GameOptions, OceanFilter, PlacementContext, PlacementType, Player,
    PlayerId, ScanDirection, SpaceId, SpaceType,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Board-wide counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub spaces: usize,
    pub colonies: usize,
    pub empty: usize,
    pub max_x: i32,
    pub max_y: i32,
    pub ocean_count: usize,
    pub upgradeable_oceans: usize,
}

/// Spaces a player may use for one placement type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub placement: PlacementType,
    pub spaces: Vec<SpaceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player: PlayerId,
    pub name: String,
    pub owned: Vec<SpaceId>,
    pub placements: Vec<PlacementReport>,
    /// First placeable land space for this player, if any is left
    pub first_land_space: Option<SpaceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardReport {
    pub summary: BoardSummary,
    pub players: Vec<PlayerReport>,
}

impl BoardSummary {
    pub fn of(board: &Board) -> Self {
        let (max_x, max_y) = board.bounds();
        Self {
            spaces: board.spaces().len(),
            colonies: board.spaces_of_type(SpaceType::Colony).count(),
            empty: board.empty_spaces().count(),
            max_x,
            max_y,
            ocean_count: board.ocean_count(OceanFilter::default()),
            upgradeable_oceans: board
                .ocean_spaces(OceanFilter::default().with_upgraded_oceans(false))
                .len(),
        }
    }
}

impl PlayerReport {
    pub fn of(board: &Board, player: &Player, options: &GameOptions) -> Result<Self, BoardError> {
        let ctx = PlacementContext::for_player(player, options);
        let placements = PlacementType::ALL
            .iter()
            .map(|&placement| PlacementReport {
                placement,
                spaces: board
                    .available_spaces_for_type(&ctx, placement)
                    .into_iter()
                    .map(|s| s.id.clone())
                    .collect(),
            })
            .collect();

        let first_land_space =
            match board.nth_available_land_space(0, ScanDirection::Ascending, Some(&player.id), |_| true) {
                Ok(space) => Some(space.id.clone()),
                Err(BoardError::NoSpaceAvailable) => None,
                Err(e) => return Err(e),
            };

        debug!(player = %player.id, "Built placement report");
        Ok(Self {
            player: player.id.clone(),
            name: player.name.clone(),
            owned: board.spaces_owned_by(&player.id).map(|s| s.id.clone()).collect(),
            placements,
            first_land_space,
        })
    }

    pub fn spaces_for(&self, placement: PlacementType) -> &[SpaceId] {
        self.placements
            .iter()
            .find(|p| p.placement == placement)
            .map(|p| p.spaces.as_slice())
            .unwrap_or(&[])
    }
}

impl BoardReport {
    pub fn build(
        board: &Board,
        players: &[Player],
        options: &GameOptions,
    ) -> Result<Self, BoardError> {
        let summary = BoardSummary::of(board);
        info!(
            spaces = summary.spaces,
            oceans = summary.ocean_count,
            players = players.len(),
            "Building board report"
        );

        let players = players
            .iter()
            .map(|player| PlayerReport::of(board, player, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { summary, players })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regolith_core::{BoardBuilder, PlayerColor, SpaceBonus, Tile, TileType};

    fn roster() -> Vec<Player> {
        vec![
            Player::new("p-red", "Red", PlayerColor::Red),
            Player::new("p-blue", "Blue", PlayerColor::Blue),
        ]
    }

    fn board() -> Board {
        let mut board = BoardBuilder::new()
            .colony()
            .ocean([])
            .ocean([])
            .land([SpaceBonus::Plant])
            .build()
            .unwrap();
        board
            .place_tile(&"02".into(), Tile::new(TileType::Ocean), None)
            .unwrap();
        board
            .place_tile(&"30".into(), Tile::new(TileType::City), Some(PlayerId::new("p-red")))
            .unwrap();
        board
    }

    #[test]
    fn test_summary() {
        let summary = BoardSummary::of(&board());
        assert_eq!(
            summary,
            BoardSummary {
                spaces: 62,
                colonies: 1,
                empty: 60,
                max_x: 8,
                max_y: 8,
                ocean_count: 1,
                upgradeable_oceans: 1,
            }
        );
    }

    #[test]
    fn test_player_reports() {
        let board = board();
        let report = BoardReport::build(&board, &roster(), &GameOptions::default()).unwrap();
        assert_eq!(report.players.len(), 2);

        let red = &report.players[0];
        assert_eq!(red.owned, vec![SpaceId::new("30")]);
        assert_eq!(red.first_land_space, Some(SpaceId::new("04")));
        assert_eq!(red.spaces_for(PlacementType::Ocean), &[SpaceId::new("03")]);
        assert_eq!(red.spaces_for(PlacementType::UpgradeableOcean), &[SpaceId::new("02")]);

        // Red's greenery hugs the city; Blue owns nothing and may go anywhere
        let blue = &report.players[1];
        assert!(red.spaces_for(PlacementType::Greenery).len() < blue.spaces_for(PlacementType::Greenery).len());
        assert_eq!(
            blue.spaces_for(PlacementType::Greenery),
            blue.spaces_for(PlacementType::Land)
        );
        assert!(!blue
            .spaces_for(PlacementType::City)
            .contains(&SpaceId::new("31")));
    }

    #[test]
    fn test_full_board_has_no_first_land_space() {
        let mut board = BoardBuilder::new().build().unwrap();
        let ids: Vec<SpaceId> = board.spaces().iter().map(|s| s.id.clone()).collect();
        for id in &ids {
            board.place_tile(id, Tile::new(TileType::Greenery), None).unwrap();
        }
        let report = PlayerReport::of(&board, &roster()[0], &GameOptions::default()).unwrap();
        assert_eq!(report.first_land_space, None);
        assert!(report.spaces_for(PlacementType::Land).is_empty());
    }
}
