//! Persistence snapshot of the board.
//!
//! The snapshot stores player ids rather than players. Restoring it against
//! a roster keeps every id the roster knows and drops the rest, so a stale
//! reference never prevents a saved game from loading.

use crate::board::{Board, BoardConfig, BoardError};
use crate::hex::GridCoord;
use crate::player::{Player, PlayerId};
use crate::space::{Space, SpaceBonus, SpaceId, SpaceType};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A space as stored in a saved game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedSpace {
    pub id: SpaceId,
    pub space_type: SpaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<Tile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerId>,
    #[serde(default)]
    pub bonus: Vec<SpaceBonus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency: Option<Vec<SpaceId>>,
    pub x: i32,
    pub y: i32,
}

/// The board section of a saved game
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerializedBoard {
    pub spaces: Vec<SerializedSpace>,
}

impl From<&Space> for SerializedSpace {
    fn from(space: &Space) -> Self {
        Self {
            id: space.id.clone(),
            space_type: space.space_type,
            tile: space.tile.clone(),
            player: space.player.clone(),
            bonus: space.bonus.clone(),
            adjacency: space.adjacency.clone(),
            x: space.coord.x,
            y: space.coord.y,
        }
    }
}

impl Board {
    pub fn serialize(&self) -> SerializedBoard {
        SerializedBoard {
            spaces: self.spaces().iter().map(SerializedSpace::from).collect(),
        }
    }

    /// Rebuild a live board from a snapshot and the game's roster
    pub fn from_serialized(
        serialized: &SerializedBoard,
        players: &[Player],
        config: BoardConfig,
    ) -> Result<Board, BoardError> {
        Board::new(deserialize_spaces(&serialized.spaces, players), config)
    }
}

/// Restore one space. A player id missing from `players` is dropped.
pub fn deserialize_space(serialized: &SerializedSpace, players: &[Player]) -> Space {
    let player = serialized.player.as_ref().and_then(|id| {
        let found = players.iter().find(|p| p.id == *id).map(|p| p.id.clone());
        if found.is_none() {
            debug!(space = %serialized.id, player = %id, "Dropping unknown player id");
        }
        found
    });

    Space {
        id: serialized.id.clone(),
        space_type: serialized.space_type,
        coord: GridCoord::new(serialized.x, serialized.y),
        tile: serialized.tile.clone(),
        player,
        bonus: serialized.bonus.clone(),
        adjacency: serialized.adjacency.clone(),
    }
}

pub fn deserialize_spaces(spaces: &[SerializedSpace], players: &[Player]) -> Vec<Space> {
    spaces
        .iter()
        .map(|space| deserialize_space(space, players))
        .collect()
}
