//! Board representation: the space list, its adjacency, and lookups.
//!
//! This module contains:
//! - The board and its per-map configuration
//! - The adjacency index, derived once at construction
//! - Space lookups and tile/ownership queries
//! - Tile placement and reservation

use crate::hex::GridCoord;
use crate::player::PlayerId;
use crate::space::{Space, SpaceId, SpaceType};
use crate::tile::{OceanFilter, Tile, TileType};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Neighbour indices of one space, clockwise from the top left
type Neighbors = SmallVec<[usize; 6]>;

/// Errors raised by board construction, lookups and mutation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("Space {space} at ({x}, {y}) lies outside the board bounds (0..={max_x}, 0..={max_y})")]
    CoordinateOutOfBounds {
        space: SpaceId,
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("Can't find space with id {0}")]
    UnknownSpace(SpaceId),

    #[error("Space id {0} appears more than once")]
    DuplicateSpaceId(SpaceId),

    #[error("Space {space} lists unknown neighbour {neighbor}")]
    UnknownAdjacency { space: SpaceId, neighbor: SpaceId },

    #[error("Layout holds {capacity} grid spaces but {given} were defined")]
    LayoutOverflow { capacity: usize, given: usize },

    #[error("No spaces available")]
    NoSpaceAvailable,

    #[error("Space {0} already has a tile")]
    SpaceOccupied(SpaceId),

    #[error("Space {space} is reserved by {owner}")]
    SpaceReserved { space: SpaceId, owner: PlayerId },
}

/// Map-specific settings that are not part of any single space
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Spaces volcanic tiles are limited to. Empty means any land space.
    pub volcanic_space_ids: Vec<SpaceId>,
    pub noctis_city_space_id: Option<SpaceId>,
}

/// A hex board plus its off-map colony spaces.
///
/// The space list is fixed at construction. Only tiles and reservations
/// change afterwards, so adjacency is computed once and never again.
#[derive(Debug, Clone)]
pub struct Board {
    spaces: Vec<Space>,
    index: HashMap<SpaceId, usize>,
    adjacency: Vec<Neighbors>,
    max_x: i32,
    max_y: i32,
    config: BoardConfig,
}

impl Board {
    /// Build a board and derive its adjacency.
    ///
    /// Fails on duplicate ids, grid spaces with a negative coordinate, and
    /// adjacency overrides naming a space that does not exist.
    pub fn new(spaces: Vec<Space>, config: BoardConfig) -> Result<Self, BoardError> {
        let max_x = spaces.iter().map(|s| s.coord.x).max().unwrap_or(0);
        let max_y = spaces.iter().map(|s| s.coord.y).max().unwrap_or(0);

        let mut index = HashMap::with_capacity(spaces.len());
        for (idx, space) in spaces.iter().enumerate() {
            if index.insert(space.id.clone(), idx).is_some() {
                return Err(BoardError::DuplicateSpaceId(space.id.clone()));
            }
        }

        // First grid space wins when two share a coordinate
        let mut by_coord: HashMap<GridCoord, usize> = HashMap::new();
        for (idx, space) in spaces.iter().enumerate() {
            if space.space_type != SpaceType::Colony {
                by_coord.entry(space.coord).or_insert(idx);
            }
        }

        let mut board = Self {
            spaces,
            index,
            adjacency: Vec::new(),
            max_x,
            max_y,
            config,
        };

        let adjacency = (0..board.spaces.len())
            .map(|idx| board.compute_adjacent_spaces(idx, &by_coord))
            .collect::<Result<Vec<_>, _>>()?;
        board.adjacency = adjacency;

        debug!(
            spaces = board.spaces.len(),
            max_x = board.max_x,
            max_y = board.max_y,
            "Board constructed"
        );
        Ok(board)
    }

    fn compute_adjacent_spaces(
        &self,
        idx: usize,
        by_coord: &HashMap<GridCoord, usize>,
    ) -> Result<Neighbors, BoardError> {
        let space = &self.spaces[idx];

        if space.space_type != SpaceType::Colony && !space.coord.in_bounds(self.max_x, self.max_y) {
            return Err(BoardError::CoordinateOutOfBounds {
                space: space.id.clone(),
                x: space.coord.x,
                y: space.coord.y,
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }

        if let Some(overrides) = &space.adjacency {
            return overrides
                .iter()
                .map(|id| {
                    self.index.get(id).copied().ok_or_else(|| BoardError::UnknownAdjacency {
                        space: space.id.clone(),
                        neighbor: id.clone(),
                    })
                })
                .collect();
        }

        if space.space_type == SpaceType::Colony {
            return Ok(Neighbors::new());
        }

        let neighbors: Neighbors = space
            .coord
            .neighbors(self.max_y)
            .iter()
            .filter_map(|coord| by_coord.get(coord).copied())
            .filter(|&adj| adj != idx)
            .collect();
        trace!(space = %space.id, count = neighbors.len(), "Derived adjacency");
        Ok(neighbors)
    }

    // ==================== Query Methods ====================

    /// All spaces, in construction order
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Largest column and row index across all spaces
    pub fn bounds(&self) -> (i32, i32) {
        (self.max_x, self.max_y)
    }

    pub fn space(&self, id: &SpaceId) -> Result<&Space, BoardError> {
        self.index
            .get(id)
            .map(|&idx| &self.spaces[idx])
            .ok_or_else(|| BoardError::UnknownSpace(id.clone()))
    }

    pub fn volcanic_space_ids(&self) -> &[SpaceId] {
        &self.config.volcanic_space_ids
    }

    pub fn noctis_city_space_id(&self) -> Option<&SpaceId> {
        self.config.noctis_city_space_id.as_ref()
    }

    /// Adjacent spaces in clockwise order starting from the top left
    pub fn adjacent_spaces(&self, id: &SpaceId) -> Result<Vec<&Space>, BoardError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| BoardError::UnknownSpace(id.clone()))?;
        Ok(self.neighbors_of(idx).collect())
    }

    /// Neighbours of a space that is known to belong to this board.
    ///
    /// Spaces not owned by this board have no neighbours.
    pub(crate) fn neighbors(&self, space: &Space) -> impl Iterator<Item = &Space> + '_ {
        let idx = self.index.get(&space.id).copied();
        idx.into_iter().flat_map(move |idx| self.neighbors_of(idx))
    }

    fn neighbors_of(&self, idx: usize) -> impl Iterator<Item = &Space> + '_ {
        self.adjacency[idx].iter().map(move |&adj| &self.spaces[adj])
    }

    pub fn spaces_of_type(&self, space_type: SpaceType) -> impl Iterator<Item = &Space> + '_ {
        self.spaces.iter().filter(move |s| s.space_type == space_type)
    }

    pub fn empty_spaces(&self) -> impl Iterator<Item = &Space> + '_ {
        self.spaces.iter().filter(|s| s.is_empty())
    }

    /// The space holding the tile placed by `card`, if any
    pub fn space_by_tile_card(&self, card: &str) -> Option<&Space> {
        self.spaces
            .iter()
            .find(|s| s.tile.as_ref().and_then(|t| t.card.as_deref()) == Some(card))
    }

    /// Spaces holding an ocean-family tile that passes `filter`.
    ///
    /// The default filter returns the oceans that count toward the global
    /// parameter: upgraded oceans are included, Wetlands is not.
    pub fn ocean_spaces(&self, filter: OceanFilter) -> Vec<&Space> {
        self.spaces
            .iter()
            .filter(|s| s.tile.as_ref().is_some_and(|t| filter.includes(t.tile_type)))
            .collect()
    }

    pub fn ocean_count(&self, filter: OceanFilter) -> usize {
        self.ocean_spaces(filter).len()
    }

    /// Every neighbour of the space is empty
    pub fn next_to_no_other_tile(&self, id: &SpaceId) -> Result<bool, BoardError> {
        Ok(self.adjacent_spaces(id)?.iter().all(|adj| adj.is_empty()))
    }

    /// Spaces owned (or reserved) by `player`
    pub fn spaces_owned_by<'a>(
        &'a self,
        player: &'a PlayerId,
    ) -> impl Iterator<Item = &'a Space> + 'a {
        self.spaces.iter().filter(move |s| s.is_owned_by(player))
    }

    pub fn space_owned_by(&self, id: &SpaceId, player: &PlayerId) -> Result<bool, BoardError> {
        Ok(self.space(id)?.is_owned_by(player))
    }

    // ==================== Mutation Methods ====================

    fn space_mut(&mut self, id: &SpaceId) -> Result<&mut Space, BoardError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| BoardError::UnknownSpace(id.clone()))?;
        Ok(&mut self.spaces[idx])
    }

    /// Place a tile, optionally owned by `owner`.
    ///
    /// An occupied space only accepts a tile over an unprotected hazard, or an
    /// ocean upgrade over a plain ocean. A reserved space only accepts its
    /// reservation holder.
    pub fn place_tile(
        &mut self,
        id: &SpaceId,
        tile: Tile,
        owner: Option<PlayerId>,
    ) -> Result<(), BoardError> {
        let space = self.space_mut(id)?;

        if let Some(existing) = &space.tile {
            let covers_hazard = existing.is_coverable_hazard();
            let upgrades_ocean =
                existing.tile_type == TileType::Ocean && tile.tile_type.is_ocean_upgrade();
            if !covers_hazard && !upgrades_ocean {
                return Err(BoardError::SpaceOccupied(id.clone()));
            }
        }

        if let Some(holder) = &space.player {
            if owner.as_ref() != Some(holder) {
                return Err(BoardError::SpaceReserved {
                    space: id.clone(),
                    owner: holder.clone(),
                });
            }
        }

        debug!(space = %id, tile = ?tile.tile_type, owner = ?owner, "Placing tile");
        space.tile = Some(tile);
        if owner.is_some() {
            space.player = owner;
        }
        Ok(())
    }

    /// Reserve an empty space for `player` ahead of any tile
    pub fn reserve(&mut self, id: &SpaceId, player: PlayerId) -> Result<(), BoardError> {
        let space = self.space_mut(id)?;
        if space.tile.is_some() {
            return Err(BoardError::SpaceOccupied(id.clone()));
        }
        if let Some(holder) = &space.player {
            if *holder != player {
                return Err(BoardError::SpaceReserved {
                    space: id.clone(),
                    owner: holder.clone(),
                });
            }
        }
        space.player = Some(player);
        Ok(())
    }
}
