//! Board spaces: grid cells and off-map colony spaces.

use crate::hex::GridCoord;
use crate::player::PlayerId;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Space identifier, unique within a board (e.g. `"03"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(String);

impl SpaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of a space, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    Land,
    Ocean,
    /// Off-map space with no neighbours
    Colony,
    LunarMine,
    /// Accepts either land or ocean placements
    Cove,
    Restricted,
}

/// Static bonus or restriction printed on a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceBonus {
    Titanium,
    Steel,
    Plant,
    DrawCard,
    Heat,
    Ocean,
    Microbe,
    Animal,
    Power,
    EnergyProduction,
    Temperature,
    /// No tile may be placed here
    Restricted,
    Asteroid,
    Delegate,
    Colony,
    Science,
}

/// One cell of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub space_type: SpaceType,
    /// Unused for colony spaces
    pub coord: GridCoord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile: Option<Tile>,
    /// Tile owner, or the player holding a reservation before any tile exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerId>,
    #[serde(default)]
    pub bonus: Vec<SpaceBonus>,
    /// Explicit neighbour ids, replacing the geometric derivation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency: Option<Vec<SpaceId>>,
}

impl Space {
    pub fn new(id: impl Into<SpaceId>, space_type: SpaceType, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            space_type,
            coord: GridCoord::new(x, y),
            tile: None,
            player: None,
            bonus: Vec::new(),
            adjacency: None,
        }
    }

    /// A colony space. Colonies sit outside the grid at `(-1, -1)`.
    pub fn colony(id: impl Into<SpaceId>) -> Self {
        Self::new(id, SpaceType::Colony, -1, -1)
    }

    pub fn with_bonus(mut self, bonus: impl IntoIterator<Item = SpaceBonus>) -> Self {
        self.bonus.extend(bonus);
        self
    }

    pub fn with_adjacency(mut self, neighbors: impl IntoIterator<Item = SpaceId>) -> Self {
        self.adjacency = Some(neighbors.into_iter().collect());
        self
    }

    pub fn has_bonus(&self, bonus: SpaceBonus) -> bool {
        self.bonus.contains(&bonus)
    }

    pub fn is_restricted(&self) -> bool {
        self.has_bonus(SpaceBonus::Restricted)
    }

    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Unreserved, or reserved by `player`
    pub fn is_open_to(&self, player: Option<&PlayerId>) -> bool {
        self.player.is_none() || self.player.as_ref() == player
    }

    pub fn has_hazard_tile(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_hazard())
    }

    pub fn is_city(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_city())
    }

    /// Holds an ocean or any ocean-derived tile (ocean city, wetlands, ...)
    pub fn is_ocean(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_ocean())
    }

    /// Holds an ocean tile that did not cover another ocean
    pub fn is_uncovered_ocean(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_uncovered_ocean())
    }

    pub fn is_greenery(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_greenery())
    }

    pub fn is_special_tile(&self) -> bool {
        self.tile.as_ref().is_some_and(|t| t.tile_type.is_special())
    }

    pub fn is_owned_by(&self, player: &PlayerId) -> bool {
        self.player.as_ref() == Some(player)
    }
}

/// Predicate matching spaces owned by `player`
pub fn owned_by(player: &PlayerId) -> impl Fn(&Space) -> bool + '_ {
    move |space| space.is_owned_by(player)
}
