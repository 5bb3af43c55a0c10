//! Placement legality: which spaces a tile may go on.
//!
//! Every query is a pure read over the board. Land eligibility is the base
//! set the city, greenery, isolated and volcanic rules narrow down.

use crate::board::{Board, BoardError};
use crate::player::{PlacementContext, PlayerId};
use crate::space::{Space, SpaceType};
use crate::tile::{OceanFilter, TileType};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Named legality rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementType {
    Land,
    Ocean,
    Greenery,
    City,
    Isolated,
    Volcanic,
    UpgradeableOcean,
}

impl PlacementType {
    pub const ALL: [PlacementType; 7] = [
        PlacementType::Land,
        PlacementType::Ocean,
        PlacementType::Greenery,
        PlacementType::City,
        PlacementType::Isolated,
        PlacementType::Volcanic,
        PlacementType::UpgradeableOcean,
    ];
}

/// Which end of the space list to count from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanDirection {
    /// From the top left
    Ascending,
    /// From the bottom right
    Descending,
}

impl Board {
    pub fn available_spaces_for_type(
        &self,
        ctx: &PlacementContext<'_>,
        placement: PlacementType,
    ) -> Vec<&Space> {
        match placement {
            PlacementType::Land => self.available_spaces_on_land(ctx.player),
            PlacementType::Ocean => self.available_spaces_for_ocean(ctx.player),
            PlacementType::Greenery => self.available_spaces_for_greenery(ctx),
            PlacementType::City => self.available_spaces_for_city(ctx),
            PlacementType::Isolated => self.available_isolated_spaces(ctx.player),
            PlacementType::Volcanic => self.available_volcanic_spaces(ctx.player),
            PlacementType::UpgradeableOcean => {
                self.ocean_spaces(OceanFilter::default().with_upgraded_oceans(false))
            }
        }
    }

    /// Land spaces `player` may place on.
    ///
    /// The space must not be restricted, must be unreserved or reserved by
    /// `player`, and must be empty or hold a hazard that is not protected.
    pub fn available_spaces_on_land(&self, player: &PlayerId) -> Vec<&Space> {
        self.spaces_of_type(SpaceType::Land)
            .filter(|space| {
                let playable = match &space.tile {
                    None => true,
                    Some(tile) => tile.is_coverable_hazard(),
                };
                !space.is_restricted() && space.is_open_to(Some(player)) && playable
            })
            .collect()
    }

    /// Empty ocean spaces that are unreserved or reserved by `player`
    pub fn available_spaces_for_ocean(&self, player: &PlayerId) -> Vec<&Space> {
        self.spaces_of_type(SpaceType::Ocean)
            .filter(|space| space.is_empty() && space.is_open_to(Some(player)))
            .collect()
    }

    /// Land spaces with no city next to them
    pub fn available_spaces_for_city(&self, ctx: &PlacementContext<'_>) -> Vec<&Space> {
        let spaces_on_land = self.available_spaces_on_land(ctx.player);
        if ctx.ignores_placement_restrictions {
            return spaces_on_land;
        }
        spaces_on_land
            .into_iter()
            .filter(|space| !self.neighbors(space).any(|adj| adj.is_city()))
            .collect()
    }

    /// Land spaces next to a tile the player owns, or any land space when
    /// there are none.
    ///
    /// With the Pathfinders expansion, spaces next to the Red City are never
    /// available.
    pub fn available_spaces_for_greenery(&self, ctx: &PlacementContext<'_>) -> Vec<&Space> {
        let mut spaces_on_land = self.available_spaces_on_land(ctx.player);
        if ctx.ignores_placement_restrictions {
            return spaces_on_land;
        }

        if ctx.pathfinders_expansion {
            spaces_on_land.retain(|space| {
                !self.neighbors(space).any(|adj| {
                    adj.tile
                        .as_ref()
                        .is_some_and(|t| t.tile_type == TileType::RedCity)
                })
            });
        }

        let next_to_owned: Vec<&Space> = spaces_on_land
            .iter()
            .copied()
            .filter(|space| {
                self.neighbors(space).any(|adj| {
                    adj.is_owned_by(ctx.player)
                        && adj
                            .tile
                            .as_ref()
                            .is_some_and(|t| t.tile_type != TileType::Ocean)
                })
            })
            .collect();

        if next_to_owned.is_empty() {
            spaces_on_land
        } else {
            next_to_owned
        }
    }

    /// Land spaces with no occupied neighbour
    pub fn available_isolated_spaces(&self, player: &PlayerId) -> Vec<&Space> {
        self.available_spaces_on_land(player)
            .into_iter()
            .filter(|space| self.neighbors(space).all(|adj| adj.is_empty()))
            .collect()
    }

    /// Land spaces limited to the map's volcanic spaces, when it has any
    pub fn available_volcanic_spaces(&self, player: &PlayerId) -> Vec<&Space> {
        let volcanic = self.volcanic_space_ids();
        let spaces = self.available_spaces_on_land(player);
        if volcanic.is_empty() {
            return spaces;
        }
        spaces
            .into_iter()
            .filter(|space| volcanic.contains(&space.id))
            .collect()
    }

    /// Land or cove spaces, empty or hazard-covered, that nobody has claimed.
    ///
    /// Unlike [`Board::available_spaces_on_land`] this applies to no player.
    pub fn non_reserved_land_spaces(&self) -> Vec<&Space> {
        self.spaces()
            .iter()
            .filter(|space| {
                matches!(space.space_type, SpaceType::Land | SpaceType::Cove)
                    && (space.is_empty() || space.has_hazard_tile())
                    && space.player.is_none()
            })
            .collect()
    }

    /// An empty, unrestricted land space
    pub fn can_place_tile(&self, space: &Space) -> bool {
        space.is_empty() && space.space_type == SpaceType::Land && !space.is_restricted()
    }

    /// Pick the `distance`-th placeable land space, counting from either end.
    ///
    /// Distance 0 is the first eligible space in `direction`. Out-of-range
    /// distances, including negative ones, wrap around the eligible list.
    /// `player` admits spaces that player has reserved; `predicate` narrows
    /// the eligible set further.
    pub fn nth_available_land_space<F>(
        &self,
        distance: i64,
        direction: ScanDirection,
        player: Option<&PlayerId>,
        predicate: F,
    ) -> Result<&Space, BoardError>
    where
        F: Fn(&Space) -> bool,
    {
        let spaces: Vec<&Space> = self
            .spaces()
            .iter()
            .filter(|space| self.can_place_tile(space) && space.is_open_to(player))
            .filter(|space| predicate(*space))
            .collect();

        if spaces.is_empty() {
            return Err(BoardError::NoSpaceAvailable);
        }

        let len = spaces.len() as i64;
        let offset = distance.rem_euclid(len);
        let idx = match direction {
            ScanDirection::Ascending => offset,
            ScanDirection::Descending => len - 1 - offset,
        };

        let space = spaces[idx as usize];
        trace!(distance, ?direction, candidates = len, space = %space.id, "Selected land space");
        Ok(space)
    }
}
