//! Regolith - board topology and tile placement rules for a hex-grid
//! terraforming game
//!
//! This crate provides:
//! - The offset-hex coordinate system and the adjacency derived from it
//! - Spaces, tiles and their static classification
//! - Placement legality for every placement category
//! - A persistence snapshot of the board that round-trips exactly
//!
//! Card effects, turn order and resources are owned by the surrounding game.
//! They reach this crate through [`PlacementContext`] and the tile/ownership
//! queries on [`Board`].
//!
//! # Modules
//!
//! - [`hex`]: Coordinate math and neighbour offsets
//! - [`tile`]: Tile kinds and classification tables
//! - [`space`]: Spaces, categories and bonuses
//! - [`player`]: Player identity, abilities and game options
//! - [`board`]: The board, its adjacency index and mutation
//! - [`placement`]: Legal-space queries per placement category
//! - [`serialize`]: Saved-game snapshot and restore
//! - [`builder`]: The standard nine-row layout

pub mod board;
pub mod builder;
pub mod hex;
pub mod placement;
pub mod player;
pub mod serialize;
pub mod space;
pub mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardConfig, BoardError};
pub use builder::BoardBuilder;
pub use hex::{GridCoord, HexDirection};
pub use placement::{PlacementType, ScanDirection};
pub use player::{Ability, GameOptions, PlacementContext, Player, PlayerColor, PlayerId};
pub use serialize::{deserialize_space, deserialize_spaces, SerializedBoard, SerializedSpace};
pub use space::{owned_by, Space, SpaceBonus, SpaceId, SpaceType};
pub use tile::{OceanFilter, Tile, TileType};
