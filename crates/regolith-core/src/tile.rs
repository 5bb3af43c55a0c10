//! Tile kinds and their static classification.
//!
//! The classification tables are plain static slices: membership never changes
//! at runtime and every lookup is by value.

use serde::{Deserialize, Serialize};

/// Every kind of tile that can sit on a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    Greenery,
    Ocean,
    City,
    Capital,
    CommercialDistrict,
    EcologicalZone,
    IndustrialCenter,
    LavaFlows,
    MiningArea,
    MiningRights,
    MoholeArea,
    NaturalPreserve,
    NuclearZone,
    RestrictedArea,
    DeimosDown,
    GreatDam,
    MagneticFieldGenerators,
    BiofertilizerFacility,
    MetallicAsteroid,
    SolarFarm,
    OceanCity,
    OceanFarm,
    OceanSanctuary,
    DustStormMild,
    DustStormSevere,
    ErosionMild,
    ErosionSevere,
    MiningStripMine,
    Wetlands,
    RedCity,
    MartianNatureWonders,
    Crashlanding,
    MarsNomads,
    MoonHabitat,
    MoonMine,
    MoonRoad,
    LunaTradeStation,
}

/// Tiles that count as a city for adjacency and scoring
pub const CITY_TILES: &[TileType] = &[
    TileType::City,
    TileType::Capital,
    TileType::OceanCity,
    TileType::RedCity,
];

/// Tiles placed on top of an existing ocean
pub const OCEAN_UPGRADE_TILES: &[TileType] = &[
    TileType::OceanCity,
    TileType::OceanFarm,
    TileType::OceanSanctuary,
];

/// The ocean tile and everything derived from it
pub const OCEAN_TILES: &[TileType] = &[
    TileType::Ocean,
    TileType::OceanCity,
    TileType::OceanFarm,
    TileType::OceanSanctuary,
    TileType::Wetlands,
];

/// Ocean kinds that do not cover another ocean
pub const UNCOVERED_OCEAN_TILES: &[TileType] = &[TileType::Ocean, TileType::Wetlands];

pub const GREENERY_TILES: &[TileType] = &[TileType::Greenery, TileType::Wetlands];

/// Hazards can be covered by later placements unless protected
pub const HAZARD_TILES: &[TileType] = &[
    TileType::DustStormMild,
    TileType::DustStormSevere,
    TileType::ErosionMild,
    TileType::ErosionSevere,
];

impl TileType {
    pub fn is_city(&self) -> bool {
        CITY_TILES.contains(self)
    }

    pub fn is_ocean(&self) -> bool {
        OCEAN_TILES.contains(self)
    }

    pub fn is_uncovered_ocean(&self) -> bool {
        UNCOVERED_OCEAN_TILES.contains(self)
    }

    pub fn is_ocean_upgrade(&self) -> bool {
        OCEAN_UPGRADE_TILES.contains(self)
    }

    pub fn is_greenery(&self) -> bool {
        GREENERY_TILES.contains(self)
    }

    pub fn is_hazard(&self) -> bool {
        HAZARD_TILES.contains(self)
    }

    /// Whether this kind counts as a "special" tile.
    ///
    /// Hazards are excluded: they are special in the rules but never in the
    /// sense cards mean when they refer to special tiles.
    pub fn is_special(&self) -> bool {
        !matches!(
            self,
            TileType::Greenery
                | TileType::Ocean
                | TileType::City
                | TileType::MoonHabitat
                | TileType::MoonMine
                | TileType::MoonRoad
                | TileType::ErosionMild
                | TileType::ErosionSevere
                | TileType::DustStormMild
                | TileType::DustStormSevere
        )
    }
}

/// A tile placed on a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
    /// Card that placed this tile, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Hazard protected from being covered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected_hazard: Option<bool>,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            card: None,
            protected_hazard: None,
        }
    }

    /// A tile placed by a named card
    pub fn from_card(tile_type: TileType, card: impl Into<String>) -> Self {
        Self {
            card: Some(card.into()),
            ..Self::new(tile_type)
        }
    }

    /// Mark a hazard as protected
    pub fn protected(mut self) -> Self {
        self.protected_hazard = Some(true);
        self
    }

    pub fn is_protected_hazard(&self) -> bool {
        self.protected_hazard == Some(true)
    }

    /// A hazard that a new placement may cover
    pub fn is_coverable_hazard(&self) -> bool {
        self.tile_type.is_hazard() && !self.is_protected_hazard()
    }
}

/// Which ocean-derived tiles to count.
///
/// The default counts toward the ocean global parameter: upgraded oceans are
/// included and Wetlands is not. Each field overrides one default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OceanFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgraded_oceans: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wetlands: Option<bool>,
}

impl OceanFilter {
    pub fn with_upgraded_oceans(mut self, include: bool) -> Self {
        self.upgraded_oceans = Some(include);
        self
    }

    pub fn with_wetlands(mut self, include: bool) -> Self {
        self.wetlands = Some(include);
        self
    }

    /// Whether an ocean-family tile of this kind passes the filter
    pub fn includes(&self, tile_type: TileType) -> bool {
        if !tile_type.is_ocean() {
            return false;
        }
        if tile_type.is_ocean_upgrade() {
            return self.upgraded_oceans.unwrap_or(true);
        }
        if tile_type == TileType::Wetlands {
            return self.wetlands.unwrap_or(false);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_tiles() {
        assert!(TileType::City.is_city());
        assert!(TileType::Capital.is_city());
        assert!(TileType::OceanCity.is_city());
        assert!(TileType::RedCity.is_city());
        assert!(!TileType::Greenery.is_city());
    }

    #[test]
    fn test_ocean_family() {
        for tile_type in OCEAN_UPGRADE_TILES {
            assert!(tile_type.is_ocean(), "{:?} should be an ocean", tile_type);
            assert!(!tile_type.is_uncovered_ocean());
        }
        assert!(TileType::Wetlands.is_ocean());
        assert!(TileType::Wetlands.is_uncovered_ocean());
        assert!(TileType::Ocean.is_uncovered_ocean());
        assert!(!TileType::City.is_ocean());
    }

    #[test]
    fn test_wetlands_is_greenery() {
        assert!(TileType::Wetlands.is_greenery());
        assert!(TileType::Greenery.is_greenery());
        assert!(!TileType::Ocean.is_greenery());
    }

    #[test]
    fn test_special_tiles() {
        assert!(TileType::CommercialDistrict.is_special());
        assert!(TileType::OceanCity.is_special());
        assert!(!TileType::City.is_special());
        assert!(!TileType::DustStormSevere.is_special());
        assert!(!TileType::MoonRoad.is_special());
    }

    #[test]
    fn test_protected_hazard_is_not_coverable() {
        let mild = Tile::new(TileType::DustStormMild);
        assert!(mild.is_coverable_hazard());
        assert!(!mild.clone().protected().is_coverable_hazard());
        assert!(!Tile::new(TileType::City).is_coverable_hazard());
    }

    #[test]
    fn test_ocean_filter_defaults() {
        let filter = OceanFilter::default();
        assert!(filter.includes(TileType::Ocean));
        assert!(filter.includes(TileType::OceanFarm));
        assert!(!filter.includes(TileType::Wetlands));
        assert!(!filter.includes(TileType::Greenery));
    }

    #[test]
    fn test_ocean_filter_overrides() {
        let filter = OceanFilter::default()
            .with_upgraded_oceans(false)
            .with_wetlands(true);
        assert!(filter.includes(TileType::Ocean));
        assert!(!filter.includes(TileType::OceanCity));
        assert!(filter.includes(TileType::Wetlands));
    }

    #[test]
    fn test_tile_serialization_omits_unset_fields() {
        let json = serde_json::to_string(&Tile::new(TileType::Ocean)).unwrap();
        assert_eq!(json, r#"{"tile_type":"ocean"}"#);

        let tile: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile.card, None);
        assert_eq!(tile.protected_hazard, None);
    }
}
