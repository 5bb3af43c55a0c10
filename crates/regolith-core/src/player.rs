//! The slice of player and game state that placement rules depend on.
//!
//! Card effects, resources and turn order live elsewhere. Rules here never
//! reach through a player into its game: callers build a [`PlacementContext`]
//! carrying the acting player's id and the flags that matter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable player identifier, persisted in saved games
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Player color for UI rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerColor {
    Red,
    Green,
    Yellow,
    Blue,
    Black,
    Purple,
    Orange,
    Pink,
}

/// Card-granted abilities that change placement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// Cities and greeneries ignore adjacency restrictions (Gordon)
    IgnoresPlacementRestrictions,
}

/// A seated player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    #[serde(default)]
    abilities: BTreeSet<Ability>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            abilities: BTreeSet::new(),
        }
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn grant(&mut self, ability: Ability) {
        self.abilities.insert(ability);
    }

    pub fn revoke(&mut self, ability: Ability) {
        self.abilities.remove(&ability);
    }
}

/// Expansion toggles chosen when the game was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub pathfinders_expansion: bool,
}

/// Everything a placement query needs to know about the acting player.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    pub player: &'a PlayerId,
    pub ignores_placement_restrictions: bool,
    pub pathfinders_expansion: bool,
}

impl<'a> PlacementContext<'a> {
    /// A context with no special abilities and no expansions
    pub fn new(player: &'a PlayerId) -> Self {
        Self {
            player,
            ignores_placement_restrictions: false,
            pathfinders_expansion: false,
        }
    }

    pub fn for_player(player: &'a Player, options: &GameOptions) -> Self {
        Self {
            player: &player.id,
            ignores_placement_restrictions: player
                .has_ability(Ability::IgnoresPlacementRestrictions),
            pathfinders_expansion: options.pathfinders_expansion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_picks_up_ability_and_options() {
        let mut player = Player::new("p-red", "Red", PlayerColor::Red);
        let options = GameOptions {
            pathfinders_expansion: true,
            ..GameOptions::default()
        };

        let ctx = PlacementContext::for_player(&player, &options);
        assert!(!ctx.ignores_placement_restrictions);
        assert!(ctx.pathfinders_expansion);

        player.grant(Ability::IgnoresPlacementRestrictions);
        let ctx = PlacementContext::for_player(&player, &GameOptions::default());
        assert!(ctx.ignores_placement_restrictions);
        assert!(!ctx.pathfinders_expansion);
        assert_eq!(ctx.player.as_str(), "p-red");
    }

    #[test]
    fn test_revoke_ability() {
        let mut player = Player::new("p-blue", "Blue", PlayerColor::Blue);
        player.grant(Ability::IgnoresPlacementRestrictions);
        player.revoke(Ability::IgnoresPlacementRestrictions);
        assert!(!player.has_ability(Ability::IgnoresPlacementRestrictions));
    }

    #[test]
    fn test_options_default_when_missing() {
        let options: GameOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.pathfinders_expansion);

        // Toggles this crate has no rules for are ignored
        let options: GameOptions =
            serde_json::from_str(r#"{"pathfinders_expansion":true,"moon_expansion":true}"#).unwrap();
        assert!(options.pathfinders_expansion);
    }

    #[test]
    fn test_player_id_serializes_as_string() {
        let json = serde_json::to_string(&PlayerId::new("p-1")).unwrap();
        assert_eq!(json, r#""p-1""#);
    }
}
