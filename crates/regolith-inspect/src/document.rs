//! Saved game documents.
//!
//! The session layer owns the full game state. This tool only reads the parts
//! the board needs: the roster, the options, the map config and the board
//! snapshot. Anything else in the document is ignored.

use regolith_core::{Board, BoardConfig, BoardError, GameOptions, Player, PlayerId, SerializedBoard};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed game document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Document has no players")]
    NoPlayers,
}

/// The board-related subset of a saved game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    pub players: Vec<Player>,
    #[serde(default)]
    pub options: GameOptions,
    #[serde(default)]
    pub board_config: BoardConfig,
    pub board: SerializedBoard,
}

impl GameDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: GameDocument = serde_json::from_str(json)?;
        document.validate()?;
        debug!(
            players = document.players.len(),
            spaces = document.board.spaces.len(),
            "Loaded game document"
        );
        Ok(document)
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if self.players.is_empty() {
            return Err(DocumentError::NoPlayers);
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.id == player.id) {
                return Err(DocumentError::DuplicatePlayer(player.id.clone()));
            }
        }
        Ok(())
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Rebuild the live board against this document's roster
    pub fn restore_board(&self) -> Result<Board, DocumentError> {
        Ok(Board::from_serialized(
            &self.board,
            &self.players,
            self.board_config.clone(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regolith_core::SpaceId;

    const DOCUMENT: &str = r#"{
        "players": [
            {"id": "p-red", "name": "Red", "color": "red"},
            {"id": "p-blue", "name": "Blue", "color": "blue"}
        ],
        "options": {"pathfinders_expansion": true},
        "board_config": {"volcanic_space_ids": ["02"]},
        "generation": 4,
        "board": {"spaces": [
            {"id": "01", "space_type": "colony", "x": -1, "y": -1},
            {"id": "02", "space_type": "land", "x": 0, "y": 0, "bonus": ["steel"]},
            {"id": "03", "space_type": "land", "x": 1, "y": 0,
             "tile": {"tile_type": "city"}, "player": "p-red"},
            {"id": "04", "space_type": "ocean", "x": 0, "y": 1, "player": "p-gone"}
        ]}
    }"#;

    #[test]
    fn test_load_document() {
        let document = GameDocument::from_json(DOCUMENT).unwrap();
        assert_eq!(document.players.len(), 2);
        assert!(document.options.pathfinders_expansion);
        assert_eq!(document.board_config.volcanic_space_ids, vec![SpaceId::new("02")]);
        assert!(document.player(&PlayerId::new("p-blue")).is_some());
    }

    #[test]
    fn test_restore_drops_stale_player() {
        let document = GameDocument::from_json(DOCUMENT).unwrap();
        let board = document.restore_board().unwrap();
        assert_eq!(board.space(&"03".into()).unwrap().player, Some(PlayerId::new("p-red")));
        assert_eq!(board.space(&"04".into()).unwrap().player, None);
    }

    #[test]
    fn test_rejects_duplicate_players() {
        let json = r#"{
            "players": [
                {"id": "p-red", "name": "Red", "color": "red"},
                {"id": "p-red", "name": "Also Red", "color": "blue"}
            ],
            "board": {"spaces": []}
        }"#;
        assert!(matches!(
            GameDocument::from_json(json),
            Err(DocumentError::DuplicatePlayer(_))
        ));
    }

    #[test]
    fn test_rejects_empty_roster() {
        let json = r#"{"players": [], "board": {"spaces": []}}"#;
        assert!(matches!(GameDocument::from_json(json), Err(DocumentError::NoPlayers)));
    }

    #[test]
    fn test_board_errors_surface() {
        let json = r#"{
            "players": [{"id": "p-red", "name": "Red", "color": "red"}],
            "board": {"spaces": [
                {"id": "01", "space_type": "land", "x": 0, "y": 0},
                {"id": "01", "space_type": "land", "x": 1, "y": 0}
            ]}
        }"#;
        let document = GameDocument::from_json(json).unwrap();
        assert!(matches!(
            document.restore_board(),
            Err(DocumentError::Board(BoardError::DuplicateSpaceId(_)))
        ));
    }
}
