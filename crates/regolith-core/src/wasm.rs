//! WebAssembly bindings for the placement engine.
//!
//! UI adapters load a saved board plus its roster and ask which spaces are
//! legal. Everything crosses the boundary as JSON strings.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::{Board, BoardConfig};
#[cfg(feature = "wasm")]
use crate::placement::PlacementType;
#[cfg(feature = "wasm")]
use crate::player::{GameOptions, PlacementContext, Player, PlayerId};
#[cfg(feature = "wasm")]
use crate::serialize::SerializedBoard;
#[cfg(feature = "wasm")]
use crate::space::SpaceId;
#[cfg(feature = "wasm")]
use crate::tile::OceanFilter;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// WASM-exposed board wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmBoard {
    board: Board,
    players: Vec<Player>,
    options: GameOptions,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmBoard {
    /// Restore a board from its saved JSON, the roster, and the map config
    #[wasm_bindgen(constructor)]
    pub fn new(
        board_json: &str,
        players_json: &str,
        config_json: &str,
        options_json: &str,
    ) -> Result<WasmBoard, JsValue> {
        let serialized: SerializedBoard =
            serde_json::from_str(board_json).map_err(|e| js_error("Invalid board JSON", e))?;
        let players: Vec<Player> =
            serde_json::from_str(players_json).map_err(|e| js_error("Invalid players JSON", e))?;
        let config: BoardConfig =
            serde_json::from_str(config_json).map_err(|e| js_error("Invalid config JSON", e))?;
        let options: GameOptions =
            serde_json::from_str(options_json).map_err(|e| js_error("Invalid options JSON", e))?;

        let board = Board::from_serialized(&serialized, &players, config)
            .map_err(|e| js_error("Invalid board", e))?;
        Ok(WasmBoard {
            board,
            players,
            options,
        })
    }

    /// Ids of the spaces `player_id` may use for a placement type
    /// (e.g. `"city"`, `"upgradeable-ocean"`), as a JSON array
    #[wasm_bindgen(js_name = getAvailableSpaces)]
    pub fn get_available_spaces(&self, player_id: &str, placement: &str) -> Result<String, JsValue> {
        let placement: PlacementType = serde_json::from_value(serde_json::Value::from(placement))
            .map_err(|e| js_error("Unknown placement type", e))?;
        let id = PlayerId::new(player_id);
        let player = self
            .players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown player {}", player_id)))?;

        let ctx = PlacementContext::for_player(player, &self.options);
        let ids: Vec<&SpaceId> = self
            .board
            .available_spaces_for_type(&ctx, placement)
            .into_iter()
            .map(|s| &s.id)
            .collect();
        serde_json::to_string(&ids).map_err(|e| js_error("Serialization failed", e))
    }

    /// Neighbour ids of a space, clockwise from the top left, as a JSON array
    #[wasm_bindgen(js_name = getAdjacentSpaces)]
    pub fn get_adjacent_spaces(&self, space_id: &str) -> Result<String, JsValue> {
        let ids: Vec<&SpaceId> = self
            .board
            .adjacent_spaces(&SpaceId::new(space_id))
            .map_err(|e| js_error("Adjacency lookup failed", e))?
            .into_iter()
            .map(|s| &s.id)
            .collect();
        serde_json::to_string(&ids).map_err(|e| js_error("Serialization failed", e))
    }

    /// Oceans counting toward the global parameter
    #[wasm_bindgen(js_name = getOceanCount)]
    pub fn get_ocean_count(&self) -> usize {
        self.board.ocean_count(OceanFilter::default())
    }

    /// Get the board snapshot as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.board.serialize()).unwrap_or_else(|_| "{}".to_string())
    }
}
