use wasm_bindgen::prelude::*;

use crate::game::GameInstance;

/// JS-owned handle to a single game. The presentation layer keeps the
/// handle for the session and constructs a new one to start over.
#[wasm_bindgen]
pub struct Game {
    inner: GameInstance,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            inner: GameInstance::new(),
        }
    }

    /// Legal moves for the piece on `(x, y)`, as an array of move objects.
    pub fn legal_moves(&self, x: u8, y: u8) -> Result<JsValue, JsValue> {
        let moves = self.inner.legal_moves_at(x, y).map_err(JsValue::from)?;
        serde_wasm_bindgen::to_value(&moves).map_err(JsValue::from)
    }

    /// Plays move `move_index` from the piece's current legal-move list and
    /// returns the post-move game state.
    pub fn play(&mut self, x: u8, y: u8, move_index: usize) -> Result<JsValue, JsValue> {
        self.inner.play_at(x, y, move_index).map_err(JsValue::from)?;
        self.state()
    }

    /// Snapshot of the current game state.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).map_err(JsValue::from)
    }

    /// Final result; `winner` is 0 while the game is still running.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_result()).map_err(JsValue::from)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
