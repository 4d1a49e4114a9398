use wasm_bindgen::prelude::*;

mod game;
use game::WorldOne;

tilehop_web::export_game!(WorldOne, "world-one");

/// Level texts compiled into the module, for hosts that do not fetch assets.
#[wasm_bindgen]
pub fn game_load_builtin_level() -> Result<(), JsError> {
    game_load_level(game::MANIFEST, game::LEGEND, game::LEVEL)
}
