use wasm_bindgen::prelude::*;

mod game;

use game::EscapeGame;

escape_web::export_game!(EscapeGame, "rabbit-escape");
