use wasm_bindgen::prelude::*;
use hopper_engine::*;

mod game;
use game::build_game;

hopper_web::export_game!(PlatformerGame, build_game(), "platformer");
