// src/lib.rs
//! Klondike solitaire for the browser: a rules engine plus a canvas front end.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod logic;
pub mod session;

pub use app::game_app::GameApp;
pub use components::{Card, CardKey, DrawOutcome, DropOutcome, GameStatus, Rank, StackType, Suit};
pub use config::RuleConfig;
pub use session::{GameSession, GameSnapshot};

// Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logger::init(LevelFilter::Debug).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("Logger was already installed"));
    }
    log::info!("klondike_wasm loaded");
}
