// src/app/state_getter.rs
//! Serializes the current game for the JS side.

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::app::state_handler::{lock_state, SharedState};
use crate::session::GameSession;

pub fn session_json(session: &GameSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(&session.snapshot())
}

pub fn get_state_json(state: &SharedState) -> Result<String, JsValue> {
    let state = lock_state(state)?;
    match session_json(&state.session) {
        Ok(json) => {
            debug!("Serialized game state ({} bytes)", json.len());
            Ok(json)
        }
        Err(e) => {
            let message = format!("Failed to serialize game state: {}", e);
            error!("{}", message);
            Err(JsValue::from_str(&message))
        }
    }
}
