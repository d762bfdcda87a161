// src/app/state_handler.rs
//! The mutable state shared by the `GameApp` and its DOM listeners.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info};
use wasm_bindgen::JsValue;

use crate::app::drag_handler::{DragController, PointerDownResult};
use crate::components::game_state::DropOutcome;
use crate::session::GameSession;

pub struct AppState {
    pub session: GameSession,
    pub drag: DragController,
}

pub type SharedState = Arc<Mutex<AppState>>;

impl AppState {
    pub fn new(session: GameSession) -> Self {
        Self { session, drag: DragController::new() }
    }

    pub fn shared(session: GameSession) -> SharedState {
        Arc::new(Mutex::new(Self::new(session)))
    }

    /// Replaces the game. A run held in the old game goes away with it.
    pub fn reset(&mut self, session: GameSession) {
        self.session = session;
        self.drag = DragController::new();
        info!("New game dealt (draw {})", self.session.config().draw_count);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerDownResult {
        self.drag.pointer_down(&mut self.session, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.drag.pointer_move(&self.session, x, y);
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> DropOutcome {
        self.drag.pointer_up(&mut self.session, x, y)
    }
}

pub fn lock_state(state: &SharedState) -> Result<MutexGuard<'_, AppState>, JsValue> {
    state.lock().map_err(|e| {
        let message = format!("Failed to lock app state: {}", e);
        error!("{}", message);
        JsValue::from_str(&message)
    })
}
