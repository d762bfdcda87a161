// src/app/game_app.rs
//! The object JavaScript holds: owns the session, the canvas and the listeners.

use std::sync::{Arc, Mutex};

use js_sys::Promise;
use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::assets::{load_card_images, AssetRegistry};
use crate::app::browser_event_manager::{self, Listener};
use crate::app::state_handler::{lock_state, AppState, SharedState};
use crate::app::{init_handler, renderer, state_getter};
use crate::config::RuleConfig;
use crate::session::GameSession;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Failed to serialize: {}", e)))
}

#[wasm_bindgen]
pub struct GameApp {
    state: SharedState,
    assets: Arc<Mutex<Option<AssetRegistry>>>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` takes the form `{"draw_count":3,"redeal_limit":null}`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = init_handler::parse_config(config_json.as_deref())
            .map_err(|e| JsValue::from_str(&format!("Invalid rule config: {}", e)))?;
        let (canvas, context) = init_handler::initialize_canvas(canvas_id)?;
        let state = AppState::shared(GameSession::new(config));
        let listeners = browser_event_manager::attach_pointer_listeners(&canvas, &state)?;
        info!("GameApp ready (draw {}, redeal limit {:?})", config.draw_count, config.redeal_limit);

        Ok(Self { state, assets: Arc::new(Mutex::new(None)), canvas, context, listeners })
    }

    /// Deals a fresh game with the current rules.
    pub fn new_game(&self) -> Result<(), JsValue> {
        let mut state = lock_state(&self.state)?;
        let config = *state.session.config();
        state.reset(GameSession::new(config));
        Ok(())
    }

    /// Deals a reproducible game.
    pub fn new_game_with_seed(&self, seed: u32) -> Result<(), JsValue> {
        let mut state = lock_state(&self.state)?;
        let config = *state.session.config();
        state.reset(GameSession::with_seed(config, seed as u64));
        Ok(())
    }

    /// Changes the rules and deals again.
    pub fn set_rules(&self, config_json: &str) -> Result<(), JsValue> {
        let config = RuleConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid rule config: {}", e)))?;
        lock_state(&self.state)?.reset(GameSession::new(config));
        Ok(())
    }

    /// Loads card art from `base_url`. Resolves to `true` once images are in
    /// use, `false` if cards will keep being drawn procedurally.
    pub fn load_assets(&self, base_url: String) -> Promise {
        let assets = Arc::clone(&self.assets);
        future_to_promise(async move {
            match load_card_images(&base_url).await {
                Ok(registry) => match assets.lock() {
                    Ok(mut slot) => {
                        *slot = Some(registry);
                        Ok(JsValue::from_bool(true))
                    }
                    Err(e) => Err(JsValue::from_str(&format!("Failed to lock asset registry: {}", e))),
                },
                Err(e) => {
                    warn!("Card art unavailable ({:?}), drawing cards procedurally", e);
                    Ok(JsValue::from_bool(false))
                }
            }
        })
    }

    /// Draws one frame. `timestamp` is the `requestAnimationFrame` time in ms.
    pub fn render(&self, timestamp: f64) -> Result<(), JsValue> {
        let state = lock_state(&self.state)?;
        let assets = self
            .assets
            .lock()
            .map_err(|e| JsValue::from_str(&format!("Failed to lock asset registry: {}", e)))?;
        renderer::render_frame(&self.context, &state.session, &state.drag, assets.as_ref(), timestamp)
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas.height()
    }

    /// Canvas-space pointer handling, for hosts that route events themselves.
    pub fn pointer_down(&self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = lock_state(&self.state)?.pointer_down(x, y);
        to_json(&result)
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> Result<(), JsValue> {
        lock_state(&self.state)?.pointer_move(x, y);
        Ok(())
    }

    pub fn pointer_up(&self, x: f32, y: f32) -> Result<String, JsValue> {
        let outcome = lock_state(&self.state)?.pointer_up(x, y);
        to_json(&outcome)
    }

    pub fn draw_from_stock(&self) -> Result<String, JsValue> {
        let outcome = lock_state(&self.state)?.session.draw_from_stock();
        to_json(&outcome)
    }

    pub fn recycle_waste_to_stock(&self) -> Result<bool, JsValue> {
        Ok(lock_state(&self.state)?.session.recycle_waste_to_stock())
    }

    /// What a click on the stock does: draw, or recycle when it is empty.
    pub fn click_stock(&self) -> Result<String, JsValue> {
        let outcome = lock_state(&self.state)?.session.click_stock();
        to_json(&outcome)
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.state)
    }

    pub fn has_won(&self) -> bool {
        match lock_state(&self.state) {
            Ok(state) => state.session.has_won(),
            Err(_) => false,
        }
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_listeners(&mut self.listeners) {
            error!("GameApp: failed to detach listeners: {:?}", e);
        }
    }
}
