// src/app/init_handler.rs
//! Canvas lookup and rule parsing for a new `GameApp`.

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::RuleConfig;

/// Finds the canvas, sizes it to the table and returns its 2D context.
pub fn initialize_canvas(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or("Failed to get document")?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas element '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))?;
    canvas.set_width(SCREEN_WIDTH as u32);
    canvas.set_height(SCREEN_HEIGHT as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or("Canvas has no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Failed to cast to CanvasRenderingContext2d"))?;
    info!("Canvas '{}' ready ({}x{})", canvas_id, SCREEN_WIDTH, SCREEN_HEIGHT);
    Ok((canvas, context))
}

/// Rules from an optional JSON string. Absent or blank means defaults.
pub fn parse_config(config_json: Option<&str>) -> Result<RuleConfig, serde_json::Error> {
    match config_json.map(str::trim) {
        None | Some("") => Ok(RuleConfig::default()),
        Some(json) => RuleConfig::from_json(json),
    }
}
