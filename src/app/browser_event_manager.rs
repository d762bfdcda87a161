// src/app/browser_event_manager.rs
//! Attaches the pointer listeners that drive the game and removes them again.

use log::{debug, error, trace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::app::drag_handler::PointerDownResult;
use crate::app::state_handler::{AppState, SharedState};

/// A registered DOM listener. The closure must outlive its registration.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Maps a viewport point into canvas pixels, undoing any CSS scaling.
///
/// `bounds` is the canvas' client rect as `(left, top, width, height)`.
pub fn client_to_canvas(client_x: f64, client_y: f64, bounds: (f64, f64, f64, f64), canvas_size: (u32, u32)) -> (f32, f32) {
    let (left, top, width, height) = bounds;
    let scale_x = if width > 0.0 { canvas_size.0 as f64 / width } else { 1.0 };
    let scale_y = if height > 0.0 { canvas_size.1 as f64 / height } else { 1.0 };
    (((client_x - left) * scale_x) as f32, ((client_y - top) * scale_y) as f32)
}

fn event_to_canvas(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        event.client_x() as f64,
        event.client_y() as f64,
        (rect.left(), rect.top(), rect.width(), rect.height()),
        (canvas.width(), canvas.height()),
    )
}

fn pointer_listener<F>(canvas: HtmlCanvasElement, state: SharedState, mut handler: F) -> Closure<dyn FnMut(Event)>
where
    F: FnMut(&mut AppState, f32, f32) + 'static,
{
    Closure::wrap(Box::new(move |event: Event| {
        let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
            error!("Pointer listener received a non-mouse event");
            return;
        };
        let (x, y) = event_to_canvas(&canvas, &mouse_event);
        match state.lock() {
            Ok(mut app) => handler(&mut *app, x, y),
            Err(e) => error!("Failed to lock app state in pointer listener: {}", e),
        }
    }) as Box<dyn FnMut(Event)>)
}

fn attach(target: EventTarget, event: &'static str, closure: Closure<dyn FnMut(Event)>) -> Result<Listener, JsValue> {
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    debug!("Attached {} listener", event);
    Ok(Listener { target, event, closure })
}

/// Presses start on the canvas; moves and releases are tracked on the window
/// so a drag that leaves the canvas still ends.
pub fn attach_pointer_listeners(canvas: &HtmlCanvasElement, state: &SharedState) -> Result<Vec<Listener>, JsValue> {
    let window: EventTarget = window().ok_or("Failed to get window")?.into();

    let mousedown = pointer_listener(canvas.clone(), state.clone(), |app, x, y| {
        match app.pointer_down(x, y) {
            PointerDownResult::Nothing => trace!("Pointer down at ({}, {}) hit nothing", x, y),
            result => debug!("Pointer down at ({}, {}): {:?}", x, y, result),
        }
    });
    let mousemove = pointer_listener(canvas.clone(), state.clone(), |app, x, y| app.pointer_move(x, y));
    let mouseup = pointer_listener(canvas.clone(), state.clone(), |app, x, y| {
        let outcome = app.pointer_up(x, y);
        trace!("Pointer up at ({}, {}): {:?}", x, y, outcome);
    });

    Ok(vec![
        attach(canvas.clone().into(), "mousedown", mousedown)?,
        attach(window.clone(), "mousemove", mousemove)?,
        attach(window, "mouseup", mouseup)?,
    ])
}

pub fn detach_listeners(listeners: &mut Vec<Listener>) -> Result<(), JsValue> {
    for listener in listeners.drain(..) {
        listener
            .target
            .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref())?;
        debug!("Detached {} listener", listener.event);
    }
    Ok(())
}
