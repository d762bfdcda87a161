// src/app/drag_handler.rs
//! Turns raw pointer events into session operations and tracks where the
//! held run is drawn while it follows the pointer.

use log::debug;
use serde::Serialize;

use crate::app::event_handler::{find_clicked_target, find_drop_candidates, ClickTarget};
use crate::app::layout_calculator::{card_rect, held_card_position};
use crate::components::game_state::{DrawOutcome, DropOutcome};
use crate::components::position::Position;
use crate::session::GameSession;

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerDownResult {
    Stock(DrawOutcome),
    Lifted(usize),
    Nothing,
}

/// Screen-side drag bookkeeping. Which cards are held lives in the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    grab_offset: (f32, f32),
    pointer: Position,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, session: &mut GameSession, x: f32, y: f32) -> PointerDownResult {
        let draw_count = session.config().draw_count;
        match find_clicked_target(session.table(), draw_count, x, y) {
            Some(ClickTarget::Stock) => PointerDownResult::Stock(session.click_stock()),
            Some(ClickTarget::Card { pile, key, index }) => {
                let Some(origin) = session.table().pile(pile).map(|p| card_rect(p, index, draw_count)) else {
                    return PointerDownResult::Nothing;
                };
                let lifted = session.lift_at(pile, key).len();
                if lifted == 0 {
                    return PointerDownResult::Nothing;
                }
                self.grab_offset = (x - origin.x, y - origin.y);
                self.pointer = Position::new(x, y);
                debug!("Drag start on {:?} with {} card(s)", pile, lifted);
                PointerDownResult::Lifted(lifted)
            }
            None => PointerDownResult::Nothing,
        }
    }

    pub fn pointer_move(&mut self, session: &GameSession, x: f32, y: f32) {
        if session.interaction().is_holding() {
            self.pointer = Position::new(x, y);
        }
    }

    pub fn pointer_up(&mut self, session: &mut GameSession, x: f32, y: f32) -> DropOutcome {
        if !session.interaction().is_holding() {
            return DropOutcome::NotHolding;
        }
        let candidates = find_drop_candidates(session.table(), session.config().draw_count, x, y);
        let outcome = session.release(&candidates);
        *self = Self::default();
        outcome
    }

    /// Screen positions of the held cards, bottom first.
    pub fn held_positions(&self, count: usize) -> Vec<Position> {
        (0..count).map(|i| held_card_position(self.pointer, self.grab_offset, i)).collect()
    }
}
