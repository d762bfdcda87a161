// src/app/layout_calculator.rs
//! Where each card is drawn and which rectangle answers a click.

use std::ops::Range;

use crate::components::pile::{Pile, PileKind};
use crate::components::position::{Position, Rect};
use crate::config::layout::{CARD_SPACING_Y, WASTE_FAN_X};

/// Indices of the waste cards that are fanned out (the top `draw_count`).
pub fn fanned_waste_range(len: usize, draw_count: usize) -> Range<usize> {
    len.saturating_sub(draw_count.max(1))..len
}

/// Screen position of the `index`-th card of `pile`.
///
/// Tableau columns cascade downward; the waste fans its top `draw_count`
/// cards to the right; everything else sits on the anchor.
pub fn calculate_card_position(pile: &Pile, index: usize, draw_count: usize) -> Position {
    let base = pile.card_position(index);
    if pile.kind() != PileKind::Waste {
        return base;
    }
    let fanned = fanned_waste_range(pile.len(), draw_count);
    if fanned.contains(&index) {
        base.offset((index - fanned.start) as f32 * WASTE_FAN_X, 0.0)
    } else {
        base
    }
}

pub fn card_rect(pile: &Pile, index: usize, draw_count: usize) -> Rect {
    Rect::card_at(calculate_card_position(pile, index, draw_count))
}

/// The outline of the pile itself, drawn when it is empty.
pub fn slot_rect(pile: &Pile) -> Rect {
    Rect::card_at(pile.anchor())
}

pub fn top_card_rect(pile: &Pile, draw_count: usize) -> Option<Rect> {
    pile.len().checked_sub(1).map(|top| card_rect(pile, top, draw_count))
}

/// Where a release counts as "on" this pile: the top card, or the empty slot.
pub fn drop_target_rect(pile: &Pile, draw_count: usize) -> Rect {
    top_card_rect(pile, draw_count).unwrap_or_else(|| slot_rect(pile))
}

/// Position of the `index`-th card of a held run whose first card was
/// grabbed `grab_offset` away from its top-left corner.
pub fn held_card_position(pointer: Position, grab_offset: (f32, f32), index: usize) -> Position {
    Position::new(
        pointer.x - grab_offset.0,
        pointer.y - grab_offset.1 + index as f32 * CARD_SPACING_Y,
    )
}
