// src/app/event_handler.rs
//! Pointer hit testing against the current table.

use crate::app::layout_calculator::{card_rect, drop_target_rect, slot_rect, top_card_rect};
use crate::components::card::CardKey;
use crate::components::pile::StackType;
use crate::components::table::Table;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The stock slot, whether or not it has cards.
    Stock,
    /// A card that may be liftable. The session decides.
    Card { pile: StackType, key: CardKey, index: usize },
}

/// Resolves a pointer-down at `(x, y)`.
///
/// Checked in order: the stock, the waste top, face-up tableau cards (top
/// most first within a column), then foundation tops.
pub fn find_clicked_target(table: &Table, draw_count: usize, x: f32, y: f32) -> Option<ClickTarget> {
    if slot_rect(&table.stock).contains(x, y) {
        return Some(ClickTarget::Stock);
    }

    if let (Some(top), Some(rect)) = (table.waste.top(), top_card_rect(&table.waste, draw_count)) {
        if rect.contains(x, y) {
            let index = table.waste.len() - 1;
            return Some(ClickTarget::Card { pile: StackType::Waste, key: top.key(), index });
        }
    }

    for pile in &table.tableau {
        let hit = pile
            .cards()
            .iter()
            .enumerate()
            .rev()
            .find(|(i, card)| card.is_face_up && card_rect(pile, *i, draw_count).contains(x, y));
        if let Some((index, card)) = hit {
            return Some(ClickTarget::Card { pile: pile.id(), key: card.key(), index });
        }
    }

    for pile in &table.foundations {
        if let (Some(top), Some(rect)) = (pile.top(), top_card_rect(pile, draw_count)) {
            if rect.contains(x, y) {
                return Some(ClickTarget::Card { pile: pile.id(), key: top.key(), index: pile.len() - 1 });
            }
        }
    }

    None
}

/// Every pile a release at `(x, y)` could land on: foundation slots, then
/// tableau columns by their top card (or empty slot).
pub fn find_drop_candidates(table: &Table, draw_count: usize, x: f32, y: f32) -> Vec<StackType> {
    let foundations = table
        .foundations
        .iter()
        .filter(|pile| slot_rect(pile).contains(x, y))
        .map(|pile| pile.id());
    let columns = table
        .tableau
        .iter()
        .filter(|pile| drop_target_rect(pile, draw_count).contains(x, y))
        .map(|pile| pile.id());
    foundations.chain(columns).collect()
}
