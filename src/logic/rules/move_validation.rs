// src/logic/rules/move_validation.rs
//! Dispatches a drop check to the rules of the target pile's kind.

use crate::components::card::Card;
use crate::components::pile::{Pile, PileKind};

use super::{foundation, tableau};

/// Whether `moving` may be dropped on `target`.
///
/// Stock and waste are never drop targets: cards reach them only through
/// draw and recycle.
pub fn can_accept(target: &Pile, moving: &[Card]) -> bool {
    match target.kind() {
        PileKind::Tableau => tableau::can_accept_on_tableau(target, moving),
        PileKind::Foundation => foundation::can_accept_on_foundation(target, moving),
        PileKind::Stock | PileKind::Waste => false,
    }
}
