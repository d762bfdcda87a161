//! Tableau drop rules.

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;

use super::common::{builds_on, is_valid_stack};

/// A tableau takes a valid run whose first card is a King when empty, or
/// which builds down in alternating colour on a face-up top card.
pub fn can_accept_on_tableau(pile: &Pile, moving: &[Card]) -> bool {
    if !is_valid_stack(moving) {
        return false;
    }
    let head = &moving[0];
    match pile.top() {
        None => head.rank == Rank::King,
        Some(top) => top.is_face_up && builds_on(head, top),
    }
}
