//! Helpers shared by the per-pile rules.

use itertools::Itertools;

use crate::components::card::Card;

/// Whether `cards` can travel together: non-empty, all face up, and each card
/// one lower and of the other colour than the card beneath it.
pub fn is_valid_stack(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    if cards.iter().any(|card| !card.is_face_up) {
        return false;
    }
    cards
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| builds_on(upper, lower))
}

/// `card` may sit directly on `below` in a tableau build.
pub fn builds_on(card: &Card, below: &Card) -> bool {
    below.value() == card.value() + 1 && below.color() != card.color()
}
