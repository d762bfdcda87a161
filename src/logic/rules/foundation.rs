//! Foundation drop rules.

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;

/// Foundations take one face-up card at a time. An empty foundation takes any
/// Ace, which fixes its suit; after that only the next rank of that suit fits.
pub fn can_accept_on_foundation(pile: &Pile, moving: &[Card]) -> bool {
    let card = match moving {
        [card] => card,
        _ => return false,
    };
    if !card.is_face_up {
        return false;
    }
    match pile.top() {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.value() == top.value() + 1,
    }
}
