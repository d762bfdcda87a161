// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// Builds the standard 52-card deck, every card face down.
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle driven by `rng`.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
