// src/logic/dealer.rs
//! Initial Klondike deal.

use log::info;
use rand::Rng;

use crate::components::card::Card;
use crate::components::table::Table;
use crate::logic::deck::{create_standard_deck, shuffle_deck};

/// Shuffles a fresh deck with `rng` and lays it out.
pub fn deal_new_game<R: Rng + ?Sized>(rng: &mut R) -> Table {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deal_from_deck(deck)
}

/// Lays out an already ordered deck. The end of `deck` is its top.
///
/// Column `i` gets `i + 1` cards popped off the top, and only the last one is
/// turned face up. The 24 cards left over become the stock, face down and in
/// deck order.
pub fn deal_from_deck(mut deck: Vec<Card>) -> Table {
    let mut table = Table::new();

    for (column, pile) in table.tableau.iter_mut().enumerate() {
        for _ in 0..=column {
            if let Some(card) = deck.pop() {
                pile.append(vec![card]);
            }
        }
        pile.autoflip();
    }

    for card in deck.iter_mut() {
        card.flip_down();
    }
    table.stock.append(deck);

    info!(
        "Dealt new game: {} tableau cards, {} in stock",
        table.tableau.iter().map(|p| p.len()).sum::<usize>(),
        table.stock.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::table::DECK_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn initial_deal_shape() {
        let table = deal_new_game(&mut StdRng::seed_from_u64(2024));

        for (i, pile) in table.tableau.iter().enumerate() {
            assert_eq!(pile.len(), i + 1, "column {} has the wrong size", i);
            let (top, rest) = pile.cards().split_last().unwrap();
            assert!(top.is_face_up, "column {} top is face down", i);
            assert!(rest.iter().all(|c| !c.is_face_up), "column {} has a buried face-up card", i);
        }

        assert_eq!(table.stock.len(), 24);
        assert!(table.stock.cards().iter().all(|c| !c.is_face_up));
        assert!(table.waste.is_empty());
        assert!(table.foundations.iter().all(|f| f.is_empty()));
    }

    #[test]
    fn deal_conserves_the_deck() {
        let table = deal_new_game(&mut StdRng::seed_from_u64(9));
        assert_eq!(table.card_count(), DECK_SIZE);
        let unique: HashSet<_> = table.all_cards().map(Card::key).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn dealt_cards_know_their_pile() {
        let table = deal_new_game(&mut StdRng::seed_from_u64(3));
        for pile in table.piles() {
            assert!(pile.cards().iter().all(|c| c.owner == Some(pile.id())));
        }
    }

    #[test]
    fn deal_pops_from_the_deck_top() {
        let deck = create_standard_deck();
        let top = deck.last().unwrap().key();
        let bottom = deck.first().unwrap().key();

        let table = deal_from_deck(deck);
        assert_eq!(table.tableau[0].top().unwrap().key(), top);
        // Stock keeps the untouched bottom of the deck in order.
        assert_eq!(table.stock.cards()[0].key(), bottom);
    }

    #[test]
    fn seeded_deals_are_deterministic() {
        let a = deal_new_game(&mut StdRng::seed_from_u64(77));
        let b = deal_new_game(&mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
