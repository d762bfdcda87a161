// src/components/pile.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardKey};
use crate::components::position::Position;
use crate::config::layout::CARD_SPACING_Y;
use crate::logic::rules::move_validation;

/// Handle naming one of the thirteen piles on the table.
///
/// Tableau columns are numbered 0-6, foundations 0-3.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    Tableau(u8),
    Foundation(u8),
    Stock,
    Waste,
}

/// The rule family a pile belongs to. Legality and layout are chosen by kind.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

impl StackType {
    /// Rule family of the pile this handle names.
    pub fn kind(self) -> PileKind {
        match self {
            StackType::Tableau(_) => PileKind::Tableau,
            StackType::Foundation(_) => PileKind::Foundation,
            StackType::Stock => PileKind::Stock,
            StackType::Waste => PileKind::Waste,
        }
    }
}

impl PileKind {
    /// Offset of the `index`-th card from the pile anchor.
    pub fn card_offset(self, index: usize) -> (f32, f32) {
        match self {
            PileKind::Tableau => (0.0, index as f32 * CARD_SPACING_Y),
            PileKind::Stock | PileKind::Waste | PileKind::Foundation => (0.0, 0.0),
        }
    }
}

/// An ordered run of cards, bottom first. The pile owns its cards; moving a
/// card between piles moves the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    id: StackType,
    anchor: Position,
    cards: Vec<Card>,
}

impl Pile {
    /// An empty pile anchored at `anchor`.
    pub fn new(id: StackType, anchor: Position) -> Self {
        Self { id, anchor, cards: Vec::new() }
    }

    pub fn id(&self) -> StackType {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    /// Top-left corner of the bottom card.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Cards bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Index of `key` counted from the bottom.
    pub fn position_of(&self, key: CardKey) -> Option<usize> {
        self.cards.iter().position(|card| card.key() == key)
    }

    /// Where the `index`-th card is drawn, per this pile's layout policy.
    pub fn card_position(&self, index: usize) -> Position {
        let (dx, dy) = self.kind().card_offset(index);
        self.anchor.offset(dx, dy)
    }

    /// Pushes `cards` in order and takes ownership of them. No legality check:
    /// callers validate with `can_accept` first.
    pub fn append(&mut self, cards: Vec<Card>) {
        let id = self.id;
        self.cards.extend(cards.into_iter().map(|mut card| {
            card.owner = Some(id);
            card
        }));
    }

    /// Detaches the card `key` and everything above it, preserving order.
    /// Returns an empty run and leaves the pile alone if `key` is not here.
    pub fn remove_from(&mut self, key: CardKey) -> Vec<Card> {
        match self.position_of(key) {
            Some(index) => self.cards.split_off(index),
            None => Vec::new(),
        }
    }

    /// Takes the top card off. Its owner stays set until it lands on another pile.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empties the pile, returning its cards bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Whether `moving` may be dropped here, under this pile's kind rules.
    pub fn can_accept(&self, moving: &[Card]) -> bool {
        move_validation::can_accept(self, moving)
    }

    /// Turns a face-down top card face up. Only tableau columns hold face-down
    /// cards under play, so other kinds are left untouched.
    /// Returns whether a card was flipped.
    pub fn autoflip(&mut self) -> bool {
        if self.kind() != PileKind::Tableau {
            return false;
        }
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up => {
                top.flip_up();
                true
            }
            _ => false,
        }
    }
}
