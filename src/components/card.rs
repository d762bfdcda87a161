// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::components::pile::StackType;

/// The four suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// Card ranks, Ace low. The discriminant is the card's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// Red or black. Tableau builds alternate between the two.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// Hearts and diamonds are red, clubs and spades black.
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    /// Colour of this suit.
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    /// Glyph used by the procedural card faces.
    pub fn glyph(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }

    /// Lowercase plural name, as used in asset file names (`hearts`, `spades`, ...).
    pub fn asset_name(self) -> &'static str {
        match self {
            Suit::Heart => "hearts",
            Suit::Diamond => "diamonds",
            Suit::Club => "clubs",
            Suit::Spade => "spades",
        }
    }
}

impl Rank {
    /// Ace = 1 through King = 13.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short label printed on a card face: `A`, `2` .. `10`, `J`, `Q`, `K`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// The identity of a card: one per (suit, rank) pair, 52 in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

/// A playing card.
///
/// `suit` and `rank` never change. `is_face_up` is flipped only by pile and
/// session operations. `owner` is the handle of the last pile that held the
/// card. `Pile::append` refreshes it, and it stays set while the card is in
/// hand, so `Interaction::origin` reads a lifted run's origin from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    #[serde(skip)]
    pub owner: Option<StackType>,
}

impl Card {
    /// A fresh face-down card that no pile owns yet.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false, owner: None }
    }

    /// Identity of this card, ignoring orientation and owner.
    pub fn key(&self) -> CardKey {
        CardKey { suit: self.suit, rank: self.rank }
    }

    /// Red or black, from the suit.
    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// Rank value, 1 to 13.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Shows the face.
    pub fn flip_up(&mut self) {
        self.is_face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.is_face_up = false;
    }
}
