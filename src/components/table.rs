// src/components/table.rs
//! The thirteen piles of a Klondike layout.

use crate::components::card::Card;
use crate::components::pile::{Pile, StackType};
use crate::components::position::Position;
use crate::config::layout::{
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, WASTE_POS_X, WASTE_POS_Y,
};

pub const TABLEAU_COUNT: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
pub const DECK_SIZE: usize = 52;

/// Fixed screen anchor of a pile.
pub fn anchor_for(id: StackType) -> Position {
    match id {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
        StackType::Foundation(i) => {
            Position::new(FOUNDATION_START_X + i as f32 * FOUNDATION_X_OFFSET, FOUNDATION_START_Y)
        }
        StackType::Tableau(i) => {
            Position::new(TABLEAU_START_X + i as f32 * TABLEAU_X_OFFSET, TABLEAU_START_Y)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub tableau: Vec<Pile>,
    pub foundations: Vec<Pile>,
    pub stock: Pile,
    pub waste: Pile,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// All thirteen piles, empty.
    pub fn new() -> Self {
        let pile = |id| Pile::new(id, anchor_for(id));
        Self {
            tableau: (0..TABLEAU_COUNT as u8).map(|i| pile(StackType::Tableau(i))).collect(),
            foundations: (0..FOUNDATION_COUNT as u8).map(|i| pile(StackType::Foundation(i))).collect(),
            stock: pile(StackType::Stock),
            waste: pile(StackType::Waste),
        }
    }

    /// Pile named by `id`. `None` for an out-of-range column or foundation index.
    pub fn pile(&self, id: StackType) -> Option<&Pile> {
        match id {
            StackType::Tableau(i) => self.tableau.get(i as usize),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
        }
    }

    pub fn pile_mut(&mut self, id: StackType) -> Option<&mut Pile> {
        match id {
            StackType::Tableau(i) => self.tableau.get_mut(i as usize),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
        }
    }

    /// Every pile: tableau, foundations, stock, waste.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain(std::iter::once(&self.stock))
            .chain(std::iter::once(&self.waste))
    }

    /// Every card on the table, pile by pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.piles().flat_map(|pile| pile.cards().iter())
    }

    /// Cards on the table. A run in hand is not counted.
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Cards on the four foundations; 52 means the game is won.
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }
}
