// src/session.rs
//! One game of Klondike: the table, the pointer interaction and the rule
//! configuration, mutated only through the operations below.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use serde::Serialize;

use crate::components::card::{Card, CardKey};
use crate::components::game_state::{DrawOutcome, DropOutcome, GameStatus};
use crate::components::interaction::Interaction;
use crate::components::pile::{Pile, PileKind, StackType};
use crate::components::table::{Table, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::RuleConfig;
use crate::logic::dealer::deal_new_game;
use crate::logic::rules::{
    can_deal_from_stock, can_reset_stock_from_waste, check_win_condition, draw_to_waste,
    recycle_waste_to_stock,
};

/// Read-only view of one pile for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PileSnapshot {
    pub id: StackType,
    pub cards: Vec<Card>,
}

impl From<&Pile> for PileSnapshot {
    fn from(pile: &Pile) -> Self {
        Self { id: pile.id(), cards: pile.cards().to_vec() }
    }
}

/// Read-only view of the whole game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub tableau: Vec<PileSnapshot>,
    pub foundations: Vec<PileSnapshot>,
    pub stock: PileSnapshot,
    pub waste: PileSnapshot,
    pub held: Vec<Card>,
    pub held_origin: Option<StackType>,
    pub status: GameStatus,
    pub draw_count: usize,
    pub recycles_used: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    table: Table,
    config: RuleConfig,
    recycles_used: u32,
    interaction: Interaction,
}

impl GameSession {
    /// Deals a new game from the thread RNG.
    pub fn new(config: RuleConfig) -> Self {
        Self::from_table(deal_new_game(&mut thread_rng()), config)
    }

    /// Deals a reproducible game.
    pub fn with_seed(config: RuleConfig, seed: u64) -> Self {
        info!("Dealing seeded game ({})", seed);
        Self::from_table(deal_new_game(&mut StdRng::seed_from_u64(seed)), config)
    }

    /// Starts a session on an already laid out table.
    pub fn from_table(table: Table, config: RuleConfig) -> Self {
        Self { table, config: config.normalized(), recycles_used: 0, interaction: Interaction::Idle }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn recycles_used(&self) -> u32 {
        self.recycles_used
    }

    pub fn has_won(&self) -> bool {
        check_win_condition(self.table.foundation_card_count())
    }

    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Cards on the table plus any run in hand. Always 52.
    pub fn card_count(&self) -> usize {
        self.table.card_count() + self.interaction.held_run().len()
    }

    /// Picks up `key` from `pile` and enters `Holding`.
    ///
    /// Only the waste top, a face-up tableau card (with everything above it)
    /// and a foundation top can be lifted. Anything else, including the stock
    /// and a press while already holding, lifts nothing and returns an empty
    /// run. The lifted cards keep `pile` as their owner, which is how the
    /// session finds the origin again on release.
    pub fn lift_at(&mut self, pile: StackType, key: CardKey) -> &[Card] {
        if self.interaction.is_holding() {
            trace!("lift_at {:?} ignored: already holding", pile);
            return &[];
        }
        let Some(source) = self.table.pile_mut(pile) else {
            return &[];
        };
        let Some(index) = source.position_of(key) else {
            return &[];
        };
        let liftable = match source.kind() {
            PileKind::Stock => false,
            PileKind::Waste | PileKind::Foundation => index + 1 == source.len(),
            PileKind::Tableau => source.cards()[index].is_face_up,
        };
        if !liftable {
            return &[];
        }

        let run = source.remove_from(key);
        debug!("Lifted {} card(s) from {:?}", run.len(), pile);
        self.interaction = Interaction::Holding { run };
        self.interaction.held_run()
    }

    /// Tries to put the held run on `target`. On success the session returns
    /// to `Idle` and a tableau origin gets its new top turned up. On refusal
    /// the run stays in hand.
    pub fn drop_at(&mut self, target: StackType) -> bool {
        let Interaction::Holding { run } = &self.interaction else {
            return false;
        };
        let Some(origin) = self.interaction.origin() else {
            return false;
        };
        let accepted = self.table.pile(target).map_or(false, |pile| pile.can_accept(run));
        if !accepted {
            return false;
        }

        let run = match std::mem::take(&mut self.interaction) {
            Interaction::Holding { run } => run,
            Interaction::Idle => return false,
        };
        let count = run.len();
        if let Some(pile) = self.table.pile_mut(target) {
            pile.append(run);
        }
        if let Some(origin_pile) = self.table.pile_mut(origin) {
            if origin_pile.autoflip() {
                debug!("Turned up new top of {:?}", origin);
            }
        }
        debug!("Placed {} card(s) from {:?} on {:?}", count, origin, target);
        if self.has_won() {
            info!("All cards are on the foundations");
        }
        true
    }

    /// Puts the held run back where it was lifted from, unchanged.
    pub fn return_to_origin(&mut self) {
        let Some(origin) = self.interaction.origin() else {
            return;
        };
        if let Interaction::Holding { run } = std::mem::take(&mut self.interaction) {
            trace!("Returning {} card(s) to {:?}", run.len(), origin);
            if let Some(pile) = self.table.pile_mut(origin) {
                pile.append(run);
            }
        }
    }

    /// Resolves a pointer release over `candidates` (every pile the pointer
    /// is over). Foundations are tried first, then tableau columns, each in
    /// index order; if none accepts, the run goes back to its origin.
    pub fn release(&mut self, candidates: &[StackType]) -> DropOutcome {
        let Some(origin) = self.interaction.origin() else {
            return DropOutcome::NotHolding;
        };
        let ordered = (0..FOUNDATION_COUNT as u8)
            .map(StackType::Foundation)
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
            .filter(|id| candidates.contains(id));
        for target in ordered {
            if self.drop_at(target) {
                return DropOutcome::Placed(target);
            }
        }
        self.return_to_origin();
        DropOutcome::Returned(origin)
    }

    /// Turns up to `draw_count` cards from the stock onto the waste.
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        if self.interaction.is_holding() || !can_deal_from_stock(self.table.stock.is_empty()) {
            return DrawOutcome::NoCardsAvailable;
        }
        let Table { stock, waste, .. } = &mut self.table;
        let drawn = draw_to_waste(stock, waste, self.config.draw_count);
        debug!("Drew {} card(s), {} left in stock", drawn, stock.len());
        DrawOutcome::Drew(drawn)
    }

    /// Moves the waste back into the stock if the stock is empty and the
    /// redeal limit allows it.
    pub fn recycle_waste_to_stock(&mut self) -> bool {
        if self.interaction.is_holding() {
            return false;
        }
        let Table { stock, waste, .. } = &mut self.table;
        if !can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
            return false;
        }
        if !self.config.allows_recycle(self.recycles_used) {
            debug!("Redeal limit of {:?} reached", self.config.redeal_limit);
            return false;
        }
        let moved = recycle_waste_to_stock(stock, waste);
        self.recycles_used += 1;
        info!("Recycled {} card(s) into the stock (pass {})", moved, self.recycles_used);
        true
    }

    /// What a click on the stock does: draw while it has cards, otherwise
    /// recycle the waste.
    pub fn click_stock(&mut self) -> DrawOutcome {
        if !self.table.stock.is_empty() {
            return self.draw_from_stock();
        }
        let waiting = self.table.waste.len();
        if self.recycle_waste_to_stock() {
            DrawOutcome::Recycled(waiting)
        } else {
            DrawOutcome::NoCardsAvailable
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tableau: self.table.tableau.iter().map(PileSnapshot::from).collect(),
            foundations: self.table.foundations.iter().map(PileSnapshot::from).collect(),
            stock: PileSnapshot::from(&self.table.stock),
            waste: PileSnapshot::from(&self.table.waste),
            held: self.interaction.held_run().to_vec(),
            held_origin: self.interaction.origin(),
            status: self.status(),
            draw_count: self.config.draw_count,
            recycles_used: self.recycles_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit, ALL_RANKS, ALL_SUITS};
    use crate::components::table::DECK_SIZE;
    use rand::Rng;
    use std::collections::HashSet;

    fn up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip_up();
        card
    }

    fn down(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn key(suit: Suit, rank: Rank) -> CardKey {
        CardKey { suit, rank }
    }

    fn assert_conserved(session: &GameSession) {
        assert_eq!(session.card_count(), DECK_SIZE);
        let mut keys: HashSet<CardKey> = session.table().all_cards().map(Card::key).collect();
        keys.extend(session.interaction().held_run().iter().map(Card::key));
        assert_eq!(keys.len(), DECK_SIZE, "duplicate or missing card");
    }

    /// Column 3 is [5♣ down, Q♥ up], column 4 is [K♠ up], the waste top is
    /// A♦. Everything else sits in the stock so the table holds 52 cards.
    fn scenario_table() -> Table {
        let mut table = Table::new();
        table.tableau[3].append(vec![down(Suit::Club, Rank::Five), up(Suit::Heart, Rank::Queen)]);
        table.tableau[4].append(vec![up(Suit::Spade, Rank::King)]);
        table.waste.append(vec![up(Suit::Diamond, Rank::Ace)]);
        fill_stock(&mut table);
        table
    }

    /// Puts every card not yet on `table` into the stock, face down.
    fn fill_stock(table: &mut Table) {
        let placed: HashSet<CardKey> = table.all_cards().map(Card::key).collect();
        let rest: Vec<Card> = ALL_SUITS
            .iter()
            .flat_map(|&s| ALL_RANKS.iter().map(move |&r| down(s, r)))
            .filter(|c| !placed.contains(&c.key()))
            .collect();
        table.stock.append(rest);
    }

    fn won_table() -> Table {
        let mut table = Table::new();
        for (pile, &suit) in table.foundations.iter_mut().zip(ALL_SUITS.iter()) {
            pile.append(ALL_RANKS.iter().map(|&r| up(suit, r)).collect());
        }
        table
    }

    #[test]
    fn new_session_is_a_fresh_deal() {
        let session = GameSession::new(RuleConfig::default());
        assert_conserved(&session);
        assert_eq!(session.table().stock.len(), 24);
        assert!(!session.interaction().is_holding());
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn same_seed_same_deal() {
        let a = GameSession::with_seed(RuleConfig::default(), 5150);
        let b = GameSession::with_seed(RuleConfig::default(), 5150);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn lifting_the_only_face_up_card_onto_a_king() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());

        let run = session.lift_at(StackType::Tableau(3), key(Suit::Heart, Rank::Queen));
        assert_eq!(run.len(), 1);
        assert_eq!(session.interaction().origin(), Some(StackType::Tableau(3)));
        assert_conserved(&session);

        assert_eq!(session.release(&[StackType::Tableau(4)]), DropOutcome::Placed(StackType::Tableau(4)));
        assert!(!session.interaction().is_holding());

        let column4 = &session.table().tableau[4];
        assert_eq!(column4.top().map(Card::key), Some(key(Suit::Heart, Rank::Queen)));
        assert_eq!(column4.top().and_then(|c| c.owner), Some(StackType::Tableau(4)));

        let column3 = &session.table().tableau[3];
        assert_eq!(column3.len(), 1);
        assert!(column3.top().unwrap().is_face_up, "new top of the origin is turned up");
        assert_conserved(&session);
    }

    #[test]
    fn refused_drop_returns_run_unchanged() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        let before = session.snapshot();

        session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace));
        assert!(!session.drop_at(StackType::Tableau(4)), "an Ace does not go on a King");
        assert!(session.interaction().is_holding(), "refused drop keeps the run in hand");

        assert_eq!(session.release(&[StackType::Tableau(4)]), DropOutcome::Returned(StackType::Waste));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn release_prefers_foundations() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace));
        let outcome = session.release(&[StackType::Tableau(0), StackType::Foundation(2)]);
        assert_eq!(outcome, DropOutcome::Placed(StackType::Foundation(2)));
        assert!(session.table().waste.is_empty());
        assert_eq!(session.table().foundations[2].len(), 1);
    }

    #[test]
    fn tableau_ace_to_foundation_turns_up_the_origin() {
        let mut table = Table::new();
        table.tableau[5].append(vec![down(Suit::Club, Rank::Five), up(Suit::Heart, Rank::Ace)]);
        fill_stock(&mut table);
        let mut session = GameSession::from_table(table, RuleConfig::default());
        assert_conserved(&session);

        session.lift_at(StackType::Tableau(5), key(Suit::Heart, Rank::Ace));
        assert_eq!(session.release(&[StackType::Foundation(1)]), DropOutcome::Placed(StackType::Foundation(1)));

        let column5 = &session.table().tableau[5];
        assert_eq!(column5.len(), 1);
        assert!(column5.top().unwrap().is_face_up, "foundation drops also expose the column");
        assert_eq!(session.table().foundations[1].top().map(Card::key), Some(key(Suit::Heart, Rank::Ace)));
        assert_conserved(&session);
    }

    #[test]
    fn held_run_names_its_pile_through_card_owners() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        session.lift_at(StackType::Tableau(3), key(Suit::Heart, Rank::Queen));
        assert!(session.interaction().held_run().iter().all(|c| c.owner == Some(StackType::Tableau(3))));
        assert_eq!(session.interaction().origin(), Some(StackType::Tableau(3)));

        session.return_to_origin();
        assert_eq!(session.table().tableau[3].len(), 2);
        assert_eq!(session.table().tableau[3].top().map(Card::key), Some(key(Suit::Heart, Rank::Queen)));
        assert!(!session.table().tableau[3].cards()[0].is_face_up, "returning never flips");
    }

    #[test]
    fn release_without_hold_does_nothing() {
        let mut session = GameSession::with_seed(RuleConfig::default(), 1);
        assert_eq!(session.release(&[StackType::Tableau(0)]), DropOutcome::NotHolding);
    }

    #[test]
    fn illegal_lifts_are_no_ops() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        let before = session.snapshot();

        assert!(session.lift_at(StackType::Tableau(3), key(Suit::Club, Rank::Five)).is_empty(), "face down");
        let stock_top = session.table().stock.top().unwrap().key();
        assert!(session.lift_at(StackType::Stock, stock_top).is_empty(), "stock is never lifted");
        assert!(session.lift_at(StackType::Tableau(0), key(Suit::Spade, Rank::King)).is_empty(), "not in that pile");
        assert!(session.lift_at(StackType::Tableau(9), key(Suit::Spade, Rank::King)).is_empty(), "no such pile");
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn only_one_run_in_hand() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        assert_eq!(session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace)).len(), 1);
        assert!(session.lift_at(StackType::Tableau(4), key(Suit::Spade, Rank::King)).is_empty());
        assert_eq!(session.interaction().origin(), Some(StackType::Waste));
    }

    #[test]
    fn foundation_top_can_be_taken_back() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace));
        session.release(&[StackType::Foundation(0)]);

        let run = session.lift_at(StackType::Foundation(0), key(Suit::Diamond, Rank::Ace));
        assert_eq!(run.len(), 1);
        session.return_to_origin();
        assert_eq!(session.table().foundations[0].len(), 1);
    }

    #[test]
    fn waste_lift_takes_only_the_top() {
        let mut table = Table::new();
        table.waste.append(vec![up(Suit::Diamond, Rank::Ace), up(Suit::Club, Rank::Two)]);
        let mut session = GameSession::from_table(table, RuleConfig::default());

        assert!(session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace)).is_empty());
        assert_eq!(session.lift_at(StackType::Waste, key(Suit::Club, Rank::Two)).len(), 1);
        assert_eq!(session.table().waste.len(), 1);
    }

    #[test]
    fn stock_clicks_draw_then_recycle() {
        let mut session = GameSession::with_seed(RuleConfig::default(), 11);
        let before: Vec<CardKey> = session.table().stock.cards().iter().map(Card::key).collect();

        for _ in 0..24 {
            assert_eq!(session.click_stock(), DrawOutcome::Drew(1));
        }
        assert!(session.table().stock.is_empty());
        assert_eq!(session.table().waste.len(), 24);
        assert!(session.table().waste.cards().iter().all(|c| c.is_face_up));

        assert_eq!(session.click_stock(), DrawOutcome::Recycled(24));
        let after: Vec<CardKey> = session.table().stock.cards().iter().map(Card::key).collect();
        assert_eq!(after, before);
        assert!(session.table().stock.cards().iter().all(|c| !c.is_face_up));
        assert_eq!(session.recycles_used(), 1);
        assert_conserved(&session);
    }

    #[test]
    fn draw_three_turns_three() {
        let mut session = GameSession::with_seed(RuleConfig::draw_three(), 11);
        assert_eq!(session.draw_from_stock(), DrawOutcome::Drew(3));
        assert_eq!(session.table().waste.len(), 3);
        assert_eq!(session.table().stock.len(), 21);
    }

    #[test]
    fn draw_on_empty_stock_does_not_recycle() {
        let mut session = GameSession::with_seed(RuleConfig::default(), 4);
        while session.draw_from_stock() != DrawOutcome::NoCardsAvailable {}
        assert!(session.table().stock.is_empty());
        assert_eq!(session.table().waste.len(), 24);
    }

    #[test]
    fn redeal_limit_exhausts_the_stock() {
        let config = RuleConfig { draw_count: 3, redeal_limit: Some(1) };
        let mut session = GameSession::with_seed(config, 8);

        while !session.table().stock.is_empty() {
            session.click_stock();
        }
        assert_eq!(session.click_stock(), DrawOutcome::Recycled(24));
        while !session.table().stock.is_empty() {
            session.click_stock();
        }
        assert_eq!(session.click_stock(), DrawOutcome::NoCardsAvailable);
        assert!(!session.recycle_waste_to_stock());
        assert!(session.table().stock.is_empty());
        assert_eq!(session.table().waste.len(), 24);
    }

    #[test]
    fn recycle_needs_an_empty_stock() {
        let mut session = GameSession::with_seed(RuleConfig::default(), 8);
        session.draw_from_stock();
        assert!(!session.recycle_waste_to_stock());
        assert_eq!(session.recycles_used(), 0);
    }

    #[test]
    fn win_is_all_fifty_two_on_foundations() {
        let session = GameSession::from_table(won_table(), RuleConfig::default());
        assert!(session.has_won());
        assert_eq!(session.status(), GameStatus::Won);

        let mut table = won_table();
        let king = table.foundations[0].pop().unwrap();
        table.waste.append(vec![king]);
        let session = GameSession::from_table(table, RuleConfig::default());
        assert!(!session.has_won());
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn snapshot_serializes() {
        let mut session = GameSession::from_table(scenario_table(), RuleConfig::default());
        session.lift_at(StackType::Waste, key(Suit::Diamond, Rank::Ace));
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["tableau"].as_array().map(Vec::len), Some(7));
        assert_eq!(json["foundations"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["held"][0]["rank"], "Ace");
        assert_eq!(json["held_origin"], "Waste");
        assert_eq!(json["status"], "Playing");
        assert!(json["held"][0].get("owner").is_none());
    }

    #[test]
    fn random_play_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut session = GameSession::with_seed(RuleConfig::draw_three(), 99);
        let piles: Vec<StackType> = session.table().piles().map(Pile::id).collect();

        for _ in 0..2_000 {
            match rng.gen_range(0..3) {
                0 => {
                    session.click_stock();
                }
                _ => {
                    let from = piles[rng.gen_range(0..piles.len())];
                    let picked = session
                        .table()
                        .pile(from)
                        .filter(|p| !p.is_empty())
                        .map(|p| p.cards()[rng.gen_range(0..p.len())].key());
                    if let Some(card) = picked {
                        session.lift_at(from, card);
                    }
                    let to = piles[rng.gen_range(0..piles.len())];
                    session.release(&[to]);
                }
            }
            assert_conserved(&session);
            assert!(!session.interaction().is_holding());
            assert!(session.table().stock.cards().iter().all(|c| !c.is_face_up));
            assert!(session.table().waste.cards().iter().all(|c| c.is_face_up));
            for pile in session.table().piles() {
                assert!(pile.cards().iter().all(|c| c.owner == Some(pile.id())));
            }
        }
    }
}
