// src/components/mod.rs

pub mod card;
pub mod game_state;
pub mod interaction;
pub mod pile;
pub mod position;
pub mod table;

pub use card::{Card, CardColor, CardKey, Rank, Suit};
pub use game_state::{DrawOutcome, DropOutcome, GameStatus};
pub use interaction::Interaction;
pub use pile::{Pile, PileKind, StackType};
pub use position::{Position, Rect};
pub use table::Table;
