// src/logic/rules/mod.rs
//! Klondike rules, one module per pile family.

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
