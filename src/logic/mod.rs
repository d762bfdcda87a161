// src/logic/mod.rs

pub mod dealer;
pub mod deck;
pub mod rules;
