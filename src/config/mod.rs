// src/config/mod.rs

pub mod layout;
pub mod rules;

pub use rules::RuleConfig;
