// src/config/rules.rs
//! Rule knobs that vary between Klondike house rules.

use serde::{Deserialize, Serialize};

pub const MAX_DRAW_COUNT: usize = 3;

/// How many cards a stock click turns over, and how many times the waste may
/// be recycled back into the stock (`None` = unlimited).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub draw_count: usize,
    pub redeal_limit: Option<u32>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { draw_count: 1, redeal_limit: None }
    }
}

impl RuleConfig {
    /// Draw-three with unlimited recycles.
    pub fn draw_three() -> Self {
        Self { draw_count: 3, ..Self::default() }
    }

    /// Parses a JSON object such as `{"draw_count":3,"redeal_limit":10}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: RuleConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Clamps `draw_count` into `1..=MAX_DRAW_COUNT`.
    pub fn normalized(self) -> Self {
        Self { draw_count: self.draw_count.clamp(1, MAX_DRAW_COUNT), ..self }
    }

    /// Whether another recycle is allowed after `recycles_used` of them.
    pub fn allows_recycle(&self, recycles_used: u32) -> bool {
        self.redeal_limit.map_or(true, |limit| recycles_used < limit)
    }
}
