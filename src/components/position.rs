// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};

/// A point in canvas pixels, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This point moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned rectangle used for card and slot hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// The footprint of one card whose top-left corner is `pos`.
    pub fn card_at(pos: Position) -> Self {
        Self { x: pos.x, y: pos.y, width: CARD_WIDTH, height: CARD_HEIGHT }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Half-open on the right and bottom edges, like a pixel grid.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
