// src/config/layout.rs
//! Screen geometry: canvas size, card footprint and where each pile sits.

pub const SCREEN_WIDTH: f32 = 1100.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

// Source art is 58x97, scaled to a 110px tall card.
pub const CARD_SOURCE_WIDTH: f32 = 58.0;
pub const CARD_SOURCE_HEIGHT: f32 = 97.0;
pub const CARD_HEIGHT: f32 = 110.0;
pub const CARD_WIDTH: f32 = 66.0; // round(CARD_HEIGHT * 58 / 97)
pub const CARD_CORNER_RADIUS: f64 = 10.0;

/// Vertical offset between cascaded tableau cards.
pub const CARD_SPACING_Y: f32 = 28.0;
pub const PADDING: f32 = 16.0;

pub const TABLEAU_START_X: f32 = 100.0;
pub const TABLEAU_START_Y: f32 = 200.0;
pub const TABLEAU_X_OFFSET: f32 = 140.0;

pub const STOCK_POS_X: f32 = PADDING;
pub const STOCK_POS_Y: f32 = PADDING;

pub const WASTE_POS_X: f32 = PADDING + CARD_WIDTH + 20.0;
pub const WASTE_POS_Y: f32 = PADDING;
/// Horizontal offset between the fanned top cards of the waste.
pub const WASTE_FAN_X: f32 = 16.0;

pub const FOUNDATION_X_OFFSET: f32 = CARD_WIDTH + 20.0;
pub const FOUNDATION_START_X: f32 = SCREEN_WIDTH - 4.0 * FOUNDATION_X_OFFSET - PADDING;
pub const FOUNDATION_START_Y: f32 = PADDING;

// Background "breathing" gradient.
pub const BACKGROUND_COLOR_A: (u8, u8, u8) = (12, 110, 38);
pub const BACKGROUND_COLOR_B: (u8, u8, u8) = (4, 60, 20);
pub const BACKGROUND_BREATH_RATE: f64 = 0.00025;
