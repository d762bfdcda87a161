// src/app/renderer.rs
//! Draws one frame of the table onto the canvas.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::app::assets::AssetRegistry;
use crate::app::drag_handler::DragController;
use crate::app::layout_calculator::{calculate_card_position, fanned_waste_range, slot_rect};
use crate::components::card::{Card, CardColor};
use crate::components::pile::Pile;
use crate::components::position::Position;
use crate::config::layout::{
    BACKGROUND_BREATH_RATE, BACKGROUND_COLOR_A, BACKGROUND_COLOR_B, CARD_CORNER_RADIUS, CARD_HEIGHT,
    CARD_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::session::GameSession;

pub type Rgb = (u8, u8, u8);

const FACE_FILL: &str = "rgb(245, 245, 245)";
const FACE_BORDER: &str = "rgb(0, 0, 0)";
const BACK_FILL: &str = "rgb(60, 60, 90)";
const BACK_BORDER: &str = "rgb(230, 230, 255)";
const SLOT_BORDER: &str = "rgb(0, 0, 0)";
const RED_INK: &str = "rgb(200, 0, 0)";
const BLACK_INK: &str = "rgb(0, 0, 0)";
const CARD_FONT: &str = "bold 20px sans-serif";
const BANNER_FONT: &str = "bold 64px sans-serif";
const WIN_MESSAGE: &str = "You win!";

/// Linear blend of two colours, truncated per channel.
pub fn blend_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t) as u8;
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// 0 → 1 → 0 over a slow sine period.
pub fn breathing_phase(elapsed_ms: f64) -> f64 {
    ((elapsed_ms * BACKGROUND_BREATH_RATE).sin() + 1.0) / 2.0
}

pub fn css_rgb(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.0, color.1, color.2)
}

/// Top and bottom colours of the background at `elapsed_ms`.
pub fn background_colors(elapsed_ms: f64) -> (Rgb, Rgb) {
    let t = breathing_phase(elapsed_ms);
    (
        blend_color(BACKGROUND_COLOR_A, BACKGROUND_COLOR_B, t),
        blend_color(BACKGROUND_COLOR_B, BACKGROUND_COLOR_A, t),
    )
}

/// `"Q♥"`-style corner label.
pub fn card_label(card: &Card) -> String {
    format!("{}{}", card.rank.label(), card.suit.glyph())
}

pub fn render_frame(
    context: &CanvasRenderingContext2d,
    session: &GameSession,
    drag: &DragController,
    assets: Option<&AssetRegistry>,
    elapsed_ms: f64,
) -> Result<(), JsValue> {
    draw_background(context, elapsed_ms)?;

    let table = session.table();
    let draw_count = session.config().draw_count;

    for pile in std::iter::once(&table.stock)
        .chain(std::iter::once(&table.waste))
        .chain(table.foundations.iter())
        .chain(table.tableau.iter())
    {
        if pile.is_empty() {
            draw_empty_slot(context, pile)?;
        }
    }

    // Only the top of the stock is ever visible, and always as a back.
    if !table.stock.is_empty() {
        draw_card_back(context, table.stock.anchor(), assets)?;
    }

    let waste = &table.waste;
    for index in fanned_waste_range(waste.len(), draw_count) {
        draw_card(context, &waste.cards()[index], calculate_card_position(waste, index, draw_count), assets)?;
    }

    for pile in table.foundations.iter().chain(table.tableau.iter()) {
        draw_pile(context, pile, draw_count, assets)?;
    }

    let held = session.interaction().held_run();
    for (card, pos) in held.iter().zip(drag.held_positions(held.len())) {
        draw_card(context, card, pos, assets)?;
    }

    if session.has_won() {
        draw_win_banner(context)?;
    }
    Ok(())
}

fn draw_background(context: &CanvasRenderingContext2d, elapsed_ms: f64) -> Result<(), JsValue> {
    let (top, bottom) = background_colors(elapsed_ms);
    let gradient = context.create_linear_gradient(0.0, 0.0, 0.0, SCREEN_HEIGHT as f64);
    gradient.add_color_stop(0.0, &css_rgb(top))?;
    gradient.add_color_stop(1.0, &css_rgb(bottom))?;
    context.set_fill_style_canvas_gradient(&gradient);
    context.fill_rect(0.0, 0.0, SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64);
    Ok(())
}

fn draw_pile(
    context: &CanvasRenderingContext2d,
    pile: &Pile,
    draw_count: usize,
    assets: Option<&AssetRegistry>,
) -> Result<(), JsValue> {
    for (index, card) in pile.cards().iter().enumerate() {
        draw_card(context, card, calculate_card_position(pile, index, draw_count), assets)?;
    }
    Ok(())
}

fn draw_empty_slot(context: &CanvasRenderingContext2d, pile: &Pile) -> Result<(), JsValue> {
    let rect = slot_rect(pile);
    rounded_rect_path(context, rect.origin(), CARD_CORNER_RADIUS)?;
    context.set_line_width(2.0);
    context.set_stroke_style_str(SLOT_BORDER);
    context.stroke();
    Ok(())
}

fn draw_card(
    context: &CanvasRenderingContext2d,
    card: &Card,
    pos: Position,
    assets: Option<&AssetRegistry>,
) -> Result<(), JsValue> {
    if !card.is_face_up {
        return draw_card_back(context, pos, assets);
    }
    if let Some(image) = assets.and_then(|a| a.face(card.key())) {
        return context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            CARD_WIDTH as f64,
            CARD_HEIGHT as f64,
        );
    }
    draw_procedural_face(context, card, pos)
}

fn draw_card_back(
    context: &CanvasRenderingContext2d,
    pos: Position,
    assets: Option<&AssetRegistry>,
) -> Result<(), JsValue> {
    if let Some(image) = assets.and_then(AssetRegistry::back) {
        return context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            CARD_WIDTH as f64,
            CARD_HEIGHT as f64,
        );
    }
    rounded_rect_path(context, pos, CARD_CORNER_RADIUS)?;
    context.set_fill_style_str(BACK_FILL);
    context.fill();
    context.set_line_width(2.0);
    context.set_stroke_style_str(BACK_BORDER);
    context.stroke();
    Ok(())
}

fn draw_procedural_face(context: &CanvasRenderingContext2d, card: &Card, pos: Position) -> Result<(), JsValue> {
    rounded_rect_path(context, pos, CARD_CORNER_RADIUS)?;
    context.set_fill_style_str(FACE_FILL);
    context.fill();
    context.set_line_width(2.0);
    context.set_stroke_style_str(FACE_BORDER);
    context.stroke();

    let ink = match card.color() {
        CardColor::Red => RED_INK,
        CardColor::Black => BLACK_INK,
    };
    let label = card_label(card);
    let (x, y) = (pos.x as f64, pos.y as f64);
    context.set_font(CARD_FONT);
    context.set_fill_style_str(ink);

    context.set_text_align("left");
    context.set_text_baseline("top");
    context.fill_text(&label, x + 8.0, y + 6.0)?;

    context.set_text_align("right");
    context.set_text_baseline("bottom");
    context.fill_text(&label, x + CARD_WIDTH as f64 - 8.0, y + CARD_HEIGHT as f64 - 6.0)?;
    Ok(())
}

fn draw_win_banner(context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let (cx, cy) = (SCREEN_WIDTH as f64 / 2.0, SCREEN_HEIGHT as f64 / 2.0);
    rounded_rect_path_sized(context, cx - 150.0, cy - 40.0, 300.0, 80.0, 12.0)?;
    context.set_fill_style_str("rgb(0, 0, 0)");
    context.fill();

    context.set_font(BANNER_FONT);
    context.set_fill_style_str("rgb(255, 255, 255)");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(WIN_MESSAGE, cx, cy)
}

fn rounded_rect_path(context: &CanvasRenderingContext2d, pos: Position, radius: f64) -> Result<(), JsValue> {
    rounded_rect_path_sized(context, pos.x as f64, pos.y as f64, CARD_WIDTH as f64, CARD_HEIGHT as f64, radius)
}

fn rounded_rect_path_sized(
    context: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    context.begin_path();
    context.move_to(x + r, y);
    context.arc_to(x + width, y, x + width, y + height, r)?;
    context.arc_to(x + width, y + height, x, y + height, r)?;
    context.arc_to(x, y + height, x, y, r)?;
    context.arc_to(x, y, x + width, y, r)?;
    context.close_path();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn blend_endpoints_and_midpoint() {
        assert_eq!(blend_color((0, 0, 0), (200, 100, 50), 0.0), (0, 0, 0));
        assert_eq!(blend_color((0, 0, 0), (200, 100, 50), 1.0), (200, 100, 50));
        assert_eq!(blend_color((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
        assert_eq!(blend_color((12, 110, 38), (4, 60, 20), 0.5), (8, 85, 29));
    }

    #[test]
    fn breathing_stays_in_unit_range() {
        assert!((breathing_phase(0.0) - 0.5).abs() < 1e-9);
        let peak = std::f64::consts::FRAC_PI_2 / BACKGROUND_BREATH_RATE;
        assert!((breathing_phase(peak) - 1.0).abs() < 1e-9);
        for ms in (0..100_000).step_by(997) {
            let t = breathing_phase(ms as f64);
            assert!((0.0..=1.0).contains(&t));
        }
    }

    #[test]
    fn background_starts_half_way() {
        let (top, bottom) = background_colors(0.0);
        assert_eq!(top, (8, 85, 29));
        assert_eq!(top, bottom);
    }

    #[test]
    fn css_and_labels() {
        assert_eq!(css_rgb((12, 110, 38)), "rgb(12, 110, 38)");
        assert_eq!(card_label(&Card::new(Suit::Heart, Rank::Queen)), "Q♥");
        assert_eq!(card_label(&Card::new(Suit::Club, Rank::Ten)), "10♣");
    }
}
