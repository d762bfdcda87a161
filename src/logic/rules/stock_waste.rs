//! Stock and waste: turning cards over and recycling the waste.

use crate::components::pile::Pile;

/// A draw needs at least one card left in the stock.
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// Recycling only happens once the stock has run dry and the waste has cards.
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// Turns up to `count` cards from the stock top onto the waste, one at a
/// time, face up. The last card turned becomes the waste top.
/// Returns how many cards moved.
pub fn draw_to_waste(stock: &mut Pile, waste: &mut Pile, count: usize) -> usize {
    let n = count.min(stock.len());
    for _ in 0..n {
        if let Some(mut card) = stock.pop() {
            card.flip_up();
            waste.append(vec![card]);
        }
    }
    n
}

/// Puts the whole waste back into the stock face down, in reverse, so the
/// next draws repeat the previous pass. Returns how many cards moved.
pub fn recycle_waste_to_stock(stock: &mut Pile, waste: &mut Pile) -> usize {
    let mut cards = waste.take_all();
    cards.reverse();
    for card in cards.iter_mut() {
        card.flip_down();
    }
    let n = cards.len();
    stock.append(cards);
    n
}
