// src/app/assets.rs
//! Card art: one image per (suit, rank) plus a card back, fetched once at
//! startup. When anything is missing the renderer draws cards itself.

use std::collections::HashMap;

use futures::future::join_all;
use log::{info, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::components::card::{CardKey, Rank, Suit, ALL_RANKS, ALL_SUITS};

pub const CARD_BACK_CANDIDATES: [&str; 3] = ["back.png", "card_back.png", "backside.png"];

/// Loaded card images. Built once and handed to the renderer; the rules never
/// look at it.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    faces: HashMap<CardKey, HtmlImageElement>,
    back: Option<HtmlImageElement>,
}

impl AssetRegistry {
    pub fn face(&self, key: CardKey) -> Option<&HtmlImageElement> {
        self.faces.get(&key)
    }

    pub fn back(&self) -> Option<&HtmlImageElement> {
        self.back.as_ref()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// File-name spellings tried for a rank. Art packs disagree on these.
pub fn rank_candidates(rank: Rank) -> Vec<&'static str> {
    match rank {
        Rank::Ace => vec!["A", "a", "ace", "1"],
        Rank::Jack => vec!["J", "j", "jack", "11"],
        Rank::Queen => vec!["Q", "q", "queen", "12"],
        Rank::King => vec!["K", "k", "king", "13"],
        other => vec![other.label()],
    }
}

fn join_url(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        url.push('/');
        url.push_str(part);
    }
    url
}

/// Every URL that might hold the face of `suit`/`rank` under `base_url`,
/// in lookup order: inside a per-suit directory first, then flat.
pub fn candidate_paths(base_url: &str, suit: Suit, rank: Rank) -> Vec<String> {
    let suit_name = suit.asset_name();
    let names: Vec<String> = rank_candidates(rank)
        .into_iter()
        .flat_map(|r| {
            [
                format!("{}_of_{}.png", r, suit_name),
                format!("{}of{}.png", r, suit_name),
                format!("{}.png", r),
            ]
        })
        .collect();
    let nested = names.iter().map(|name| join_url(base_url, &[suit_name, name.as_str()]));
    let flat = names.iter().map(|name| join_url(base_url, &[name.as_str()]));
    nested.chain(flat).collect()
}

pub fn back_candidate_paths(base_url: &str) -> Vec<String> {
    CARD_BACK_CANDIDATES.iter().map(|name| join_url(base_url, &[*name])).collect()
}

async fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(url);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

/// The first of `urls` that loads.
async fn load_first(urls: &[String]) -> Option<HtmlImageElement> {
    for url in urls {
        if let Ok(image) = load_image(url).await {
            return Some(image);
        }
    }
    None
}

/// Loads all 52 faces and, if present, a back from `base_url`.
///
/// A missing face is an error: a half-drawn deck is worse than the fallback.
/// A missing back only means backs are drawn procedurally.
pub async fn load_card_images(base_url: &str) -> Result<AssetRegistry, JsValue> {
    let keys: Vec<CardKey> = ALL_SUITS
        .iter()
        .flat_map(|&suit| ALL_RANKS.iter().map(move |&rank| CardKey { suit, rank }))
        .collect();

    let loads = keys.iter().map(|key| async move {
        let image = load_first(&candidate_paths(base_url, key.suit, key.rank)).await;
        (*key, image)
    });

    let mut faces = HashMap::with_capacity(keys.len());
    for (key, image) in join_all(loads).await {
        match image {
            Some(image) => {
                faces.insert(key, image);
            }
            None => {
                return Err(JsValue::from_str(&format!(
                    "Missing image for {} of {} in '{}'",
                    key.rank.label(),
                    key.suit.asset_name(),
                    base_url
                )));
            }
        }
    }

    let back = load_first(&back_candidate_paths(base_url)).await;
    if back.is_none() {
        warn!("No card back found in '{}', drawing backs procedurally", base_url);
    }
    let registry = AssetRegistry { faces, back };
    info!("Loaded {} card faces from '{}'", registry.face_count(), base_url);
    Ok(registry)
}
