//! Menu catalog, the ice-only rule and list ordering.

pub mod catalog;
pub mod ordering;

pub use catalog::{catalog, find};
pub use ordering::{arrange, locale_cmp, MenuQuery};

use crate::model::{Category, MenuItem};

const ICE_ONLY_CATEGORIES: [Category; 2] = [Category::AdeJuice, Category::SmoothieFrappe];

const ICE_ONLY_KEYWORDS: [&str; 6] = ["아이스티", "주스", "에이드", "스무디", "프라페", "콜드브루"];

/// Whether an item can only be served iced.
///
/// True for every item in 에이드&주스 or 스무디&프라페, and for any item whose name
/// mentions one of the cold-only drink kinds regardless of category.
pub fn is_ice_only(item: &MenuItem) -> bool {
    ICE_ONLY_CATEGORIES.contains(&item.category)
        || ICE_ONLY_KEYWORDS.iter().any(|kw| item.name.contains(kw))
}
