use crate::model::{CategoryFilter, Favorites, MenuItem};
use std::cmp::Ordering;

/// Name collation for menu and roster lists.
///
/// Primary comparison folds ASCII case; equal keys fall back to code point order
/// so the result is total and deterministic. Hangul syllables are already laid
/// out in dictionary order in Unicode.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()));
    folded.then_with(|| a.cmp(b))
}

/// Filters applied to the menu list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    pub filter: CategoryFilter,
    keyword: Option<String>,
}

impl MenuQuery {
    pub fn new(filter: CategoryFilter, keyword: &str) -> Self {
        Self::default().with_filter(filter).with_keyword(keyword)
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the search keyword. It is trimmed, and a blank keyword clears the search.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let trimmed = keyword.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        self.filter.admits(item)
            && self
                .keyword
                .as_deref()
                .map_or(true, |keyword| item.name.contains(keyword))
    }
}

/// Filters `items` by `query` and orders them for display: favorites first, then
/// the rest, each group by [`locale_cmp`]. The sort is stable, so duplicate names
/// keep catalog order.
pub fn arrange<'a>(items: &'a [MenuItem], favorites: &Favorites, query: &MenuQuery) -> Vec<&'a MenuItem> {
    let mut shown: Vec<&MenuItem> = items.iter().filter(|item| query.matches(item)).collect();
    shown.sort_by(|a, b| {
        let a_fav = favorites.contains(&a.name);
        let b_fav = favorites.contains(&b.name);
        b_fav.cmp(&a_fav).then_with(|| locale_cmp(&a.name, &b.name))
    });
    shown
}
