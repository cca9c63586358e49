use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Menu names flagged for prioritized display, shared by everyone.
///
/// Stored at `favorites` as a JSON array of strings. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<String>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.0.remove(name)
    }

    /// Flips membership and returns whether `name` is now a favorite.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(name.to_string())
        }
    }

    /// Applies a checkbox state from the favorites editor.
    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if checked {
            self.0.insert(name.to_string());
        } else {
            self.0.remove(name);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_semantics() {
        let mut favorites: Favorites = ["B", "A", "B"].into_iter().collect();
        assert_eq!(favorites.len(), 2);

        favorites.set_checked("C", true);
        favorites.set_checked("A", false);
        assert!(favorites.contains("C"));
        assert!(!favorites.contains("A"));
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["B", "C"]);

        assert!(!favorites.toggle("B"));
        assert!(favorites.toggle("A"));
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let favorites: Favorites = ["메가초코", "녹차"].into_iter().collect();
        let value = serde_json::to_value(&favorites).unwrap();
        assert_eq!(value, json!(["녹차", "메가초코"]));

        let back: Favorites = serde_json::from_value(json!(["x", "x", "y"])).unwrap();
        assert_eq!(back.len(), 2);
    }
}
