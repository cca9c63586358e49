//! Slash-separated locations inside the store tree.

use crate::framework::StoreError;
use std::fmt::Display;

const FORBIDDEN: [char; 5] = ['.', '#', '$', '[', ']'];

/// A validated store path such as `orders` or `orders/1712345678901-ab12cd34`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let segments: Vec<String> = raw.split('/').map(str::to_string).collect();
        let valid = segments
            .iter()
            .all(|s| !s.is_empty() && !s.contains(&FORBIDDEN[..]));
        if !valid {
            return Err(StoreError::InvalidPath(raw.to_string()));
        }
        Ok(Self { segments })
    }

    /// The active orders, keyed by order id.
    pub fn orders() -> Self {
        Self::top("orders")
    }

    /// The shared customer-name roster.
    pub fn names() -> Self {
        Self::top("names")
    }

    /// The shared favorite menu names.
    pub fn favorites() -> Self {
        Self::top("favorites")
    }

    fn top(segment: &'static str) -> Self {
        Self {
            segments: vec![segment.to_string()],
        }
    }

    /// Appends a single segment, e.g. a push id below `orders`.
    pub fn child(&self, segment: &str) -> Result<Self, StoreError> {
        Self::parse(&format!("{self}/{segment}"))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when `self` is `other` or one of its ancestors.
    pub fn contains(&self, other: &StorePath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// True when one path lies on the other's branch, in either direction.
    pub fn overlaps(&self, other: &StorePath) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl Display for StorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_path() {
        let path = StorePath::parse("orders/abc").unwrap();
        assert_eq!(path.segments(), ["orders", "abc"]);
        assert_eq!(path.to_string(), "orders/abc");
    }

    #[test]
    fn test_rejects_empty_and_forbidden_segments() {
        for raw in ["", "orders/", "/orders", "a//b", "a.b", "menu#1", "x$", "a[0]"] {
            assert_eq!(
                StorePath::parse(raw),
                Err(StoreError::InvalidPath(raw.to_string())),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let orders = StorePath::parse("orders").unwrap();
        let one = orders.child("o1").unwrap();
        let names = StorePath::parse("names").unwrap();

        assert!(orders.contains(&one));
        assert!(!one.contains(&orders));
        assert!(one.overlaps(&orders));
        assert!(!names.overlaps(&one));
    }
}
