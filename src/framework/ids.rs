//! # Id Generation
//!
//! The store assigns keys for `push` and the cart assigns order keys through the
//! [`IdGenerator`] capability, so tests can swap in deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces unique keys for new children under a store path.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}

/// Push-style ids: a zero-padded millisecond timestamp followed by a random suffix.
///
/// Keys sort lexically in creation order (to the millisecond), which keeps a map of
/// orders roughly chronological when iterated by key.
#[derive(Debug, Default, Clone, Copy)]
pub struct PushIds;

impl IdGenerator for PushIds {
    fn next_id(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis().max(0);
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{millis:013}-{}", &suffix[..12])
    }
}

/// Counter-based ids (`order_1`, `order_2`, ...), used in tests and demos.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", self.prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIds::new("order");
        assert_eq!(ids.next_id(), "order_1");
        assert_eq!(ids.next_id(), "order_2");
    }

    #[test]
    fn test_push_ids_are_unique_and_path_safe() {
        let ids = PushIds;
        let generated: HashSet<String> = (0..200).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 200);
        for id in &generated {
            assert_eq!(id.len(), 26);
            assert!(crate::framework::StorePath::parse(id).is_ok());
        }
    }
}
