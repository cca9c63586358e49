//! # RealtimeStore Trait
//!
//! The contract every store backend satisfies. Domain clients only see
//! `Arc<dyn RealtimeStore>`, so the in-process [`StoreClient`](crate::framework::StoreClient)
//! can be replaced by a remote backend without touching cart logic.
//!
//! # Consistency
//! Each call is atomic on its own. Nothing here spans two calls: a `get` followed
//! by a `set` from one client can interleave with writes from another client.

use crate::framework::{StoreError, StorePath};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

#[async_trait]
pub trait RealtimeStore: Send + Sync {
    /// One-shot snapshot of the value at `path` (`None` when absent).
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, StoreError>;

    /// Replaces the value at `path`. Writing `null` deletes it.
    async fn set(&self, path: &StorePath, value: Value) -> Result<(), StoreError>;

    /// Appends `value` under a freshly generated key and returns that key.
    async fn push(&self, path: &StorePath, value: Value) -> Result<String, StoreError>;

    /// Deletes the value at `path`. Removing a missing path succeeds.
    async fn remove(&self, path: &StorePath) -> Result<(), StoreError>;

    /// Opens a snapshot stream for `path`.
    async fn subscribe(&self, path: &StorePath) -> Result<Subscription, StoreError>;
}

/// Full-snapshot stream for one store path.
///
/// The first [`next`](Subscription::next) resolves immediately with the current
/// value. Later calls wait for a change. Rapid successive writes may be coalesced
/// into the latest snapshot; consumers replace their state on each delivery.
/// Dropping the handle releases the subscription.
#[derive(Debug)]
pub struct Subscription {
    path: StorePath,
    receiver: watch::Receiver<Option<Value>>,
    delivered_initial: bool,
}

impl Subscription {
    pub fn new(path: StorePath, receiver: watch::Receiver<Option<Value>>) -> Self {
        Self {
            path,
            receiver,
            delivered_initial: false,
        }
    }

    pub fn path(&self) -> &StorePath {
        &self.path
    }

    /// Latest known value without waiting.
    pub fn current(&self) -> Option<Value> {
        self.receiver.borrow().clone()
    }

    /// Next snapshot, or `None` once the store has shut down.
    pub async fn next(&mut self) -> Option<Option<Value>> {
        if !self.delivered_initial {
            self.delivered_initial = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

/// A [`Subscription`] whose snapshots are decoded into a domain type.
pub struct Watch<T> {
    inner: Subscription,
    decode: fn(&StorePath, Option<Value>) -> Result<T, StoreError>,
}

impl<T> Watch<T> {
    pub fn new(
        inner: Subscription,
        decode: fn(&StorePath, Option<Value>) -> Result<T, StoreError>,
    ) -> Self {
        Self { inner, decode }
    }

    pub async fn next(&mut self) -> Option<Result<T, StoreError>> {
        let snapshot = self.inner.next().await?;
        Some((self.decode)(self.inner.path(), snapshot))
    }
}
