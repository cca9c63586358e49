//! # Store Actor
//!
//! This module defines the `StoreActor`, the in-process realtime database. It owns a
//! JSON tree and the watchers subscribed to parts of it, and processes requests
//! sequentially so every single operation is atomic.

use crate::framework::{IdGenerator, StoreClient, StorePath, StoreRequest};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that owns the store tree.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state (`root`) and
/// the receiver end of the channel. Clients only ever hold the sender.
///
/// **Concurrency Model**:
/// Requests are handled one at a time in [`run`](StoreActor::run), so the tree needs
/// no `Mutex`. Watchers are `tokio::sync::watch` senders keyed by the subscribed
/// path; after each write every watcher on an overlapping path gets a fresh snapshot
/// if its value actually changed.
///
/// # Tree Semantics
/// - Writing `null` (or an empty object/array) deletes the value.
/// - Parents left empty by a delete are pruned.
/// - Writing below a non-object replaces it with an object; arrays keep their
///   elements under index keys.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    root: Value,
    watchers: HashMap<StorePath, watch::Sender<Option<Value>>>,
    ids: Arc<dyn IdGenerator>,
}

impl StoreActor {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `ids` - Key generator used by `push`.
    pub fn new(buffer_size: usize, ids: impl IdGenerator) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            root: Value::Null,
            watchers: HashMap::new(),
            ids: Arc::new(ids),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        info!("Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { path, respond_to } => {
                    let value = self.read(&path);
                    debug!(%path, found = value.is_some(), "Get");
                    let _ = respond_to.send(Ok(value));
                }
                StoreRequest::Set {
                    path,
                    value,
                    respond_to,
                } => {
                    debug!(%path, ?value, "Set");
                    self.write(&path, value);
                    info!(%path, watchers = self.watchers.len(), "Set");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Push {
                    path,
                    value,
                    respond_to,
                } => {
                    let id = self.ids.next_id();
                    match path.child(&id) {
                        Ok(child) => {
                            self.write(&child, value);
                            info!(%path, %id, "Pushed");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(%path, %id, error = %e, "Push failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StoreRequest::Remove { path, respond_to } => {
                    let existed = self.read(&path).is_some();
                    self.write(&path, Value::Null);
                    info!(%path, existed, "Removed");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Subscribe { path, respond_to } => {
                    let current = self.read(&path);
                    let receiver = self
                        .watchers
                        .entry(path.clone())
                        .or_insert_with(|| watch::channel(current).0)
                        .subscribe();
                    debug!(%path, watchers = self.watchers.len(), "Subscribed");
                    let _ = respond_to.send(Ok(receiver));
                }
            }
        }

        info!(watchers = self.watchers.len(), "Shutdown");
    }

    fn read(&self, path: &StorePath) -> Option<Value> {
        lookup(&self.root, path).cloned()
    }

    fn write(&mut self, path: &StorePath, value: Value) {
        let root = std::mem::take(&mut self.root);
        self.root = with_child(root, path.segments(), value);
        self.notify(path);
    }

    fn notify(&mut self, changed: &StorePath) {
        self.watchers.retain(|_, sender| sender.receiver_count() > 0);
        for (path, sender) in &self.watchers {
            if !path.overlaps(changed) {
                continue;
            }
            let latest = lookup(&self.root, path).cloned();
            sender.send_if_modified(|current| {
                if *current == latest {
                    false
                } else {
                    *current = latest;
                    true
                }
            });
        }
    }
}

fn lookup<'a>(root: &'a Value, path: &StorePath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .filter(|value| !value.is_null())
}

/// Returns `node` with `value` placed at `segments`, pruning emptied parents.
fn with_child(node: Value, segments: &[String], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return prune(value);
    };
    let mut map = into_object(node);
    let child = map.remove(head).unwrap_or(Value::Null);
    let updated = with_child(child, rest, value);
    if !updated.is_null() {
        map.insert(head.clone(), updated);
    }
    if map.is_empty() {
        Value::Null
    } else {
        Value::Object(map)
    }
}

fn into_object(node: Value) -> Map<String, Value> {
    match node {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, v)| !v.is_null())
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Map::new(),
    }
}

fn prune(value: Value) -> Value {
    match &value {
        Value::Object(map) if map.is_empty() => Value::Null,
        Value::Array(items) if items.is_empty() => Value::Null,
        _ => value,
    }
}
