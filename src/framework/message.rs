//! # Store Messages
//!
//! This module defines the request type sent from a `StoreClient` to the `StoreActor`.

use crate::framework::{StoreError, StorePath};
use serde_json::Value;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// The variants mirror the realtime database primitives: one-shot reads,
/// whole-value writes, keyed appends, removals and long-lived subscriptions.
/// Every write answers only after the tree is updated and watchers are notified.
#[derive(Debug)]
pub enum StoreRequest {
    Get {
        path: StorePath,
        respond_to: Response<Option<Value>>,
    },
    Set {
        path: StorePath,
        value: Value,
        respond_to: Response<()>,
    },
    Push {
        path: StorePath,
        value: Value,
        respond_to: Response<String>,
    },
    Remove {
        path: StorePath,
        respond_to: Response<()>,
    },
    Subscribe {
        path: StorePath,
        respond_to: Response<watch::Receiver<Option<Value>>>,
    },
}
