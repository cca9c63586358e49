//! Realtime store framework.
//!
//! This module provides the store abstraction every domain client talks to, plus an
//! in-process implementation built as a Tokio actor.
//!
//! # Main Components
//!
//! - [`RealtimeStore`] - The get/set/push/remove/subscribe contract
//! - [`StoreActor`] - Actor that owns the JSON tree and its watchers
//! - [`StoreClient`] - Cloneable channel-backed handle implementing [`RealtimeStore`]
//! - [`StorePath`] - Validated slash-separated location
//! - [`IdGenerator`] - Key generation for `push` and new orders
//! - [`StoreError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for a scripted store that answers from expectations.

pub mod actor;
pub mod client;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod path;
pub mod store;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use ids::{IdGenerator, PushIds, SequentialIds};
pub use message::{Response, StoreRequest};
pub use path::StorePath;
pub use store::{RealtimeStore, Subscription, Watch};
