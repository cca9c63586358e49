//! # Store Client
//!
//! This module defines the channel-backed client for the [`StoreActor`](crate::framework::StoreActor).

use crate::framework::{RealtimeStore, StoreError, StorePath, StoreRequest, Subscription};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// Forwards store operations over a Tokio mpsc channel and waits for the answer on a
/// oneshot channel. The client is cheap to clone and can be shared across tasks;
/// the actor stops once every clone has been dropped.
#[derive(Clone, Debug)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[async_trait]
impl RealtimeStore for StoreClient {
    async fn get(&self, path: &StorePath) -> Result<Option<Value>, StoreError> {
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Get { path, respond_to })
            .await
    }

    async fn set(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Set {
            path,
            value,
            respond_to,
        })
        .await
    }

    async fn push(&self, path: &StorePath, value: Value) -> Result<String, StoreError> {
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Push {
            path,
            value,
            respond_to,
        })
        .await
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Remove { path, respond_to })
            .await
    }

    async fn subscribe(&self, path: &StorePath) -> Result<Subscription, StoreError> {
        let owned = path.clone();
        let receiver = self
            .request(|respond_to| StoreRequest::Subscribe {
                path: owned,
                respond_to,
            })
            .await?;
        Ok(Subscription::new(path.clone(), receiver))
    }
}
