use crate::framework::{RealtimeStore, StoreError, StorePath, Watch};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for clients that own one store path and read it as a domain snapshot.
///
/// Implementors supply the store, the path and a decoder; `snapshot` and `watch`
/// come for free.
#[async_trait]
pub trait PathClient: Send + Sync {
    /// The decoded value at [`path`](PathClient::path).
    type Snapshot: Send + 'static;

    /// The client-specific error type.
    type Error: From<StoreError> + Send;

    fn store(&self) -> &dyn RealtimeStore;

    fn path(&self) -> &StorePath;

    /// Turns a raw snapshot into the domain value. An absent value decodes to
    /// the empty domain value.
    fn decode(path: &StorePath, value: Option<Value>) -> Result<Self::Snapshot, StoreError>;

    /// Read the current value once.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Self::Snapshot, Self::Error> {
        tracing::debug!(path = %self.path(), "Sending request");
        let value = self.store().get(self.path()).await?;
        Ok(Self::decode(self.path(), value)?)
    }

    /// Open a stream of decoded snapshots, starting with the current one.
    #[tracing::instrument(skip(self))]
    async fn watch(&self) -> Result<Watch<Self::Snapshot>, Self::Error> {
        tracing::debug!(path = %self.path(), "Subscribing");
        let subscription = self.store().subscribe(self.path()).await?;
        Ok(Watch::new(subscription, Self::decode))
    }
}
