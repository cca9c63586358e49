use crate::clients::{FavoritesError, PathClient};
use crate::framework::{RealtimeStore, StoreError, StorePath};
use crate::model::Favorites;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Client for the shared favorites at `favorites`.
#[derive(Clone)]
pub struct FavoritesClient {
    store: Arc<dyn RealtimeStore>,
    load_timeout: Duration,
    path: StorePath,
}

impl FavoritesClient {
    pub fn new(store: Arc<dyn RealtimeStore>, load_timeout: Duration) -> Self {
        Self {
            store,
            load_timeout,
            path: StorePath::favorites(),
        }
    }

    /// Reads the favorites for the editor. A slow or failing store yields an empty
    /// set so the page stays usable.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Favorites {
        match tokio::time::timeout(self.load_timeout, self.snapshot()).await {
            Ok(Ok(favorites)) => favorites,
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to load favorites, starting empty");
                Favorites::new()
            }
            Err(_) => {
                warn!(timeout_ms = self.load_timeout.as_millis() as u64, "Timed out loading favorites, starting empty");
                Favorites::new()
            }
        }
    }

    #[instrument(skip(self, favorites), fields(count = favorites.len()))]
    pub async fn save(&self, favorites: &Favorites) -> Result<(), FavoritesError> {
        let value =
            serde_json::to_value(favorites).map_err(|e| StoreError::decode(self.path.to_string(), e))?;
        self.store.set(&self.path, value).await?;
        info!("Favorites saved");
        Ok(())
    }
}

#[async_trait]
impl PathClient for FavoritesClient {
    type Snapshot = Favorites;
    type Error = FavoritesError;

    fn store(&self) -> &dyn RealtimeStore {
        self.store.as_ref()
    }

    fn path(&self) -> &StorePath {
        &self.path
    }

    fn decode(path: &StorePath, value: Option<Value>) -> Result<Favorites, StoreError> {
        match value {
            None => Ok(Favorites::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| StoreError::decode(path.to_string(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStore;
    use crate::framework::{StoreClient, StoreRequest};
    use serde_json::json;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_load_and_save() {
        let mock = MockStore::new();
        mock.expect_get("favorites").return_ok(Some(json!(["메가초코"])));
        mock.expect_set("favorites").return_ok(());

        let client = FavoritesClient::new(Arc::new(mock.client()), Duration::from_secs(3));
        let mut favorites = client.load().await;
        assert!(favorites.contains("메가초코"));

        favorites.set_checked("녹차", true);
        client.save(&favorites).await.unwrap();
        assert_eq!(mock.written()[0].1, json!(["녹차", "메가초코"]));
        mock.verify();
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_empty() {
        let mock = MockStore::new();
        mock.expect_get("favorites").return_err(StoreError::Rejected {
            path: "favorites".into(),
            reason: "offline".into(),
        });

        let client = FavoritesClient::new(Arc::new(mock.client()), Duration::from_secs(3));
        assert!(client.load().await.is_empty());
        mock.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_timeout_falls_back_to_empty() {
        // Nobody answers requests sent on this channel.
        let (sender, _receiver) = mpsc::channel::<StoreRequest>(4);
        let client = FavoritesClient::new(Arc::new(StoreClient::new(sender)), Duration::from_secs(3));

        assert!(client.load().await.is_empty());
    }
}
