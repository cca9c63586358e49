use crate::clients::{NameError, PathClient};
use crate::framework::{RealtimeStore, StoreError, StorePath};
use crate::menu::locale_cmp;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Roster written on first start when `names` is empty.
pub const DEFAULT_NAMES: [&str; 14] = [
    "김리언", "김종민", "김종완", "김주형", "백근명", "백근토", "송혜성", "심승미", "유지연",
    "정주은", "조명철", "조윤철", "조은혜", "조혜인",
];

/// Client for the customer-name roster at `names`.
///
/// The roster is stored as a plain array, so `add` and `remove` rewrite the whole
/// list. Concurrent edits from two admins can overwrite each other.
#[derive(Clone)]
pub struct NameClient {
    store: Arc<dyn RealtimeStore>,
    max_chars: usize,
    path: StorePath,
}

impl NameClient {
    pub fn new(store: Arc<dyn RealtimeStore>, max_chars: usize) -> Self {
        Self {
            store,
            max_chars,
            path: StorePath::names(),
        }
    }

    /// Writes [`DEFAULT_NAMES`] when the roster is empty. Returns whether it wrote.
    #[instrument(skip(self))]
    pub async fn seed_defaults(&self) -> Result<bool, NameError> {
        if !self.stored().await?.is_empty() {
            return Ok(false);
        }
        let names: Vec<String> = DEFAULT_NAMES.iter().map(|n| n.to_string()).collect();
        self.write(&names).await?;
        info!(count = names.len(), "Seeded default names");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, name: &str) -> Result<(), NameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        let len = name.chars().count();
        if len > self.max_chars {
            return Err(NameError::TooLong {
                len,
                max: self.max_chars,
            });
        }

        let mut names = self.stored().await?;
        if names.iter().any(|n| n == name) {
            warn!("Name already registered");
            return Err(NameError::Duplicate(name.to_string()));
        }
        names.push(name.to_string());
        self.write(&names).await?;
        info!("Name added");
        Ok(())
    }

    /// Removes every occurrence of `name`. Removing an unknown name succeeds.
    #[instrument(skip(self))]
    pub async fn remove(&self, name: &str) -> Result<(), NameError> {
        let mut names = self.stored().await?;
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() != before {
            self.write(&names).await?;
            info!("Name removed");
        }
        Ok(())
    }

    /// Current roster in display order.
    pub async fn list(&self) -> Result<Vec<String>, NameError> {
        self.snapshot().await
    }

    /// The roster in stored order.
    async fn stored(&self) -> Result<Vec<String>, NameError> {
        let value = self.store.get(&self.path).await?;
        Ok(decode_names(&self.path, value)?)
    }

    async fn write(&self, names: &[String]) -> Result<(), NameError> {
        let value = serde_json::to_value(names).map_err(|e| StoreError::decode(self.path.to_string(), e))?;
        self.store.set(&self.path, value).await?;
        Ok(())
    }
}

fn decode_names(path: &StorePath, value: Option<Value>) -> Result<Vec<String>, StoreError> {
    match value {
        None => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|e| StoreError::decode(path.to_string(), e)),
    }
}

#[async_trait]
impl PathClient for NameClient {
    type Snapshot = Vec<String>;
    type Error = NameError;

    fn store(&self) -> &dyn RealtimeStore {
        self.store.as_ref()
    }

    fn path(&self) -> &StorePath {
        &self.path
    }

    fn decode(path: &StorePath, value: Option<Value>) -> Result<Vec<String>, StoreError> {
        let mut names = decode_names(path, value)?;
        names.sort_by(|a, b| locale_cmp(a, b));
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStore;
    use serde_json::json;

    fn client(mock: &MockStore) -> NameClient {
        NameClient::new(Arc::new(mock.client()), 20)
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let mock = MockStore::new();
        mock.expect_get("names").return_ok(None);
        mock.expect_set("names").return_ok(());
        mock.expect_get("names").return_ok(Some(json!(["누군가"])));

        let names = client(&mock);
        assert!(names.seed_defaults().await.unwrap());
        assert!(!names.seed_defaults().await.unwrap());

        let written = mock.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].1.as_array().unwrap().len(), 14);
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_rejects_bad_names_before_reading() {
        let mock = MockStore::new();
        let names = client(&mock);

        assert_eq!(names.add("   ").await, Err(NameError::Empty));
        assert_eq!(
            names.add(&"가".repeat(21)).await,
            Err(NameError::TooLong { len: 21, max: 20 })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_appends_and_rejects_duplicates() {
        let mock = MockStore::new();
        mock.expect_get("names").return_ok(Some(json!(["조혜인"])));
        mock.expect_set("names").return_ok(());
        mock.expect_get("names").return_ok(Some(json!(["조혜인", "김리언"])));

        let names = client(&mock);
        names.add(" 김리언 ").await.unwrap();
        assert_eq!(
            names.add("김리언").await,
            Err(NameError::Duplicate("김리언".into()))
        );
        assert_eq!(mock.written()[0].1, json!(["조혜인", "김리언"]));
        mock.verify();
    }

    #[tokio::test]
    async fn test_remove_unknown_name_does_not_write() {
        let mock = MockStore::new();
        mock.expect_get("names").return_ok(Some(json!(["A"])));

        client(&mock).remove("B").await.unwrap();
        assert!(mock.written().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let mock = MockStore::new();
        mock.expect_get("names").return_ok(Some(json!(["조혜인", "bob", "Alice", "김리언"])));

        let list = client(&mock).list().await.unwrap();
        assert_eq!(list, vec!["Alice", "bob", "김리언", "조혜인"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let mock = MockStore::new();
        mock.expect_get("names").return_err(StoreError::ActorClosed);

        let result = client(&mock).add("새이름").await;
        assert_eq!(result, Err(NameError::Store(StoreError::ActorClosed)));
        mock.verify();
    }
}
