//! # Mock Store
//!
//! Utilities for testing clients without running a real [`StoreActor`](crate::framework::StoreActor).
//!
//! [`MockStore`] hands out an ordinary [`StoreClient`] whose requests are answered
//! from a queue of expectations, in order. Use it to script store failures that the
//! in-process store never produces.

use crate::framework::{StoreClient, StoreError, StorePath, StoreRequest};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer for it.
enum Expectation {
    Get {
        path: StorePath,
        response: Result<Option<Value>, StoreError>,
    },
    Set {
        path: StorePath,
        response: Result<(), StoreError>,
    },
    Push {
        path: StorePath,
        response: Result<String, StoreError>,
    },
    Remove {
        path: StorePath,
        response: Result<(), StoreError>,
    },
    Subscribe {
        path: StorePath,
        response: Result<Option<Value>, StoreError>,
    },
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockStore::new();
/// mock.expect_get("orders").return_ok(None);
/// mock.expect_set("orders/order_1").return_err(StoreError::ActorClosed);
///
/// let store = mock.client();
/// // Use store in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
///
/// # Panics
/// The background task panics when a request arrives that does not match the next
/// expectation (wrong operation or wrong path). The pending call then fails with
/// `StoreError::ActorDropped`, and [`verify`](MockStore::verify) reports what was left.
pub struct MockStore {
    client: StoreClient,
    expectations: Queue,
    written: Arc<Mutex<Vec<(StorePath, Value)>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let written = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let log = written.clone();

        let handle = tokio::spawn(async move {
            // Subscription channels stay alive as long as the mock task does.
            let mut feeds = Vec::new();
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { path, respond_to },
                        Some(Expectation::Get { path: want, response }),
                    ) if path == want => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Set {
                            path,
                            value,
                            respond_to,
                        },
                        Some(Expectation::Set { path: want, response }),
                    ) if path == want => {
                        if response.is_ok() {
                            log.lock().unwrap().push((path, value));
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Push {
                            path,
                            value,
                            respond_to,
                        },
                        Some(Expectation::Push { path: want, response }),
                    ) if path == want => {
                        if let Ok(id) = &response {
                            if let Ok(child) = path.child(id) {
                                log.lock().unwrap().push((child, value));
                            }
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { path, respond_to },
                        Some(Expectation::Remove { path: want, response }),
                    ) if path == want => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Subscribe { path, respond_to },
                        Some(Expectation::Subscribe { path: want, response }),
                    ) if path == want => match response {
                        Ok(initial) => {
                            let (feed, receiver) = watch::channel(initial);
                            feeds.push(feed);
                            let _ = respond_to.send(Ok(receiver));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    },
                    (request, _) => {
                        panic!("Unexpected store request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            written,
            _handle: handle,
        }
    }

    /// Returns the store client for use in tests.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    /// Expects a `get` on `path`.
    pub fn expect_get(&self, path: &str) -> ExpectationBuilder<Option<Value>> {
        self.builder(path, |path, response| Expectation::Get { path, response })
    }

    /// Expects a `set` on `path`.
    pub fn expect_set(&self, path: &str) -> ExpectationBuilder<()> {
        self.builder(path, |path, response| Expectation::Set { path, response })
    }

    /// Expects a `push` below `path`.
    pub fn expect_push(&self, path: &str) -> ExpectationBuilder<String> {
        self.builder(path, |path, response| Expectation::Push { path, response })
    }

    /// Expects a `remove` on `path`.
    pub fn expect_remove(&self, path: &str) -> ExpectationBuilder<()> {
        self.builder(path, |path, response| Expectation::Remove { path, response })
    }

    /// Expects a `subscribe` on `path`; `return_ok` sets the initial snapshot.
    pub fn expect_subscribe(&self, path: &str) -> ExpectationBuilder<Option<Value>> {
        self.builder(path, |path, response| Expectation::Subscribe { path, response })
    }

    /// Values accepted by successful `set`/`push` expectations, in arrival order.
    pub fn written(&self) -> Vec<(StorePath, Value)> {
        self.written.lock().unwrap().clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<T>(
        &self,
        path: &str,
        make: fn(StorePath, Result<T, StoreError>) -> Expectation,
    ) -> ExpectationBuilder<T> {
        let path = StorePath::parse(path)
            .unwrap_or_else(|e| panic!("mock expectation with bad path: {e}"));
        ExpectationBuilder {
            path,
            make,
            expectations: self.expectations.clone(),
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues one expectation with its response.
pub struct ExpectationBuilder<T> {
    path: StorePath,
    make: fn(StorePath, Result<T, StoreError>) -> Expectation,
    expectations: Queue,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        let expectation = (self.make)(self.path, Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let expectation = (self.make)(self.path, Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
