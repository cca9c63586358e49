//! Orders and the cart they form.
//!
//! # Store Layout
//! Orders live under `orders/<id>` as
//! `{"name": "...", "drinks": ["아메리카노 (ICE)"], "timestamp": 1712345678901}`.
//! The id is the map key, so it is skipped during (de)serialization and filled
//! in by [`Cart::from_snapshot`].

use crate::framework::{StoreError, StorePath};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Store-assigned identifier for Orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One customer's submitted drinks in the shared cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip)]
    pub id: OrderId,
    #[serde(rename = "name")]
    pub customer_name: String,
    /// Rendered drink descriptors in submission order.
    pub drinks: Vec<String>,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn drink_count(&self) -> usize {
        self.drinks.len()
    }
}

/// Order count and drink count over a set of orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub order_count: usize,
    pub total_drinks: usize,
}

/// The current set of active orders, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    orders: BTreeMap<OrderId, Order>,
}

impl Cart {
    /// Decodes the value stored at `orders`. An absent value is an empty cart.
    pub fn from_snapshot(path: &StorePath, snapshot: Option<Value>) -> Result<Self, StoreError> {
        let Some(value) = snapshot else {
            return Ok(Self::default());
        };
        let entries: BTreeMap<String, Order> =
            serde_json::from_value(value).map_err(|e| StoreError::decode(path.to_string(), e))?;

        let orders = entries
            .into_iter()
            .map(|(key, mut order)| {
                let id = OrderId(key);
                order.id = id.clone();
                (id, order)
            })
            .collect();
        Ok(Self { orders })
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        crate::cart::aggregate(self.orders())
    }
}
