use crate::cart::{check_capacity, validate_selection, CartError, CartLimits};
use crate::clients::PathClient;
use crate::framework::{IdGenerator, RealtimeStore, StoreError, StorePath};
use crate::model::{Cart, CartSummary, DrinkSelection, Order, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Client for the shared cart at `orders`.
///
/// # Consistency
/// [`submit_order`](CartClient::submit_order) checks capacity against a snapshot
/// and writes afterwards in a separate call. Two customers submitting at the same
/// moment can both pass the check and together exceed the capacity.
#[derive(Clone)]
pub struct CartClient {
    store: Arc<dyn RealtimeStore>,
    ids: Arc<dyn IdGenerator>,
    limits: CartLimits,
    path: StorePath,
}

impl CartClient {
    pub fn new(store: Arc<dyn RealtimeStore>, ids: Arc<dyn IdGenerator>, limits: CartLimits) -> Self {
        Self {
            store,
            ids,
            limits,
            path: StorePath::orders(),
        }
    }

    pub fn limits(&self) -> &CartLimits {
        &self.limits
    }

    /// Validates a draft, checks the cart has room and writes a new order.
    #[instrument(skip(self, selections), fields(drinks = selections.len()))]
    pub async fn submit_order(
        &self,
        customer_name: &str,
        selections: &[DrinkSelection],
    ) -> Result<OrderId, CartError> {
        let validated = validate_selection(customer_name, selections, &self.limits)?;

        let cart = self.snapshot().await?;
        if let Err(e) = check_capacity(cart.orders(), validated.drinks.len(), &self.limits) {
            warn!(error = %e, "Order rejected");
            return Err(e.into());
        }

        let id = OrderId(self.ids.next_id());
        let drinks = validated.rendered_drinks();
        let order = Order {
            id: id.clone(),
            customer_name: validated.customer_name,
            drinks,
            created_at: Utc::now(),
        };
        let path = self.path.child(&id.0)?;
        let value = serde_json::to_value(&order).map_err(|e| StoreError::decode(path.to_string(), e))?;

        self.store.set(&path, value).await?;
        info!(order_id = %id, customer = %order.customer_name, "Order submitted");
        Ok(id)
    }

    /// Removes one order. Deleting an order that is already gone succeeds.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: &OrderId) -> Result<(), CartError> {
        let path = self.path.child(&id.0)?;
        self.store.remove(&path).await?;
        info!("Order deleted");
        Ok(())
    }

    /// Removes every order.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        self.store.remove(&self.path).await?;
        info!("Cart cleared");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<CartSummary, CartError> {
        let summary = self.snapshot().await?.summary();
        debug!(?summary, "Summary computed");
        Ok(summary)
    }
}

#[async_trait]
impl PathClient for CartClient {
    type Snapshot = Cart;
    type Error = CartError;

    fn store(&self) -> &dyn RealtimeStore {
        self.store.as_ref()
    }

    fn path(&self) -> &StorePath {
        &self.path
    }

    fn decode(path: &StorePath, value: Option<Value>) -> Result<Cart, StoreError> {
        Cart::from_snapshot(path, value)
    }
}
