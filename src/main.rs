//! Demo session: a few customers fill the shared cart, one order is cancelled, and
//! an oversized order bounces off the capacity limit.

use mega_cart::cart::{OrderDraft, SelectionMode};
use mega_cart::clients::PathClient;
use mega_cart::lifecycle::{setup_tracing, AppConfig, CartSystem};
use mega_cart::menu::{self, MenuQuery};
use mega_cart::model::{CategoryFilter, Temperature};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting shared cart");

    let system = CartSystem::start(config).await?;
    let catalog = menu::catalog();

    let roster = system.name_client.list().await.map_err(|e| e.to_string())?;
    let favorites = system.favorites_client.load().await;

    // First customer: one hot latte and one ade (which stays iced).
    let mut draft = OrderDraft::new(SelectionMode::Multi);
    draft.set_customer_name(roster.first().cloned().unwrap_or_default());
    let coffee = MenuQuery::new(CategoryFilter::All, "라떼");
    for item in menu::arrange(&catalog, &favorites, &coffee).into_iter().take(1) {
        draft.select(item.clone());
        draft.set_temperature(item, Temperature::Hot);
    }
    if let Some(ade) = menu::find("레몬에이드") {
        draft.select(ade.clone());
        draft.set_temperature(&ade, Temperature::Hot);
    }

    let span = tracing::info_span!("first_order");
    let first = async {
        info!("Submitting first order");
        system
            .cart_client
            .submit_order(draft.customer_name(), draft.selections())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Second customer orders, then changes their mind.
    let mut single = OrderDraft::new(SelectionMode::Single);
    if let Some(americano) = menu::find("아메리카노") {
        single.select(americano);
    }
    let name = roster.get(1).cloned().unwrap_or_default();
    let second = system
        .cart_client
        .submit_order(&name, single.selections())
        .await
        .map_err(|e| e.to_string())?;
    system
        .cart_client
        .delete_order(&second)
        .await
        .map_err(|e| e.to_string())?;

    // An order larger than the remaining capacity is refused.
    let mut bulk = OrderDraft::new(SelectionMode::Multi);
    for item in catalog.iter().take(system.cart_client.limits().per_order) {
        bulk.select(item.clone());
    }
    for round in 0..6 {
        match system
            .cart_client
            .submit_order("단체주문", bulk.selections())
            .await
        {
            Ok(id) => info!(round, order_id = %id, "Bulk order accepted"),
            Err(e) => {
                error!(round, error = %e, "Bulk order refused");
                break;
            }
        }
    }

    let cart = system.cart_client.snapshot().await.map_err(|e| e.to_string())?;
    if let Some(order) = cart.get(&first) {
        info!(drinks = ?order.drinks, "First order");
    }
    let summary = cart.summary();
    info!(
        orders = summary.order_count,
        drinks = summary.total_drinks,
        "Cart summary"
    );

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
