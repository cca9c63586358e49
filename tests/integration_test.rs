use mega_cart::cart::{OrderDraft, SelectionMode};
use mega_cart::clients::{NameError, PathClient, DEFAULT_NAMES};
use mega_cart::framework::SequentialIds;
use mega_cart::lifecycle::{AppConfig, CartSystem};
use mega_cart::menu;
use mega_cart::model::{Favorites, Temperature};
use std::sync::Arc;

/// Full end-to-end test with the real store actor and scheduler.
#[tokio::test]
async fn test_full_cart_system_integration() {
    let system = CartSystem::start(AppConfig::default())
        .await
        .expect("Failed to start system");

    // Roster seeded on first start.
    let names = system.name_client.list().await.expect("Failed to list names");
    assert_eq!(names.len(), DEFAULT_NAMES.len());

    // Build an order the way the ordering page does.
    let mut draft = OrderDraft::new(SelectionMode::Multi);
    draft.set_customer_name(names[0].clone());
    let latte = menu::find("카페라떼").expect("on the menu");
    let smoothie = menu::find("딸기요거트스무디").expect("on the menu");
    draft.select(latte.clone());
    draft.select(smoothie.clone());
    draft.set_temperature(&latte, Temperature::Hot);
    draft.set_temperature(&smoothie, Temperature::Hot);

    let id = system
        .cart_client
        .submit_order(draft.customer_name(), draft.selections())
        .await
        .expect("Failed to submit order");

    let cart = system.cart_client.snapshot().await.expect("Failed to read cart");
    let order = cart.get(&id).expect("Order not found");
    assert_eq!(order.drinks, vec!["카페라떼 (HOT)", "딸기요거트스무디 (ICE)"]);

    system
        .cart_client
        .delete_order(&id)
        .await
        .expect("Failed to delete order");
    assert!(system.cart_client.snapshot().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_seeding_is_skipped_when_roster_exists() {
    let system = CartSystem::start(AppConfig::default()).await.unwrap();

    system.name_client.add("새직원").await.unwrap();
    assert!(!system.name_client.seed_defaults().await.unwrap());
    assert_eq!(
        system.name_client.list().await.unwrap().len(),
        DEFAULT_NAMES.len() + 1
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_name_roster_edits() {
    let config = AppConfig {
        seed_default_names: false,
        ..AppConfig::default()
    };
    let system = CartSystem::start(config).await.unwrap();
    let names = &system.name_client;

    assert!(names.list().await.unwrap().is_empty());
    names.add("조혜인").await.unwrap();
    names.add("김리언").await.unwrap();
    assert_eq!(
        names.add("김리언").await,
        Err(NameError::Duplicate("김리언".into()))
    );
    assert_eq!(names.list().await.unwrap(), vec!["김리언", "조혜인"]);

    names.remove("조혜인").await.unwrap();
    names.remove("조혜인").await.unwrap();
    assert_eq!(names.list().await.unwrap(), vec!["김리언"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_favorites_round_trip_and_menu_order() {
    let system = CartSystem::start(AppConfig::default()).await.unwrap();

    assert!(system.favorites_client.load().await.is_empty());

    let mut favorites = Favorites::new();
    favorites.set_checked("카페모카", true);
    favorites.set_checked("녹차", true);
    system.favorites_client.save(&favorites).await.unwrap();

    let loaded = system.favorites_client.load().await;
    assert_eq!(loaded, favorites);

    let catalog = menu::catalog();
    let listed = menu::arrange(&catalog, &loaded, &menu::MenuQuery::default());
    let first_two: Vec<_> = listed.iter().take(2).map(|item| item.name.as_str()).collect();
    assert_eq!(first_two, vec!["녹차", "카페모카"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_subscribers_share_one_store() {
    let system = CartSystem::with_ids(&AppConfig::default(), Arc::new(SequentialIds::new("order")));
    let mut watch = system.cart_client.watch().await.unwrap();
    assert!(watch.next().await.unwrap().unwrap().is_empty());

    let mut draft = OrderDraft::new(SelectionMode::Single);
    draft.select(menu::find("아메리카노").unwrap());
    system
        .cart_client
        .submit_order("김주형", draft.selections())
        .await
        .unwrap();

    let cart = watch.next().await.unwrap().unwrap();
    assert_eq!(cart.len(), 1);

    drop(watch);
    system.shutdown().await.unwrap();
}
