use crate::clients::{CartClient, FavoritesClient, NameClient};
use crate::framework::{IdGenerator, PushIds, RealtimeStore, StoreActor, StoreClient};
use crate::lifecycle::{AppConfig, DailyClear, ScheduleHandle};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the shared cart.
///
/// `CartSystem` starts the store actor and the daily-clear scheduler, wires the
/// domain clients to the store, and tears everything down in
/// [`shutdown`](CartSystem::shutdown).
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(AppConfig::from_env()?).await?;
///
/// let id = system.cart_client.submit_order("김리언", draft.selections()).await?;
/// let summary = system.cart_client.summary().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    pub cart_client: CartClient,
    pub name_client: NameClient,
    pub favorites_client: FavoritesClient,

    store: StoreClient,
    scheduler: ScheduleHandle,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Spawns the store actor and the scheduler with push-style order ids.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_ids(config, Arc::new(PushIds))
    }

    /// Like [`new`](CartSystem::new) but with a caller-supplied order id generator.
    pub fn with_ids(config: &AppConfig, ids: Arc<dyn IdGenerator>) -> Self {
        let (store_actor, store) = StoreActor::new(config.store_buffer, PushIds);
        let store_handle = tokio::spawn(store_actor.run());

        let shared: Arc<dyn RealtimeStore> = Arc::new(store.clone());
        let cart_client = CartClient::new(shared.clone(), ids, config.limits);
        let name_client = NameClient::new(shared.clone(), config.limits.max_name_chars);
        let favorites_client = FavoritesClient::new(shared, config.favorites_load_timeout);

        let scheduler = DailyClear::new(cart_client.clone(), config.clear_at).spawn();

        Self {
            cart_client,
            name_client,
            favorites_client,
            store,
            scheduler,
            handles: vec![store_handle],
        }
    }

    /// [`new`](CartSystem::new) followed by seeding the name roster when enabled.
    pub async fn start(config: AppConfig) -> Result<Self, String> {
        let system = Self::new(&config);
        if config.seed_default_names {
            system
                .name_client
                .seed_defaults()
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok(system)
    }

    /// A raw handle to the store, e.g. for an extra subscriber.
    pub fn store(&self) -> StoreClient {
        self.store.clone()
    }

    /// Stops the scheduler, drops every client so the store actor's channel
    /// closes, and waits for the actor to exit.
    ///
    /// Clients cloned out of the system keep the store alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        if let Err(e) = self.scheduler.stop().await {
            error!("Scheduler task failed: {:?}", e);
            return Err(format!("Scheduler task failed: {:?}", e));
        }

        drop(self.cart_client);
        drop(self.name_client);
        drop(self.favorites_client);
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
