//! # Mega Cart
//!
//! > **A shared coffee cart for a team ordering from one café.**
//!
//! Everyone picks drinks into one shared cart. The cart enforces a per-order limit
//! and a total capacity, everyone sees every change live, and the cart empties
//! itself once a day.
//!
//! ## Core Concepts
//!
//! ### One store, many clients
//! All shared state lives in a realtime JSON store addressed by paths (`orders`,
//! `names`, `favorites`). The in-process store is a Tokio actor: requests are handled
//! one at a time, and subscribers get a full snapshot immediately and after every
//! overlapping write. Domain clients only see the [`RealtimeStore`](framework::RealtimeStore)
//! trait.
//!
//! ### Rules are plain functions
//! Validation, the capacity check and aggregation live in [`cart`] and take values,
//! not stores. [`CartClient`](clients::CartClient) reads a snapshot, applies the rules
//! and writes. The check and the write are separate store calls, so two simultaneous
//! submissions can overshoot the capacity together.
//!
//! ### Mocking
//! [`MockStore`](framework::mock::MockStore) scripts store answers, including failures
//! the in-process store never produces. See the [`framework::mock`] module.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`framework`])
//! - **Role**: Paths, the store contract, the store actor and its channel client.
//! - **Key items**: [`StoreActor`](framework::StoreActor), [`StoreClient`](framework::StoreClient),
//!   [`Subscription`](framework::Subscription).
//!
//! ### 2. The Data ([`model`], [`menu`])
//! - **Role**: Orders, drinks, favorites, the menu catalog and how it is listed.
//!
//! ### 3. The Rules ([`cart`])
//! - **Role**: `validate_selection`, `check_capacity`, `aggregate` and the order draft.
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: Cart, name roster and favorites clients over the store.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: Configuration, tracing, the daily clear and [`CartSystem`](lifecycle::CartSystem).
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
