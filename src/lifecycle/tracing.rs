//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; the structured fields (`path`, `order_id`,
//! `customer`) carry the context instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # submissions, deletions, clears
//! RUST_LOG=debug cargo run    # every store request and snapshot read
//! ```
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Store started
//! INFO seed_defaults: Seeded default names count=14
//! INFO submit_order{customer_name="김리언" drinks=2}: Set path=orders/order_1 watchers=0
//! INFO submit_order{customer_name="김리언" drinks=2}: Order submitted order_id=order_1 customer=김리언
//! WARN submit_order{customer_name="조혜인" drinks=20}: Order rejected error=Cart is full: ...
//! INFO Scheduled cart clear clear_at=00:00:00
//! ```
//!
//! Call it once per process; a second call panics because the global subscriber is
//! already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
