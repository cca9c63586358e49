//! Configuration, tracing setup, the daily-clear scheduler and the system
//! orchestrator.

pub mod cart_system;
pub mod config;
pub mod scheduler;
pub mod tracing;

pub use cart_system::CartSystem;
pub use config::{AppConfig, ConfigError};
pub use scheduler::{duration_until_next, local_clock, next_occurrence, Clock, DailyClear, ScheduleHandle};
pub use self::tracing::setup_tracing;
