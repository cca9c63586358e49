//! Domain clients over the [`RealtimeStore`](crate::framework::RealtimeStore).

pub mod cart_client;
pub mod error;
pub mod favorites_client;
pub mod name_client;
pub mod path_client;

pub use cart_client::*;
pub use error::*;
pub use favorites_client::*;
pub use name_client::*;
pub use path_client::*;
