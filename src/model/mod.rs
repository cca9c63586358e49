//! Pure data structures shared by the cart, menu and admin clients.

pub mod drink;
pub mod favorites;
pub mod menu;
pub mod order;

pub use drink::*;
pub use favorites::*;
pub use menu::*;
pub use order::*;
