//! Cart admission rules, order drafts and their errors.
//!
//! Everything here is synchronous and store-free; [`CartClient`](crate::clients::CartClient)
//! combines these rules with the realtime store.

pub mod draft;
pub mod error;
pub mod rules;

pub use draft::*;
pub use error::*;
pub use rules::*;
