//! Wishlist domain types.
//!
//! Pure data and invariants: no I/O, no framework types. The server crate
//! consumes these through its repository port.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{NewWish, Wish, WishPatch};
pub use error::DomainError;
pub use ids::WishId;
