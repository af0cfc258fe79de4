//! Domain entities - Core business objects with identity

mod wish;

pub use wish::{NewWish, Wish, WishPatch};
