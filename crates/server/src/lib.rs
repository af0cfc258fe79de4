//! Wishlist server library.
//!
//! This crate contains all server-side code for the wishlist service.
//!
//! ## Structure
//!
//! - `use_cases/` - Wish, category, and admin-gate operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
