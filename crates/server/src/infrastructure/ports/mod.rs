//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the server. Everything else is
//! concrete types. Ports exist for:
//! - Database access (could swap SQLite -> Postgres)
//! - Clock (for deterministic timestamps in tests)

mod error;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::WishRepo;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockWishRepo;

#[cfg(test)]
pub use testing::MockClockPort;
