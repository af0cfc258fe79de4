//! Use cases for wish and category management.
//!
//! These keep HTTP handlers thin: validation, authorization, and claim
//! arithmetic all happen here, against the repository port.

use std::sync::Arc;

use wishlist_domain::DomainError;

use crate::infrastructure::ports::{RepoError, WishRepo};

pub mod categories;
pub mod gate;
pub mod wishes;

pub use categories::{distinct_categories, CategoryOps};
pub use gate::{AdminGate, AdminIdentity, Decision};
pub use wishes::{WishOps, WishUpdate};

/// Shared error type for the use cases.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Administrator authorization denied")]
    Authorization,
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) | DomainError::Constraint(message) => {
                ServiceError::Validation(message)
            }
        }
    }
}

/// Container for the use cases, built once at startup.
pub struct UseCases {
    pub wishes: WishOps,
    pub categories: CategoryOps,
}

impl UseCases {
    pub fn new(repo: Arc<dyn WishRepo>, gate: Arc<AdminGate>) -> Self {
        Self {
            wishes: WishOps::new(repo.clone(), gate.clone()),
            categories: CategoryOps::new(repo, gate),
        }
    }
}
