//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::WishRepo;
use crate::use_cases::{AdminGate, UseCases};

/// Main application state.
///
/// Holds the repository ports and use cases. Passed to HTTP handlers via
/// Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the repository ports.
pub struct Repositories {
    pub wish: Arc<dyn WishRepo>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(wish_repo: Arc<dyn WishRepo>, gate: Arc<AdminGate>) -> Self {
        let use_cases = UseCases::new(wish_repo.clone(), gate);

        Self {
            repositories: Repositories { wish: wish_repo },
            use_cases,
        }
    }
}
