//! Category derivation and bulk category maintenance.
//!
//! Categories are plain string labels on wishes, not stored entities. The
//! list here is always recomputed from the current wishes, and renaming or
//! deleting a category fans out over every wish carrying it.

use std::collections::HashSet;
use std::sync::Arc;

use wishlist_domain::Wish;

use crate::infrastructure::ports::WishRepo;
use crate::use_cases::gate::{AdminGate, AdminIdentity};
use crate::use_cases::ServiceError;

/// Distinct category labels in first-encounter order.
///
/// The empty label (uncategorized) participates like any other value, so
/// callers can tell "some wishes are uncategorized" from "none are".
pub fn distinct_categories(wishes: &[Wish]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for wish in wishes {
        if seen.insert(wish.category.clone()) {
            categories.push(wish.category.clone());
        }
    }
    categories
}

pub struct CategoryOps {
    repo: Arc<dyn WishRepo>,
    gate: Arc<AdminGate>,
}

impl CategoryOps {
    pub fn new(repo: Arc<dyn WishRepo>, gate: Arc<AdminGate>) -> Self {
        Self { repo, gate }
    }

    /// Categories currently in use, ordered by the newest wish carrying
    /// each label. Public.
    pub async fn list(&self) -> Result<Vec<String>, ServiceError> {
        let wishes = self.repo.find_all().await?;
        Ok(distinct_categories(&wishes))
    }

    /// Renames a category on every wish carrying it. Administrative.
    ///
    /// Renaming to an existing label merges the two silently. Renaming to
    /// the empty label is rejected; uncategorizing goes through [`delete`].
    ///
    /// [`delete`]: CategoryOps::delete
    pub async fn rename(
        &self,
        identity: &AdminIdentity,
        old_category: &str,
        new_category: &str,
    ) -> Result<u64, ServiceError> {
        self.gate.require(identity)?;

        let new_category = new_category.trim();
        if new_category.is_empty() {
            return Err(ServiceError::Validation(
                "New category name cannot be empty".to_string(),
            ));
        }

        let updated = self.repo.update_category(old_category, new_category).await?;
        tracing::info!(old_category, new_category, updated, "renamed category");
        Ok(updated)
    }

    /// Removes a category label, leaving its wishes uncategorized.
    /// Administrative. No wish is deleted by this.
    pub async fn delete(&self, identity: &AdminIdentity, name: &str) -> Result<u64, ServiceError> {
        self.gate.require(identity)?;

        let updated = self.repo.update_category(name, "").await?;
        tracing::info!(category = name, updated, "deleted category");
        Ok(updated)
    }
}
