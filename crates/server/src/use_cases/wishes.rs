//! Wish CRUD and claim operations.
//!
//! Administrative operations take an [`AdminIdentity`] and must clear the
//! gate before the repository sees any write. The claim operations are the
//! public visitor flow and take no identity.

use std::sync::Arc;

use wishlist_domain::{NewWish, Wish, WishId, WishPatch};

use crate::infrastructure::ports::WishRepo;
use crate::use_cases::gate::{AdminGate, AdminIdentity};
use crate::use_cases::ServiceError;

/// Caller-supplied sparse update for a wish.
///
/// Absent fields keep their stored values. The claim counter is not
/// patchable from here; it moves only through the claim operations.
#[derive(Debug, Clone, Default)]
pub struct WishUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub taken: Option<bool>,
    pub taken_by: Option<String>,
}

pub struct WishOps {
    repo: Arc<dyn WishRepo>,
    gate: Arc<AdminGate>,
}

impl WishOps {
    pub fn new(repo: Arc<dyn WishRepo>, gate: Arc<AdminGate>) -> Self {
        Self { repo, gate }
    }

    /// All wishes, newest first. Public.
    pub async fn list(&self) -> Result<Vec<Wish>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Creates a wish offering a single unit. Administrative.
    pub async fn create(
        &self,
        identity: &AdminIdentity,
        title: String,
        description: Option<String>,
        category: String,
    ) -> Result<Wish, ServiceError> {
        self.gate.require(identity)?;

        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ServiceError::Validation(
                "Title cannot be empty".to_string(),
            ));
        }
        let category = category.trim().to_string();
        if category.is_empty() {
            return Err(ServiceError::Validation(
                "Category cannot be empty".to_string(),
            ));
        }

        let wish = self
            .repo
            .insert(NewWish {
                title,
                description,
                category,
            })
            .await?;
        tracing::info!(wish_id = %wish.id, "created wish");
        Ok(wish)
    }

    /// Partial update; absent fields keep their values. Administrative.
    ///
    /// Setting `taken` to false also clears the claimant and the claim
    /// counter, so a released wish never keeps stale claim state.
    pub async fn update(
        &self,
        identity: &AdminIdentity,
        id: WishId,
        update: WishUpdate,
    ) -> Result<Wish, ServiceError> {
        self.gate.require(identity)?;

        let wish = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let mut patch = WishPatch::default();

        if let Some(title) = update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ServiceError::Validation(
                    "Title cannot be empty".to_string(),
                ));
            }
            patch.title = Some(title);
        }
        if let Some(description) = update.description {
            patch.description = Some(description);
        }
        if let Some(category) = update.category {
            // Trimming to empty is a deliberate manual uncategorize.
            patch.category = Some(category.trim().to_string());
        }
        if let Some(quantity) = update.quantity {
            if quantity < wish.taken_quantity {
                return Err(ServiceError::Validation(format!(
                    "Quantity cannot drop below the {} units already taken",
                    wish.taken_quantity
                )));
            }
            patch.quantity = Some(quantity);
        }
        match update.taken {
            Some(false) => {
                patch.taken = Some(false);
                patch.taken_by = Some(String::new());
                patch.taken_quantity = Some(0);
            }
            Some(true) => {
                patch.taken = Some(true);
                patch.taken_by = update.taken_by;
            }
            None => {
                patch.taken_by = update.taken_by;
            }
        }

        self.repo
            .update_by_id(id, patch)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Unconditional delete. Administrative; deleting an absent id succeeds.
    pub async fn delete(&self, identity: &AdminIdentity, id: WishId) -> Result<(), ServiceError> {
        self.gate.require(identity)?;

        self.repo.delete_by_id(id).await?;
        tracing::info!(wish_id = %id, "deleted wish");
        Ok(())
    }

    /// Claims `quantity` units for `taken_by`. Public.
    ///
    /// The claim counter accumulates across calls; claims beyond the
    /// remaining quantity are rejected.
    pub async fn mark_taken(
        &self,
        id: WishId,
        taken_by: &str,
        quantity: u32,
    ) -> Result<Wish, ServiceError> {
        let taken_by = taken_by.trim();
        if taken_by.is_empty() {
            return Err(ServiceError::Validation(
                "Claimant name cannot be empty".to_string(),
            ));
        }

        let wish = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        let new_taken_quantity = wish.record_claim(quantity)?;

        let patch = WishPatch {
            taken: Some(true),
            taken_by: Some(taken_by.to_string()),
            taken_quantity: Some(new_taken_quantity),
            ..Default::default()
        };

        let updated = self
            .repo
            .update_by_id(id, patch)
            .await?
            .ok_or(ServiceError::NotFound)?;
        tracing::info!(wish_id = %id, quantity, "recorded claim");
        Ok(updated)
    }

    /// Releases every claim on a wish. Public.
    pub async fn mark_untaken(&self, id: WishId) -> Result<Wish, ServiceError> {
        let patch = WishPatch {
            taken: Some(false),
            taken_by: Some(String::new()),
            taken_quantity: Some(0),
            ..Default::default()
        };

        let updated = self
            .repo
            .update_by_id(id, patch)
            .await?
            .ok_or(ServiceError::NotFound)?;
        tracing::info!(wish_id = %id, "released claims");
        Ok(updated)
    }
}
