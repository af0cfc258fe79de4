//! Wish entity - a claimable gift-list entry.
//!
//! A wish offers `quantity` units of something; visitors claim units until
//! none remain. `category` is a plain denormalized string on the record:
//! there is no category entity anywhere, and category rename/delete are
//! bulk updates over matching wishes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::WishId;

/// A single claimable entry on the list.
///
/// This is a data-carrying struct with public fields. Cross-field rules
/// (claim arithmetic, patch sanity) live in the methods below and in the
/// service layer; any single field value is valid on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wish {
    pub id: WishId,
    pub title: String,
    pub description: Option<String>,
    /// Free-text grouping label; empty string means "uncategorized".
    pub category: String,
    /// Total units offered.
    pub quantity: u32,
    /// Units claimed so far; kept at or below `quantity` by the claim path.
    pub taken_quantity: u32,
    /// True once any claim has been recorded.
    pub taken: bool,
    /// Claimant name; empty while unclaimed.
    pub taken_by: String,
    /// Opaque URL to an externally stored asset.
    pub image: Option<String>,
    /// Assigned by the repository on insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the repository on every write.
    pub updated_at: DateTime<Utc>,
}

impl Wish {
    /// Units still available to claim, derived on read and never stored.
    pub fn remaining_quantity(&self) -> u32 {
        self.quantity.saturating_sub(self.taken_quantity)
    }

    /// Computes the claim counter after taking `quantity` more units.
    ///
    /// Returns the new `taken_quantity` value for the caller to persist.
    /// Claims of zero units and claims beyond the remaining quantity are
    /// rejected.
    pub fn record_claim(&self, quantity: u32) -> Result<u32, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "Claim quantity must be at least 1",
            ));
        }
        let remaining = self.remaining_quantity();
        if quantity > remaining {
            return Err(DomainError::constraint(format!(
                "Cannot claim {} of '{}': only {} of {} remaining",
                quantity, self.title, remaining, self.quantity
            )));
        }
        Ok(self.taken_quantity + quantity)
    }

    /// Applies a sparse patch in place; absent fields keep their values.
    pub fn apply(&mut self, patch: WishPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(taken) = patch.taken {
            self.taken = taken;
        }
        if let Some(taken_by) = patch.taken_by {
            self.taken_by = taken_by;
        }
        if let Some(taken_quantity) = patch.taken_quantity {
            self.taken_quantity = taken_quantity;
        }
    }
}

/// Fields supplied by the caller when inserting a new wish.
///
/// The repository assigns the id and timestamps; the claim state starts
/// empty and `quantity` starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWish {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
}

/// Sparse field update; `None` leaves a field untouched.
///
/// `taken_quantity` is maintained by the claim paths only; callers patch at
/// most the other six fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub taken: Option<bool>,
    pub taken_by: Option<String>,
    pub taken_quantity: Option<u32>,
}
