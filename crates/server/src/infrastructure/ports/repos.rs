//! Repository port traits for database access.

use async_trait::async_trait;
use wishlist_domain::{NewWish, Wish, WishId, WishPatch};

use super::error::RepoError;

/// Storage contract for wishes.
///
/// The service layer owns all business rules; implementations only move
/// records. `update_by_id` and `find_by_id` report an absent id as
/// `Ok(None)`, and `delete_by_id` acknowledges regardless of whether the
/// row existed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishRepo: Send + Sync {
    /// All wishes, newest first (by creation time).
    async fn find_all(&self) -> Result<Vec<Wish>, RepoError>;

    async fn find_by_id(&self, id: WishId) -> Result<Option<Wish>, RepoError>;

    /// Inserts a new wish, assigning its id and timestamps.
    async fn insert(&self, new_wish: NewWish) -> Result<Wish, RepoError>;

    /// Applies a sparse patch; returns the updated record, `None` if absent.
    async fn update_by_id(&self, id: WishId, patch: WishPatch)
        -> Result<Option<Wish>, RepoError>;

    /// Moves every wish in category `from` to category `to`; returns the
    /// number of records touched.
    async fn update_category(&self, from: &str, to: &str) -> Result<u64, RepoError>;

    /// Deletes by id; absent ids are not an error.
    async fn delete_by_id(&self, id: WishId) -> Result<(), RepoError>;
}
