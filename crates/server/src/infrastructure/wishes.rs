//! SQLite-backed wish storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;
use wishlist_domain::{NewWish, Wish, WishId, WishPatch};

use crate::infrastructure::ports::{ClockPort, RepoError, WishRepo};

/// SQLite implementation of the wish repository.
///
/// Timestamps are stored as RFC3339 UTC text; lexicographic order matches
/// chronological order, so `ORDER BY created_at` needs no parsing.
pub struct SqliteWishRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteWishRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wishes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                category TEXT NOT NULL DEFAULT '',
                quantity INTEGER NOT NULL DEFAULT 1,
                taken_quantity INTEGER NOT NULL DEFAULT 0,
                taken INTEGER NOT NULL DEFAULT 0,
                taken_by TEXT NOT NULL DEFAULT '',
                image TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_table", e))?;

        Ok(Self { pool, clock })
    }

    fn row_to_wish(row: &SqliteRow) -> Result<Wish, RepoError> {
        let id: String = row.get("id");
        let id = Uuid::parse_str(&id)
            .map_err(|e| RepoError::serialization(format!("wish id '{}': {}", id, e)))?;

        let quantity: i64 = row.get("quantity");
        let taken_quantity: i64 = row.get("taken_quantity");

        Ok(Wish {
            id: WishId::from_uuid(id),
            title: row.get("title"),
            description: row.get("description"),
            category: row.get("category"),
            quantity: column_to_u32("quantity", quantity)?,
            taken_quantity: column_to_u32("taken_quantity", taken_quantity)?,
            taken: row.get("taken"),
            taken_by: row.get("taken_by"),
            image: row.get("image"),
            created_at: parse_timestamp(row.get("created_at"))?,
            updated_at: parse_timestamp(row.get("updated_at"))?,
        })
    }
}

#[async_trait]
impl WishRepo for SqliteWishRepo {
    async fn find_all(&self) -> Result<Vec<Wish>, RepoError> {
        let rows = sqlx::query(
            "SELECT * FROM wishes ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_all", e))?;

        rows.iter().map(Self::row_to_wish).collect()
    }

    async fn find_by_id(&self, id: WishId) -> Result<Option<Wish>, RepoError> {
        let row = sqlx::query("SELECT * FROM wishes WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_by_id", e))?;

        row.as_ref().map(Self::row_to_wish).transpose()
    }

    async fn insert(&self, new_wish: NewWish) -> Result<Wish, RepoError> {
        let now = self.clock.now();
        let wish = Wish {
            id: WishId::new(),
            title: new_wish.title,
            description: new_wish.description,
            category: new_wish.category,
            quantity: 1,
            taken_quantity: 0,
            taken: false,
            taken_by: String::new(),
            image: None,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO wishes
                (id, title, description, category, quantity, taken_quantity,
                 taken, taken_by, image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(wish.id.to_string())
        .bind(&wish.title)
        .bind(&wish.description)
        .bind(&wish.category)
        .bind(wish.quantity as i64)
        .bind(wish.taken_quantity as i64)
        .bind(wish.taken)
        .bind(&wish.taken_by)
        .bind(&wish.image)
        .bind(wish.created_at.to_rfc3339())
        .bind(wish.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        Ok(wish)
    }

    async fn update_by_id(
        &self,
        id: WishId,
        patch: WishPatch,
    ) -> Result<Option<Wish>, RepoError> {
        let Some(mut wish) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        wish.apply(patch);
        wish.updated_at = self.clock.now();

        sqlx::query(
            r#"
            UPDATE wishes
            SET title = ?, description = ?, category = ?, quantity = ?,
                taken_quantity = ?, taken = ?, taken_by = ?, image = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&wish.title)
        .bind(&wish.description)
        .bind(&wish.category)
        .bind(wish.quantity as i64)
        .bind(wish.taken_quantity as i64)
        .bind(wish.taken)
        .bind(&wish.taken_by)
        .bind(&wish.image)
        .bind(wish.updated_at.to_rfc3339())
        .bind(wish.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("update_by_id", e))?;

        Ok(Some(wish))
    }

    async fn update_category(&self, from: &str, to: &str) -> Result<u64, RepoError> {
        let now = self.clock.now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE wishes SET category = ?, updated_at = ? WHERE category = ?",
        )
        .bind(to)
        .bind(now)
        .bind(from)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("update_category", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: WishId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM wishes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_by_id", e))?;

        Ok(())
    }
}

fn parse_timestamp(raw: String) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("timestamp '{}': {}", raw, e)))
}

fn column_to_u32(column: &'static str, value: i64) -> Result<u32, RepoError> {
    u32::try_from(value)
        .map_err(|_| RepoError::serialization(format!("column {} out of range: {}", column, value)))
}
