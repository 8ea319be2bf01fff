//! Repository for the `slides` table.
//!
//! Single-statement CRUD plus two transactional bulk operations: seeding
//! the default deck and replacing the whole deck. `display_order` carries
//! no uniqueness constraint; listing sorts by it ascending with
//! `created_at` as the tie-breaker.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use slidedeck_core::types::SlideId;

use crate::models::slide::{CreateSlide, ReplaceSlide, Slide, UpdateSlide};
use crate::seed::DEFAULT_DECK;

/// Column list for `slides` queries.
const COLUMNS: &str = "\
    id, title, content, layout, display_order, created_at, updated_at";

/// Provides data access for slides.
pub struct SlideRepo;

impl SlideRepo {
    /// Insert a new slide with a fresh v4 id.
    ///
    /// Uses `COALESCE` so absent fields take the entity defaults.
    pub async fn create(pool: &PgPool, dto: &CreateSlide) -> Result<Slide, sqlx::Error> {
        let query = format!(
            "INSERT INTO slides (id, title, content, layout, display_order) \
             VALUES ($1, COALESCE($2, 'Untitled Slide'), COALESCE($3, ''), \
                     COALESCE($4, 'content'), COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(Uuid::new_v4())
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.layout)
            .bind(dto.display_order)
            .fetch_one(pool)
            .await
    }

    /// List the whole deck ordered by `display_order` ascending.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<Slide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slides \
             ORDER BY display_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, Slide>(&query).fetch_all(pool).await
    }

    /// Find a single slide by its id.
    pub async fn find_by_id(pool: &PgPool, id: SlideId) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slides WHERE id = $1");
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a slide.
    ///
    /// Uses `COALESCE` so only provided fields are changed; `updated_at`
    /// is bumped on every match. Returns `None` when no row has the id.
    pub async fn update(
        pool: &PgPool,
        id: SlideId,
        dto: &UpdateSlide,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!(
            "UPDATE slides SET \
                 title         = COALESCE($2, title), \
                 content       = COALESCE($3, content), \
                 layout        = COALESCE($4, layout), \
                 display_order = COALESCE($5, display_order), \
                 updated_at    = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.content)
            .bind(dto.layout)
            .bind(dto.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide by id.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: SlideId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every slide. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slides").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Count all slides.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM slides")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Replace the whole deck in one transaction.
    ///
    /// Deletes every existing row, then inserts the given entries in
    /// payload order with `display_order` equal to the entry's index. A
    /// provided id is kept; entries without one get a fresh v4 id. The
    /// commit is all-or-nothing: a failed insert leaves the prior deck
    /// intact.
    pub async fn replace_all(
        pool: &PgPool,
        entries: &[ReplaceSlide],
    ) -> Result<Vec<Slide>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM slides").execute(&mut *tx).await?;

        let mut slides = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let id = entry.id.unwrap_or_else(Uuid::new_v4);
            let slide = Self::insert_entry(&mut tx, id, entry, index as i32).await?;
            slides.push(slide);
        }

        tx.commit().await?;
        Ok(slides)
    }

    /// Populate an empty store with the default deck, atomically.
    ///
    /// Runs as a single transaction: residual rows are cleared (normally a
    /// no-op), then the fourteen predefined slides are inserted with
    /// `display_order` equal to their position in the source list.
    /// Concurrent triggers serialize on the row locks, so the store never
    /// ends up with a duplicated deck.
    pub async fn seed_default_deck(pool: &PgPool) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM slides").execute(&mut *tx).await?;

        for (index, entry) in DEFAULT_DECK.iter().enumerate() {
            sqlx::query(
                "INSERT INTO slides (id, title, content, layout, display_order) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(entry.title)
            .bind(entry.content)
            .bind(entry.layout)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(count = DEFAULT_DECK.len(), "Default deck seeded");
        Ok(())
    }

    async fn insert_entry(
        tx: &mut Transaction<'_, Postgres>,
        id: SlideId,
        entry: &ReplaceSlide,
        display_order: i32,
    ) -> Result<Slide, sqlx::Error> {
        let query = format!(
            "INSERT INTO slides (id, title, content, layout, display_order) \
             VALUES ($1, COALESCE($2, 'Untitled Slide'), COALESCE($3, ''), \
                     COALESCE($4, 'content'), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&entry.title)
            .bind(&entry.content)
            .bind(entry.layout)
            .bind(display_order)
            .fetch_one(&mut **tx)
            .await
    }
}
