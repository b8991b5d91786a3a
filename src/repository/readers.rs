//! Reader domain methods on Repository

use super::{unique_violation_as_conflict, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{
        pagination::PageQuery,
        reader::{CreateReader, Reader},
    },
};

impl Repository {
    /// List a page of readers
    pub async fn readers_list(&self, page: &PageQuery) -> AppResult<Vec<Reader>> {
        let rows = sqlx::query_as::<_, Reader>(
            "SELECT * FROM readers ORDER BY id OFFSET $1 LIMIT $2"
        )
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get reader by ID
    pub async fn readers_get_by_id(&self, id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }

    /// Get reader by library card number
    pub async fn readers_get_by_card(&self, reader_id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE reader_id = $1")
            .bind(reader_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Reader with card {} not found", reader_id))
            })
    }

    /// Create reader. A duplicate card number yields `Conflict`.
    pub async fn readers_create(&self, data: &CreateReader) -> AppResult<Reader> {
        let mut tx = self.pool.begin().await?;

        let reader = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (name, reader_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.reader_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| unique_violation_as_conflict(e, "Reader ID already exists"))?;

        tx.commit().await?;
        Ok(reader)
    }
}
