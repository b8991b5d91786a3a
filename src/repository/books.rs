//! Book domain methods on Repository

use super::{foreign_key_violation_as_not_found, unique_violation_as_conflict, Repository};
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook},
};

impl Repository {
    /// List a page of books, optionally filtered on title
    pub async fn books_list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let page = query.page();
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE $1::text IS NULL OR strpos(LOWER(title), LOWER($1)) > 0
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(query.title())
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Books currently on loan to a reader
    pub async fn books_list_by_borrower(&self, reader_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE borrower_id = $1 ORDER BY id"
        )
        .bind(reader_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create book. A duplicate ISBN rolls the insert back and yields `Conflict`.
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, is_borrowed, borrower_id)
            VALUES ($1, $2, $3, FALSE, NULL)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.isbn)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| unique_violation_as_conflict(e, "ISBN already exists"))?;

        tx.commit().await?;
        Ok(book)
    }

    /// Lend a book to a reader.
    ///
    /// The book row stays locked between the availability check and the
    /// update, so two concurrent borrows cannot both succeed.
    pub async fn books_borrow(&self, book_id: i32, reader_id: i32) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = self.books_lock(&mut tx, book_id).await?;
        book.check_can_borrow()?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET is_borrowed = TRUE, borrower_id = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(reader_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // Backstop for callers that skip the reader check
            foreign_key_violation_as_not_found(e, &format!("Reader {} not found", reader_id))
        })?;

        tx.commit().await?;
        Ok(book)
    }

    /// Put a borrowed book back on the shelf
    pub async fn books_return(&self, book_id: i32) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = self.books_lock(&mut tx, book_id).await?;
        book.check_can_return()?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET is_borrowed = FALSE, borrower_id = NULL, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(book)
    }

    async fn books_lock(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        book_id: i32,
    ) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1 FOR UPDATE")
            .bind(book_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book_id)))
    }
}
