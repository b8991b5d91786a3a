//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::pagination::PageQuery;
use crate::error::{AppError, AppResult};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// ISBN, unique across the catalog
    pub isbn: String,
    pub is_borrowed: bool,
    /// Reader currently holding the book (`readers.id`)
    pub borrower_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Whether the book is on the shelf.
    pub fn is_available(&self) -> bool {
        !self.is_borrowed
    }

    /// Fails with `Conflict` when the book is already out.
    pub fn check_can_borrow(&self) -> AppResult<()> {
        if !self.is_available() {
            return Err(AppError::Conflict(format!(
                "Book {} is already borrowed",
                self.id
            )));
        }
        Ok(())
    }

    /// Fails with `Conflict` when the book is not out.
    pub fn check_can_return(&self) -> AppResult<()> {
        if !self.is_borrowed {
            return Err(AppError::Conflict(format!(
                "Book {} is not borrowed",
                self.id
            )));
        }
        Ok(())
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Book listing filters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Number of rows to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum number of rows to return (default 10, max 100)
    pub limit: Option<i64>,
}

impl BookQuery {
    pub fn page(&self) -> PageQuery {
        PageQuery {
            skip: self.skip,
            limit: self.limit,
        }
    }

    /// Title filter, ignoring blank input
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Borrow book request
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct BorrowBook {
    /// Reader ID (`readers.id`)
    pub borrower_id: i32,
}
