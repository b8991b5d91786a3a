//! Reader model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Reader record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reader {
    pub id: i32,
    pub name: String,
    /// Library card number, unique across readers
    pub reader_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Reader with the books currently on loan to them
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReaderDetails {
    #[serde(flatten)]
    pub reader: Reader,
    pub borrowed_books: Vec<Book>,
}

/// Create reader request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReader {
    pub name: String,
    pub reader_id: i32,
}
