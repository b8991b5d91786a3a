//! Reader endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::Book,
        pagination::PageQuery,
        reader::{CreateReader, Reader, ReaderDetails},
    },
};

/// Register a reader
#[utoipa::path(
    post,
    path = "/readers/",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 200, description = "Reader created", body = Reader),
        (status = 400, description = "Reader ID already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateReader>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.catalog.create_reader(&data).await?;
    Ok(Json(reader))
}

/// List readers
#[utoipa::path(
    get,
    path = "/readers/",
    tag = "readers",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of readers", body = Vec<Reader>)
    )
)]
pub async fn list_readers(
    State(state): State<crate::AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.catalog.list_readers(&page).await?;
    Ok(Json(readers))
}

/// Get reader details by library card number, including borrowed books
#[utoipa::path(
    get,
    path = "/readers/{reader_id}",
    tag = "readers",
    params(("reader_id" = i32, Path, description = "Library card number")),
    responses(
        (status = 200, description = "Reader details", body = ReaderDetails),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reader(
    State(state): State<crate::AppState>,
    Path(reader_id): Path<i32>,
) -> AppResult<Json<ReaderDetails>> {
    let reader = state.services.catalog.get_reader(reader_id).await?;
    Ok(Json(reader))
}

/// Books currently borrowed by a reader
#[utoipa::path(
    get,
    path = "/readers/{reader_id}/books",
    tag = "readers",
    params(("reader_id" = i32, Path, description = "Reader ID")),
    responses(
        (status = 200, description = "Borrowed books", body = Vec<Book>),
        (status = 404, description = "Reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reader_books(
    State(state): State<crate::AppState>,
    Path(reader_id): Path<i32>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.get_reader_books(reader_id).await?;
    Ok(Json(books))
}
