//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, BorrowBook, CreateBook},
};

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "ISBN already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.create_book(&data).await?;
    Ok(Json(book))
}

/// List books, optionally filtered on title
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Page of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(book_id).await?;
    Ok(Json(book))
}

/// Lend a book to a reader
#[utoipa::path(
    put,
    path = "/books/{book_id}/borrow",
    tag = "books",
    params(("book_id" = i32, Path, description = "Book ID")),
    request_body = BorrowBook,
    responses(
        (status = 200, description = "Book borrowed", body = Book),
        (status = 400, description = "Book already borrowed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or reader not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
    Json(data): Json<BorrowBook>,
) -> AppResult<Json<Book>> {
    let book = state
        .services
        .catalog
        .borrow_book(book_id, data.borrower_id)
        .await?;
    Ok(Json(book))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/books/{book_id}/return",
    tag = "books",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Book is not borrowed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.return_book(book_id).await?;
    Ok(Json(book))
}
