//! API handlers for Reading Room REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod readers;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/", get(books::list_books).post(books::create_book))
        .route("/books/:book_id", get(books::get_book))
        .route("/books/:book_id/borrow", put(books::borrow_book))
        .route("/books/:book_id/return", put(books::return_book))
        // Readers
        .route("/readers", get(readers::list_readers).post(readers::create_reader))
        .route("/readers/", get(readers::list_readers).post(readers::create_reader))
        .route("/readers/:reader_id", get(readers::get_reader))
        .route("/readers/:reader_id/books", get(readers::get_reader_books))
        .with_state(state);

    Router::new()
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
