//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, readers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reading Room API",
        version = "0.1.0",
        description = "Library catalog REST API: books, readers and loans",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::borrow_book,
        books::return_book,
        // Readers
        readers::create_reader,
        readers::list_readers,
        readers::get_reader,
        readers::get_reader_books,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::BorrowBook,
            crate::models::book::BookQuery,
            crate::models::reader::Reader,
            crate::models::reader::ReaderDetails,
            crate::models::reader::CreateReader,
            crate::models::pagination::PageQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and loans"),
        (name = "readers", description = "Reader management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/books/",
            "/books/{book_id}",
            "/books/{book_id}/borrow",
            "/books/{book_id}/return",
            "/readers/",
            "/readers/{reader_id}",
            "/readers/{reader_id}/books",
            "/health",
            "/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
