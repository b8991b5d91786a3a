//! Catalog management service (books, readers and the loan toggle)

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, CreateBook},
        pagination::PageQuery,
        reader::{CreateReader, Reader, ReaderDetails},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book to the catalog, initially on the shelf
    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        let book = self.repository.books_create(data).await?;
        tracing::info!("Catalog: created book id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }

    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books_list(query).await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Lend a book. Rejected with `Conflict` if someone already holds it.
    pub async fn borrow_book(&self, book_id: i32, reader_id: i32) -> AppResult<Book> {
        // Verify reader exists
        self.repository.readers_get_by_id(reader_id).await?;

        let book = self.repository.books_borrow(book_id, reader_id).await?;
        tracing::info!("Catalog: book id={} borrowed by reader id={}", book.id, reader_id);
        Ok(book)
    }

    /// Take a book back. Rejected with `Conflict` if it is not out.
    pub async fn return_book(&self, book_id: i32) -> AppResult<Book> {
        let book = self.repository.books_return(book_id).await?;
        tracing::info!("Catalog: book id={} returned", book.id);
        Ok(book)
    }

    pub async fn create_reader(&self, data: &CreateReader) -> AppResult<Reader> {
        let reader = self.repository.readers_create(data).await?;
        tracing::info!(
            "Catalog: created reader id={} reader_id={}",
            reader.id,
            reader.reader_id
        );
        Ok(reader)
    }

    pub async fn list_readers(&self, page: &PageQuery) -> AppResult<Vec<Reader>> {
        self.repository.readers_list(page).await
    }

    /// Reader (looked up by card number) with the books currently on loan to them
    pub async fn get_reader(&self, card: i32) -> AppResult<ReaderDetails> {
        let reader = self.repository.readers_get_by_card(card).await?;
        let borrowed_books = self.repository.books_list_by_borrower(reader.id).await?;
        Ok(ReaderDetails {
            reader,
            borrowed_books,
        })
    }

    pub async fn get_reader_books(&self, id: i32) -> AppResult<Vec<Book>> {
        // Verify reader exists
        self.repository.readers_get_by_id(id).await?;
        self.repository.books_list_by_borrower(id).await
    }

    /// Database connectivity check
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
