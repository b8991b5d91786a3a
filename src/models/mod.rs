//! Data models for Reading Room

pub mod book;
pub mod pagination;
pub mod reader;

// Re-export commonly used types
pub use book::{Book, BookQuery, BorrowBook, CreateBook};
pub use pagination::PageQuery;
pub use reader::{CreateReader, Reader, ReaderDetails};
