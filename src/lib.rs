//! Reading Room Library Catalog
//!
//! A small REST JSON API over a PostgreSQL catalog of books and readers,
//! with a borrow/return toggle on books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
