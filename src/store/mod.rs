//! # Book storage
//!
//! `BookStore` abstracts over where books live so handlers can work with
//! either the in-memory list or the MySQL table without modification.
//!
//! Ids are assigned by the store as the current maximum id plus one (1 for
//! an empty collection), so listing by id and listing by insertion order
//! agree for both backends.

mod memory;
mod mysql_store;

pub use self::memory::{MemoryBookStore, MemoryUserStore};
pub use self::mysql_store::MySqlBookStore;

use thiserror::Error;

use crate::models::{Book, BookCreate, BookUpdate};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Book {0} not found")]
    NotFound(i64),

    #[error("No book id left after {0}")]
    IdsExhausted(i64),

    #[error("Database error: {0}")]
    Database(#[from] mysql::Error),
}

/// Blocking CRUD over the book collection.
///
/// Calls may block on I/O; async callers should go through
/// `actix_web::web::block`.
pub trait BookStore: Send + Sync {
    /// All books in insertion order.
    fn list(&self) -> StoreResult<Vec<Book>>;

    /// Assign the next id, store the book and return it.
    fn create(&self, new_book: BookCreate) -> StoreResult<Book>;

    fn get(&self, id: i64) -> StoreResult<Book>;

    /// Replace the editable fields of an existing book.
    fn update(&self, id: i64, changes: BookUpdate) -> StoreResult<Book>;

    fn delete(&self, id: i64) -> StoreResult<()>;
}
