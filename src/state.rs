use std::sync::Arc;

use actix_web::web;

use crate::error::ApiError;
use crate::store::{BookStore, MemoryBookStore, MemoryUserStore, StoreResult};

/// Shared application state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub users: Arc<MemoryUserStore>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self {
            books,
            users: Arc::new(MemoryUserStore::new()),
        }
    }

    /// State backed entirely by process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBookStore::new()))
    }

    /// Run a book store call on the blocking thread pool.
    pub async fn with_books<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&dyn BookStore) -> StoreResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let books = Arc::clone(&self.books);
        let result = web::block(move || f(books.as_ref())).await?;
        Ok(result?)
    }
}
