use parking_lot::Mutex;
use tracing::debug;

use super::{BookStore, StoreError, StoreResult};
use crate::models::{Book, BookCreate, BookUpdate, User};

/// Book collection held in process memory. Every operation holds the lock
/// for its whole scan.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, e.g. seed data.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

impl BookStore for MemoryBookStore {
    fn list(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books.lock().clone())
    }

    fn create(&self, new_book: BookCreate) -> StoreResult<Book> {
        let mut books = self.books.lock();
        let id = match books.iter().map(|book| book.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max))?,
            None => 1,
        };
        let book = new_book.into_book(id);
        books.push(book.clone());
        debug!("Stored book {} ({} total)", id, books.len());
        Ok(book)
    }

    fn get(&self, id: i64) -> StoreResult<Book> {
        self.books
            .lock()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: i64, changes: BookUpdate) -> StoreResult<Book> {
        let mut books = self.books.lock();
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;
        book.apply(changes);
        Ok(book.clone())
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let mut books = self.books.lock();
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;
        books.remove(index);
        Ok(())
    }
}

/// Append-only list of demo users.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, user: User) {
        self.users.lock().push(user);
    }

    pub fn list(&self) -> Vec<User> {
        self.users.lock().clone()
    }
}
