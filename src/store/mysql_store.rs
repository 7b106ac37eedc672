use mysql::prelude::*;
use mysql::{params, Pool, TxOpts};
use tracing::{debug, info};

use super::{BookStore, StoreError, StoreResult};
use crate::models::{Book, BookCreate, BookUpdate};

const CREATE_TABLE: &str = r"CREATE TABLE IF NOT EXISTS books (
    id BIGINT NOT NULL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    author VARCHAR(255) NOT NULL,
    publisher VARCHAR(255) NOT NULL,
    published_date VARCHAR(64) NOT NULL,
    page_count INT NOT NULL,
    language VARCHAR(64) NOT NULL
)";

const CREATE_ID_LOCK_TABLE: &str = r"CREATE TABLE IF NOT EXISTS books_id_lock (
    id TINYINT NOT NULL PRIMARY KEY
)";

const SEED_ID_LOCK: &str = "INSERT IGNORE INTO books_id_lock (id) VALUES (1)";

// Row lock on a row that always exists. Serialises id allocation even
// when `books` is empty and MAX(id) would only take a gap lock.
const LOCK_ID_ALLOCATION: &str = "SELECT id FROM books_id_lock WHERE id = 1 FOR UPDATE";

const SELECT_ALL: &str = "SELECT id, title, author, publisher, published_date, page_count, language \
     FROM books ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, title, author, publisher, published_date, page_count, language \
     FROM books WHERE id = ?";

const SELECT_BY_ID_FOR_UPDATE: &str = "SELECT id, title, author, publisher, published_date, page_count, language \
     FROM books WHERE id = ? FOR UPDATE";

const NEXT_ID: &str = "SELECT COALESCE(MAX(id), 0) + 1 FROM books FOR UPDATE";

const INSERT: &str = "INSERT INTO books (id, title, author, publisher, published_date, page_count, language) \
     VALUES (:id, :title, :author, :publisher, :published_date, :page_count, :language)";

const UPDATE: &str = "UPDATE books SET title = :title, author = :author, publisher = :publisher, \
     page_count = :page_count, language = :language WHERE id = :id";

const DELETE: &str = "DELETE FROM books WHERE id = ?";

type BookRow = (i64, String, String, String, String, i32, String);

fn book_from_row(
    (id, title, author, publisher, published_date, page_count, language): BookRow,
) -> Book {
    Book {
        id,
        title,
        author,
        publisher,
        published_date,
        page_count,
        language,
    }
}

/// Books persisted in a MySQL `books` table.
#[derive(Clone)]
pub struct MySqlBookStore {
    pool: Pool,
}

impl MySqlBookStore {
    pub fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = Pool::new(database_url)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the `books` table and its id allocation lock row if missing.
    pub fn init_schema(&self) -> StoreResult<()> {
        let mut conn = self.pool.get_conn()?;
        conn.query_drop(CREATE_TABLE)?;
        conn.query_drop(CREATE_ID_LOCK_TABLE)?;
        conn.query_drop(SEED_ID_LOCK)?;
        info!("books table ready");
        Ok(())
    }
}

impl BookStore for MySqlBookStore {
    fn list(&self) -> StoreResult<Vec<Book>> {
        let mut conn = self.pool.get_conn()?;
        let rows: Vec<BookRow> = conn.query(SELECT_ALL)?;
        Ok(rows.into_iter().map(book_from_row).collect())
    }

    fn create(&self, new_book: BookCreate) -> StoreResult<Book> {
        let mut conn = self.pool.get_conn()?;
        let mut tx = conn.start_transaction(TxOpts::default())?;

        tx.query_drop(LOCK_ID_ALLOCATION)?;
        let id = tx.query_first::<i64, _>(NEXT_ID)?.unwrap_or(1);
        tx.exec_drop(
            INSERT,
            params! {
                "id" => id,
                "title" => &new_book.title,
                "author" => &new_book.author,
                "publisher" => &new_book.publisher,
                "published_date" => &new_book.published_date,
                "page_count" => new_book.page_count,
                "language" => &new_book.language,
            },
        )?;
        tx.commit()?;

        debug!("Inserted book {}", id);
        Ok(new_book.into_book(id))
    }

    fn get(&self, id: i64) -> StoreResult<Book> {
        let mut conn = self.pool.get_conn()?;
        conn.exec_first::<BookRow, _, _>(SELECT_BY_ID, (id,))?
            .map(book_from_row)
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: i64, changes: BookUpdate) -> StoreResult<Book> {
        let mut conn = self.pool.get_conn()?;
        let mut tx = conn.start_transaction(TxOpts::default())?;

        // an early return drops `tx`, which rolls it back
        let mut book = tx
            .exec_first::<BookRow, _, _>(SELECT_BY_ID_FOR_UPDATE, (id,))?
            .map(book_from_row)
            .ok_or(StoreError::NotFound(id))?;
        book.apply(changes);

        tx.exec_drop(
            UPDATE,
            params! {
                "id" => book.id,
                "title" => &book.title,
                "author" => &book.author,
                "publisher" => &book.publisher,
                "page_count" => book.page_count,
                "language" => &book.language,
            },
        )?;
        tx.commit()?;

        Ok(book)
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let mut conn = self.pool.get_conn()?;
        // single statement, atomic without an explicit transaction
        conn.exec_drop(DELETE, (id,))?;
        if conn.affected_rows() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
