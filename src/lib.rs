//! Bookly: a small REST API over a collection of books, plus a few
//! standalone request-handling endpoints.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use handlers::configure;
pub use models::{Book, BookCreate, BookUpdate, User};
pub use state::AppState;
