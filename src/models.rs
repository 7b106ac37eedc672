use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub page_count: i32,
    pub language: String,
}

impl Book {
    /// Overwrites the editable fields. `id` and `published_date` are kept.
    pub fn apply(&mut self, changes: BookUpdate) {
        self.title = changes.title;
        self.author = changes.author;
        self.publisher = changes.publisher;
        self.page_count = changes.page_count;
        self.language = changes.language;
    }
}

/// Payload for `POST /api/v1/books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub page_count: i32,
    pub language: String,
}

impl BookCreate {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_text(&mut errors, "title", &self.title);
        require_text(&mut errors, "author", &self.author);
        require_text(&mut errors, "publisher", &self.publisher);
        require_text(&mut errors, "published_date", &self.published_date);
        require_page_count(&mut errors, self.page_count);
        require_text(&mut errors, "language", &self.language);
        into_result(errors)
    }

    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            published_date: self.published_date,
            page_count: self.page_count,
            language: self.language,
        }
    }
}

/// Payload for `PATCH /api/v1/books/{id}`. Has no `published_date`: a
/// book's publication date is fixed once it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub page_count: i32,
    pub language: String,
}

impl BookUpdate {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require_text(&mut errors, "title", &self.title);
        require_text(&mut errors, "author", &self.author);
        require_text(&mut errors, "publisher", &self.publisher);
        require_page_count(&mut errors, self.page_count);
        require_text(&mut errors, "language", &self.language);
        into_result(errors)
    }
}

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be blank"));
    }
}

fn require_page_count(errors: &mut Vec<FieldError>, page_count: i32) {
    if page_count < 0 {
        errors.push(FieldError::new("page_count", "must not be negative"));
    }
}

fn into_result(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: &'static str,
    pub user: User,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Selected request headers echoed back by `GET /get_headers`.
#[derive(Debug, Default, Serialize)]
pub struct EchoedHeaders {
    #[serde(rename = "User-Agent")]
    pub user_agent: Option<String>,
    #[serde(rename = "Accept-Encoding")]
    pub accept_encoding: Option<String>,
    #[serde(rename = "Referer")]
    pub referer: Option<String>,
    #[serde(rename = "Accept-Language")]
    pub accept_language: Option<String>,
    #[serde(rename = "Connection")]
    pub connection: Option<String>,
    #[serde(rename = "Host")]
    pub host: Option<String>,
}
