use actix_web::{web, HttpResponse};
use tracing::info;

use crate::error::ApiError;
use crate::models::{BookCreate, BookUpdate};
use crate::state::AppState;

/// GET /api/v1/books
pub async fn list_books(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("GET /api/v1/books");
    let books = state.with_books(|store| store.list()).await?;
    Ok(HttpResponse::Ok().json(books))
}

/// POST /api/v1/books
pub async fn create_book(
    state: web::Data<AppState>,
    payload: web::Json<BookCreate>,
) -> Result<HttpResponse, ApiError> {
    let new_book = payload.into_inner();
    info!("POST /api/v1/books - title: {:?}", new_book.title);
    new_book.validate()?;

    let book = state.with_books(move |store| store.create(new_book)).await?;
    Ok(HttpResponse::Created().json(book))
}

/// GET /api/v1/books/{book_id}
pub async fn get_book(
    state: web::Data<AppState>,
    book_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = book_id.into_inner();
    info!("GET /api/v1/books/{}", id);
    let book = state.with_books(move |store| store.get(id)).await?;
    Ok(HttpResponse::Ok().json(book))
}

/// PATCH /api/v1/books/{book_id}
pub async fn update_book(
    state: web::Data<AppState>,
    book_id: web::Path<i64>,
    payload: web::Json<BookUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = book_id.into_inner();
    let changes = payload.into_inner();
    info!("PATCH /api/v1/books/{}", id);
    changes.validate()?;

    let book = state
        .with_books(move |store| store.update(id, changes))
        .await?;
    Ok(HttpResponse::Ok().json(book))
}

/// DELETE /api/v1/books/{book_id}
pub async fn delete_book(
    state: web::Data<AppState>,
    book_id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = book_id.into_inner();
    info!("DELETE /api/v1/books/{}", id);
    state.with_books(move |store| store.delete(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}
