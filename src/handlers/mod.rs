pub mod books;
pub mod demo;

use actix_web::web;

use crate::error::{json_error_handler, path_error_handler, query_error_handler};

pub const BOOKS_PREFIX: &str = "/api/v1/books";

/// Register extractor configuration and every route on an `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/", web::get().to(demo::root))
        .route("/greet", web::get().to(demo::greet_by_query))
        .route("/greet/{username}", web::get().to(demo::greet_by_path))
        .route("/search", web::get().to(demo::search_user))
        .route("/create_user", web::post().to(demo::create_user))
        .route("/users", web::get().to(demo::list_users))
        .route("/get_headers", web::get().to(demo::get_headers))
        .service(
            web::scope(BOOKS_PREFIX)
                .route("", web::get().to(books::list_books))
                .route("", web::post().to(books::create_book))
                .route("/{book_id}", web::get().to(books::get_book))
                .route("/{book_id}", web::patch().to(books::update_book))
                .route("/{book_id}", web::delete().to(books::delete_book)),
        );
}
