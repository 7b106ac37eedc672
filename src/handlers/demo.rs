//! Standalone endpoints showing path/query parameters, request bodies and
//! request headers. None of them touch the book store.

use actix_web::http::header::{self, HeaderName};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::models::{EchoedHeaders, Message, User, UserCreated};
use crate::state::AppState;

const KNOWN_USERS: [&str; 3] = ["Jerry", "Joey", "Phil"];

const DEFAULT_GREETING_NAME: &str = "User";

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub username: String,
}

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(Message::new("Bookly API is running"))
}

/// GET /greet/{username}
pub async fn greet_by_path(username: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(Message::new(format!("Hello {}", username.into_inner())))
}

/// GET /greet?username=
pub async fn greet_by_query(query: web::Query<GreetQuery>) -> HttpResponse {
    let username = query
        .into_inner()
        .username
        .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string());
    HttpResponse::Ok().json(Message::new(format!("Hello {}", username)))
}

/// GET /search?username=
pub async fn search_user(query: web::Query<SearchQuery>) -> Result<HttpResponse, ApiError> {
    let username = query.into_inner().username;
    info!("GET /search - username: {:?}", username);

    if KNOWN_USERS.contains(&username.as_str()) {
        Ok(HttpResponse::Ok().json(Message::new(format!("Details for user {}", username))))
    } else {
        Err(ApiError::NotFound("User Not Found"))
    }
}

/// POST /create_user
pub async fn create_user(state: web::Data<AppState>, payload: web::Json<User>) -> HttpResponse {
    let user = payload.into_inner();
    info!("POST /create_user - username: {:?}", user.username);
    state.users.add(user.clone());

    HttpResponse::Ok().json(UserCreated {
        message: "User created successfully",
        user,
    })
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.users.list())
}

/// GET /get_headers
pub async fn get_headers(req: HttpRequest) -> HttpResponse {
    let value = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    HttpResponse::Ok().json(EchoedHeaders {
        user_agent: value(header::USER_AGENT),
        accept_encoding: value(header::ACCEPT_ENCODING),
        referer: value(header::REFERER),
        accept_language: value(header::ACCEPT_LANGUAGE),
        connection: value(header::CONNECTION),
        host: value(header::HOST),
    })
}
