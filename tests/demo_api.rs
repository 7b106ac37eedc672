use actix_web::http::{header, StatusCode};
use actix_web::middleware::NormalizePath;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use bookly::{configure, AppState, User};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .wrap(NormalizePath::trim())
                .configure(configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn root_reports_readiness() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "Bookly API is running" }));
}

#[actix_rt::test]
async fn greet_by_path() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/greet/Alice").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "Hello Alice" }));
}

#[actix_rt::test]
async fn greet_by_query_uses_given_name() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/greet?username=Bob").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "Hello Bob" }));
}

#[actix_rt::test]
async fn greet_without_name_defaults_to_user() {
    let app = init_app!();

    for uri in ["/greet", "/greet/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "message": "Hello User" }));
    }
}

#[actix_rt::test]
async fn search_finds_known_user() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/search?username=Jerry")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Details for user Jerry" }));
}

#[actix_rt::test]
async fn search_unknown_user_is_not_found() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/search?username=Bob").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "User Not Found" }));
}

#[actix_rt::test]
async fn search_is_case_sensitive() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/search?username=jerry").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn search_without_username_is_a_validation_error() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"][0]["field"], "query");
}

#[actix_rt::test]
async fn created_users_are_listed_in_order() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/create_user")
        .set_json(json!({ "username": "joey", "email": "joey@example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "message": "User created successfully",
            "user": { "username": "joey", "email": "joey@example.com" }
        })
    );

    let req = test::TestRequest::post()
        .uri("/create_user")
        .set_json(json!({ "username": "phil", "email": "phil@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/users").to_request();
    let users: Vec<User> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["joey", "phil"]);
}

#[actix_rt::test]
async fn create_user_requires_email() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/create_user")
        .set_json(json!({ "username": "joey" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn get_headers_echoes_present_and_nulls_missing() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/get_headers")
        .insert_header((header::USER_AGENT, "bookly-test/1.0"))
        .insert_header((header::REFERER, "http://localhost/docs"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["User-Agent"], "bookly-test/1.0");
    assert_eq!(body["Referer"], "http://localhost/docs");
    assert!(body["Accept-Language"].is_null());
    assert!(body["Accept-Encoding"].is_null());
    for key in [
        "User-Agent",
        "Accept-Encoding",
        "Referer",
        "Accept-Language",
        "Connection",
        "Host",
    ] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
}
