rust_i18n::i18n!("locales", fallback = "en");

pub mod db;
pub mod extractors;
pub mod handlers;
pub mod highscores;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod settings;
pub mod statics;
pub mod storage;
pub mod trivia;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub store: storage::Store,
    pub trivia: trivia::TriviaClient,
    pub sessions: quiz::SessionRegistry,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::settings::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::highscores::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
