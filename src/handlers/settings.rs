use axum::{
    extract::{Form, Query, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::{match_supported_locale, IsHtmx, Locale},
    models::QuizConfig,
    names,
    quiz::stored_best_score,
    rejections::{AppError, ResultExt},
    settings::{self, SettingsQuery},
    utils, views,
    views::settings as settings_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::SETTINGS_URL, get(settings_page))
        .route(names::SETTINGS_PREVIEW_URL, get(preview))
        .route(names::SUBMIT_SETTINGS_URL, post(submit_settings))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

async fn settings_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<SettingsQuery>,
) -> maud::Markup {
    let config = QuizConfig::from_query(&query);
    let data = settings_views::SettingsData {
        api_url: state.trivia.request_url(&config).to_string(),
        best_score: stored_best_score(&state.store).await,
        config,
    };
    views::render(
        is_htmx,
        &t!("settings.title", locale = &locale),
        settings_views::settings_page(data, &locale),
        &locale,
    )
}

/// Live preview of the API request the current form would make.
async fn preview(State(state): State<AppState>, Query(query): Query<SettingsQuery>) -> maud::Markup {
    let config = QuizConfig::from_query(&query);
    settings_views::api_url(state.trivia.request_url(&config).as_str())
}

/// Hands the chosen settings to the quiz page. Only reachable through htmx,
/// so the navigation happens via `HX-Redirect`.
async fn submit_settings(Form(query): Form<SettingsQuery>) -> Result<impl IntoResponse, AppError> {
    let config = QuizConfig::from_query(&query);
    let target = settings::quiz_page_url(&config);
    tracing::info!("starting quiz with {target}");

    let location = HeaderValue::from_str(&target).reject("could not build quiz location")?;
    let mut headers = HeaderMap::new();
    headers.insert("HX-Redirect", location);

    Ok((headers, ""))
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(
    State(state): State<AppState>,
    Form(body): Form<SetLocaleBody>,
) -> Result<impl IntoResponse, AppError> {
    let locale = match_supported_locale(&body.lang).ok_or(AppError::Input("unsupported locale"))?;
    let cookie = utils::cookie(names::LOCALE_COOKIE_NAME, locale, state.secure_cookies)
        .parse::<HeaderValue>()
        .reject("could not build locale cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("HX-Refresh", HeaderValue::from_static("true"));

    Ok((headers, ""))
}
