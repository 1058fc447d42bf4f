use axum::{
    extract::{Form, Query, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use maud::Markup;
use rust_i18n::t;

use super::{current_view, dispatch, markup_or_no_session, SaveScoreBody};
use crate::{
    extractors::{IsHtmx, Locale, QuizToken},
    highscores::HighscoreBoard,
    models::QuizConfig,
    names,
    quiz::{stored_best_score, QuizEvent, QuizSession, QuizState},
    rejections::{AppError, ResultExt},
    settings::SettingsQuery,
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn start_quiz(
    State(state): State<AppState>,
    QuizToken(previous): QuizToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<SettingsQuery>,
) -> Result<Response, AppError> {
    if let Some(previous) = previous {
        state.sessions.end(&previous);
    }

    let config = QuizConfig::from_query(&query);
    let best_score = stored_best_score(&state.store).await.unwrap_or(0);
    let session = QuizSession::new(config, best_score);
    let body = quiz_views::quiz(session.view(), &locale);
    let token = state.sessions.start(session);
    tracing::info!("started quiz session {token} with {config:?}");

    let cookie = utils::cookie(names::QUIZ_SESSION_COOKIE_NAME, &token, state.secure_cookies)
        .parse::<HeaderValue>()
        .reject("could not build session cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    let page = views::render(is_htmx, &t!("quiz.title", locale = &locale), body, &locale);
    Ok((headers, page).into_response())
}

/// Fetches the question batch for a loading session. The session lock is
/// released while the request is in flight.
pub(crate) async fn load_questions(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
) -> Markup {
    let Some(token) = token else {
        return quiz_views::no_session(&locale);
    };

    let pending = state.sessions.with_session(&token, |session| {
        matches!(session.state(), QuizState::Loading { .. }).then(|| *session.config())
    });

    match pending {
        None => quiz_views::no_session(&locale),
        Some(None) => markup_or_no_session(current_view(&state, Some(&token), &locale), &locale),
        Some(Some(config)) => {
            let batch = state.trivia.load_batch(&config).await;
            let result = dispatch(&state, Some(&token), QuizEvent::BatchLoaded(batch), &locale);
            markup_or_no_session(result.map(|(_, markup)| markup), &locale)
        }
    }
}

pub(crate) async fn play_again(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
) -> Markup {
    let result = dispatch(&state, token.as_deref(), QuizEvent::PlayAgain, &locale);
    markup_or_no_session(result.map(|(_, markup)| markup), &locale)
}

fn normalize_username(raw: &str) -> String {
    let name: String = raw.trim().chars().take(names::MAX_USERNAME_LEN).collect();
    let name = name.trim_end();
    if name.is_empty() {
        names::ANONYMOUS_USERNAME.to_string()
    } else {
        name.to_string()
    }
}

pub(crate) async fn save_score(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
    Form(body): Form<SaveScoreBody>,
) -> Markup {
    let Some(token) = token else {
        return quiz_views::no_session(&locale);
    };

    let username = normalize_username(&body.username);
    match state
        .sessions
        .with_session(&token, |session| session.take_result(&username))
    {
        None => return quiz_views::no_session(&locale),
        Some(None) => tracing::debug!("nothing to save for session {token}"),
        Some(Some(result)) => {
            let mut board = HighscoreBoard::load(&state.store).await;
            board.add(&state.store, result).await;
        }
    }

    markup_or_no_session(current_view(&state, Some(&token), &locale), &locale)
}

pub(crate) async fn leave_quiz(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = token {
        if state.sessions.end(&token) {
            tracing::info!("ended quiz session {token}");
        }
    }

    let cookie = utils::expired_cookie(names::QUIZ_SESSION_COOKIE_NAME)
        .parse::<HeaderValue>()
        .reject("could not build session cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("HX-Redirect", HeaderValue::from_static(names::SETTINGS_URL));

    Ok((headers, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_are_trimmed_and_truncated() {
        assert_eq!(normalize_username("  ada  "), "ada");
        assert_eq!(normalize_username("   "), names::ANONYMOUS_USERNAME);
        assert_eq!(normalize_username(""), names::ANONYMOUS_USERNAME);

        let long = "x".repeat(names::MAX_USERNAME_LEN + 10);
        assert_eq!(normalize_username(&long).len(), names::MAX_USERNAME_LEN);
    }
}
