mod question;
mod session;

use axum::{
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    names,
    quiz::{Outcome, QuizEvent},
    views::quiz as quiz_views,
    AppState,
};

#[derive(Deserialize)]
struct AnswerBody {
    answer: usize,
}

#[derive(Deserialize)]
struct SaveScoreBody {
    #[serde(default)]
    username: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(session::start_quiz))
        .route(names::LOAD_QUESTIONS_URL, post(session::load_questions))
        .route(names::SUBMIT_ANSWER_URL, post(question::submit_answer))
        .route("/quiz/feedback/{index}", post(question::feedback_elapsed))
        .route(names::NEXT_QUESTION_URL, post(question::next_question))
        .route(names::SHOW_RESULTS_URL, post(question::show_results))
        .route(names::PLAY_AGAIN_URL, post(session::play_again))
        .route(names::SAVE_SCORE_URL, post(session::save_score))
        .route(names::LEAVE_QUIZ_URL, post(session::leave_quiz))
}

/// Applies `event` to the caller's session and renders the resulting view.
/// `None` means the caller has no live session.
fn dispatch(
    state: &AppState,
    token: Option<&str>,
    event: QuizEvent,
    locale: &str,
) -> Option<(Outcome, Markup)> {
    let token = token?;
    state.sessions.with_session(token, |session| {
        let outcome = session.handle(event, &mut rand::thread_rng());
        if outcome == Outcome::Ignored {
            tracing::debug!("ignored stale quiz event for session {token}");
        }
        (outcome, quiz_views::quiz(session.view(), locale))
    })
}

fn current_view(state: &AppState, token: Option<&str>, locale: &str) -> Option<Markup> {
    state
        .sessions
        .with_session(token?, |session| quiz_views::quiz(session.view(), locale))
}

fn markup_or_no_session(markup: Option<Markup>, locale: &str) -> Markup {
    markup.unwrap_or_else(|| quiz_views::no_session(locale))
}
