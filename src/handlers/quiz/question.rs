use axum::extract::{Form, Path, State};
use maud::Markup;

use super::{dispatch, markup_or_no_session, AnswerBody};
use crate::{
    extractors::{Locale, QuizToken},
    quiz::{save_best_score, stored_best_score, Outcome, QuizEvent},
    AppState,
};

pub(crate) async fn submit_answer(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
    Form(body): Form<AnswerBody>,
) -> Markup {
    let result = dispatch(&state, token.as_deref(), QuizEvent::Select(body.answer), &locale);
    markup_or_no_session(result.map(|(_, markup)| markup), &locale)
}

pub(crate) async fn feedback_elapsed(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
    Path(index): Path<usize>,
) -> Markup {
    let result = dispatch(
        &state,
        token.as_deref(),
        QuizEvent::FeedbackElapsed { index },
        &locale,
    );
    markup_or_no_session(result.map(|(_, markup)| markup), &locale)
}

pub(crate) async fn next_question(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
) -> Markup {
    let result = dispatch(&state, token.as_deref(), QuizEvent::Next, &locale);
    markup_or_no_session(result.map(|(_, markup)| markup), &locale)
}

pub(crate) async fn show_results(
    State(state): State<AppState>,
    QuizToken(token): QuizToken,
    Locale(locale): Locale,
) -> Markup {
    let stored_best = stored_best_score(&state.store).await;
    let result = dispatch(
        &state,
        token.as_deref(),
        QuizEvent::ShowResults { stored_best },
        &locale,
    );

    if let Some((Outcome::NewBestScore(score), _)) = &result {
        tracing::info!("new best score {score}");
        save_best_score(&state.store, *score).await;
    }
    markup_or_no_session(result.map(|(_, markup)| markup), &locale)
}
