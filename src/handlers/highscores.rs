use axum::{
    extract::{Form, Query, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, Locale},
    highscores::{
        compute_statistics, ranked_podium, remaining_list, BoardSource, CategoryFilter,
        Confirmation, HighscoreBoard,
    },
    names, views,
    views::highscores as highscores_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HIGHSCORES_URL, get(highscores_page))
        .route(names::CLEAR_HIGHSCORES_URL, post(clear_highscores))
}

#[derive(Deserialize, Default)]
struct BoardQuery {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Deserialize)]
struct ClearBody {
    #[serde(default)]
    confirm: String,
    /// The filter the board was showing, kept for the re-render.
    #[serde(default)]
    category: Option<String>,
}

fn parse_filter(category: Option<&str>) -> CategoryFilter {
    category.map(CategoryFilter::parse).unwrap_or(CategoryFilter::All)
}

fn board_data(board: &HighscoreBoard, filter: CategoryFilter) -> highscores_views::BoardData {
    let records = board.filter(filter);
    highscores_views::BoardData {
        filter,
        statistics: compute_statistics(&records),
        podium: ranked_podium(&records).to_vec(),
        remaining: remaining_list(&records)
            .into_iter()
            .map(|(rank, record)| (rank, record.clone()))
            .collect(),
        demo: board.source() == BoardSource::Demo,
    }
}

async fn highscores_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<BoardQuery>,
) -> Markup {
    let filter = parse_filter(query.category.as_deref());
    let board = HighscoreBoard::load(&state.store).await;

    views::render(
        is_htmx,
        &t!("highscores.title", locale = &locale),
        highscores_views::board(board_data(&board, filter), &locale),
        &locale,
    )
}

/// Requires `confirm=yes`; anything else leaves the board untouched. The
/// board is re-rendered with the filter it was showing.
async fn clear_highscores(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Form(body): Form<ClearBody>,
) -> Markup {
    let confirmation = if body.confirm == "yes" {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    };

    let mut board = HighscoreBoard::load(&state.store).await;
    if !board.clear_all(&state.store, confirmation).await {
        tracing::debug!("highscore clear was not confirmed");
    }

    let filter = parse_filter(body.category.as_deref());
    views::titled(
        &t!("highscores.title", locale = &locale),
        highscores_views::board(board_data(&board, filter), &locale),
    )
}
