use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    highscores::{CategoryFilter, Statistics},
    models::{ScoreRecord, CATEGORIES},
    names,
    views::components,
};

pub struct BoardData {
    pub filter: CategoryFilter,
    pub statistics: Statistics,
    pub podium: Vec<ScoreRecord>,
    pub remaining: Vec<(usize, ScoreRecord)>,
    pub demo: bool,
}

fn category_filter(filter: CategoryFilter, locale: &str) -> Markup {
    html! {
        label {
            (t!("highscores.filter", locale = locale))
            select name="category"
                   hx-get=(names::HIGHSCORES_URL)
                   hx-trigger="change"
                   hx-target="main"
                   hx-push-url="true" {
                option value=(CategoryFilter::All.as_param()) selected[filter == CategoryFilter::All] {
                    (t!("highscores.all_categories", locale = locale))
                }
                @for (id, name) in CATEGORIES {
                    @let choice = CategoryFilter::Category(id);
                    option value=(choice.as_param()) selected[filter == choice] { (name) }
                }
            }
        }
    }
}

fn statistics(stats: &Statistics, locale: &str) -> Markup {
    html! {
        div.stats-grid {
            (components::stat_card(&t!("highscores.total_players", locale = locale), Some(stats.total_players as u32)))
            (components::stat_card(&t!("highscores.top_score", locale = locale), stats.top_score))
            (components::stat_card(&t!("highscores.average_score", locale = locale), stats.average_score))
        }
    }
}

fn score_fraction(record: &ScoreRecord) -> String {
    format!("{}/{}", record.score, record.total_questions)
}

fn podium(records: &[ScoreRecord]) -> Markup {
    html! {
        div.podium {
            @for (i, record) in records.iter().enumerate() {
                article class=(format!("podium-place podium-{}", i + 1)) {
                    span.podium-rank { "#" (i + 1) }
                    strong.podium-name { (record.username) }
                    span.podium-score { (score_fraction(record)) }
                    small.podium-category { (record.category_name()) }
                }
            }
        }
    }
}

fn scores_list(rows: &[(usize, ScoreRecord)], locale: &str) -> Markup {
    html! {
        @if !rows.is_empty() {
            table.scores-list {
                thead {
                    tr {
                        th { (t!("highscores.rank", locale = locale)) }
                        th { (t!("highscores.name", locale = locale)) }
                        th { (t!("highscores.score", locale = locale)) }
                        th { (t!("highscores.category", locale = locale)) }
                        th { (t!("highscores.date", locale = locale)) }
                    }
                }
                tbody {
                    @for (rank, record) in rows {
                        tr class=(format!("score-row rank-{rank}")) {
                            td { "#" (rank) }
                            td { (record.username) }
                            td { (score_fraction(record)) }
                            td { (record.category_name()) }
                            td { (record.timestamp.format("%Y-%m-%d").to_string()) }
                        }
                    }
                }
            }
        }
    }
}

fn clear_dialog(filter: CategoryFilter, locale: &str) -> Markup {
    let vals = serde_json::json!({ "confirm": "yes", "category": filter.as_param() });
    html! {
        button.secondary.outline onclick="document.getElementById('clear-dialog').showModal()" {
            (t!("highscores.clear", locale = locale))
        }
        dialog id="clear-dialog" {
            article {
                p { (t!("highscores.clear_confirm", locale = locale)) }
                footer style="display: flex; gap: 0.5rem; justify-content: flex-end;" {
                    button.secondary onclick="document.getElementById('clear-dialog').close()" {
                        (t!("highscores.cancel", locale = locale))
                    }
                    button hx-post=(names::CLEAR_HIGHSCORES_URL)
                           hx-vals=(vals.to_string())
                           hx-target="main"
                           hx-swap="innerHTML" {
                        (t!("highscores.clear", locale = locale))
                    }
                }
            }
        }
    }
}

pub fn board(data: BoardData, locale: &str) -> Markup {
    let empty = data.podium.is_empty();
    html! {
        h1 { (t!("highscores.title", locale = locale)) }
        (category_filter(data.filter, locale))

        @if data.demo {
            p.demo-notice { (t!("highscores.demo_notice", locale = locale)) }
        }

        @if empty {
            article.no-scores {
                p { (t!("highscores.no_scores", locale = locale)) }
                a role="button" href=(names::SETTINGS_URL) { (t!("highscores.play_now", locale = locale)) }
            }
        } @else {
            (statistics(&data.statistics, locale))
            (podium(&data.podium))
            (scores_list(&data.remaining, locale))
        }

        div.board-actions {
            a role="button" href=(names::SETTINGS_URL) { (t!("nav.play", locale = locale)) }
            " "
            (clear_dialog(data.filter, locale))
        }
    }
}
