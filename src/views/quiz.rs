use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    quiz::{AnswerState, Control, QuestionView, QuizView, ResultsView, ScoreMessage},
    views::components,
};

/// Renders the quiz area. Every quiz interaction swaps this element.
pub fn quiz(view: QuizView<'_>, locale: &str) -> Markup {
    html! {
        div id="quiz" {
            @match view {
                QuizView::Loading { delay_ms } => (loading(delay_ms, locale)),
                QuizView::Question(question_view) => (question(question_view, locale)),
                QuizView::Results(results_view) => (results(results_view, locale)),
            }
        }
    }
}

fn swap_target() -> (&'static str, &'static str) {
    ("#quiz", "outerHTML")
}

fn loading(delay_ms: u64, locale: &str) -> Markup {
    let (target, swap) = swap_target();
    let trigger = if delay_ms == 0 {
        "load".to_string()
    } else {
        format!("load delay:{delay_ms}ms")
    };
    html! {
        article.loading
            hx-post=(names::LOAD_QUESTIONS_URL)
            hx-trigger=(trigger)
            hx-target=(target)
            hx-swap=(swap) {
            p aria-busy="true" { (t!("quiz.loading", locale = locale)) }
        }
    }
}

fn answer_class(state: AnswerState) -> &'static str {
    match state {
        AnswerState::Open => "answer-button",
        AnswerState::Correct => "answer-button correct",
        AnswerState::Incorrect => "answer-button incorrect",
        AnswerState::Disabled => "answer-button disabled",
    }
}

fn control(control: Control, locale: &str) -> Markup {
    let (target, swap) = swap_target();
    html! {
        @match control {
            Control::None => {},
            Control::AwaitingFeedback { index } => {
                div hx-post=(names::feedback_url(index))
                    hx-trigger=(format!("load delay:{}ms", names::FEEDBACK_DELAY_MS))
                    hx-target=(target)
                    hx-swap=(swap) {}
            },
            Control::Next => {
                button hx-post=(names::NEXT_QUESTION_URL) hx-target=(target) hx-swap=(swap) {
                    (t!("quiz.next", locale = locale))
                }
            },
            Control::ShowResults => {
                button hx-post=(names::SHOW_RESULTS_URL) hx-target=(target) hx-swap=(swap) {
                    (t!("quiz.show_results", locale = locale))
                }
            },
        }
    }
}

fn leave_button(locale: &str) -> Markup {
    html! {
        button.secondary.outline hx-post=(names::LEAVE_QUIZ_URL) {
            (t!("quiz.home", locale = locale))
        }
    }
}

fn question(view: QuestionView<'_>, locale: &str) -> Markup {
    let (target, swap) = swap_target();
    html! {
        div.score-bar {
            span { (t!("quiz.score", locale = locale)) ": " strong { (view.score) } }
            span { (t!("quiz.best_score", locale = locale)) ": " strong { (view.best_score) } }
        }
        @if view.demo {
            p.demo-notice { (t!("quiz.demo_notice", locale = locale)) }
        }
        article.question-card {
            header {
                span.category-badge { (view.category) }
                p {
                    (t!("quiz.progress", locale = locale, current = view.number, total = view.total))
                }
                (components::progress_bar(view.progress_percent))
            }
            h3 { (view.question) }
            div.answers {
                @for answer in &view.answers {
                    @if answer.state == AnswerState::Open {
                        button class=(answer_class(answer.state))
                               hx-post=(names::SUBMIT_ANSWER_URL)
                               hx-vals=(format!(r#"{{"answer": "{}"}}"#, answer.index))
                               hx-target=(target)
                               hx-swap=(swap) {
                            (answer.text)
                        }
                    } @else {
                        button class=(answer_class(answer.state)) disabled {
                            (answer.text)
                        }
                    }
                }
            }
            footer {
                (control(view.control, locale))
            }
        }
        (leave_button(locale))
    }
}

fn score_message(message: ScoreMessage, locale: &str) -> String {
    match message {
        ScoreMessage::Outstanding => t!("results.message_outstanding", locale = locale),
        ScoreMessage::Great => t!("results.message_great", locale = locale),
        ScoreMessage::Good => t!("results.message_good", locale = locale),
        ScoreMessage::KeepPracticing => t!("results.message_keep_practicing", locale = locale),
    }
    .to_string()
}

fn results(view: ResultsView<'_>, locale: &str) -> Markup {
    let (target, swap) = swap_target();
    let summary = view.summary;
    html! {
        article.results {
            header {
                h2 { (t!("results.title", locale = locale)) }
            }
            p.final-score {
                strong { (summary.score) }
                span.score-total { " / " (summary.total) }
            }
            p.score-message { (score_message(summary.message, locale)) }
            table {
                tbody {
                    tr {
                        td { (t!("results.correct", locale = locale)) }
                        td { strong { (summary.score) } }
                    }
                    tr {
                        td { (t!("results.accuracy", locale = locale)) }
                        td { strong { (summary.accuracy) "%" } }
                    }
                    tr {
                        td { (t!("results.new_high_score", locale = locale)) }
                        td {
                            strong {
                                @if summary.new_high_score {
                                    (t!("results.yes", locale = locale))
                                } @else {
                                    (t!("results.no", locale = locale))
                                }
                            }
                        }
                    }
                    tr {
                        td { (t!("quiz.best_score", locale = locale)) }
                        td { strong { (view.best_score) } }
                    }
                }
            }

            @if view.saved {
                p.saved {
                    (t!("results.saved", locale = locale)) " "
                    @let board_url = match view.category {
                        Some(id) => names::highscores_filter_url(id),
                        None => names::HIGHSCORES_URL.to_string(),
                    };
                    a href=(board_url) { (t!("nav.highscores", locale = locale)) }
                }
            } @else {
                form.save-score hx-post=(names::SAVE_SCORE_URL) hx-target=(target) hx-swap=(swap) {
                    label {
                        (t!("results.username", locale = locale))
                        input name="username"
                              type="text"
                              autocomplete="nickname"
                              maxlength=(names::MAX_USERNAME_LEN)
                              placeholder=(names::ANONYMOUS_USERNAME);
                    }
                    input type="submit" value=(t!("results.save", locale = locale));
                }
            }

            footer {
                button hx-post=(names::PLAY_AGAIN_URL) hx-target=(target) hx-swap=(swap) {
                    (t!("results.play_again", locale = locale))
                }
                " "
                (leave_button(locale))
            }
        }
    }
}

/// Shown when a quiz request arrives without a live session.
pub fn no_session(locale: &str) -> Markup {
    html! {
        div id="quiz" {
            article {
                p { (t!("quiz.no_session", locale = locale)) }
                a role="button" href=(names::SETTINGS_URL) { (t!("quiz.new_quiz", locale = locale)) }
            }
        }
    }
}
