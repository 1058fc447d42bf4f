use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{Difficulty, QuestionType, QuizConfig, CATEGORIES},
    names,
};

pub struct SettingsData {
    pub config: QuizConfig,
    pub api_url: String,
    pub best_score: Option<u32>,
}

pub fn api_url(url: &str) -> Markup {
    html! {
        code id="api-url" { (url) }
    }
}

fn difficulty_label(difficulty: Difficulty, locale: &str) -> String {
    match difficulty {
        Difficulty::Easy => t!("settings.difficulty_easy", locale = locale),
        Difficulty::Medium => t!("settings.difficulty_medium", locale = locale),
        Difficulty::Hard => t!("settings.difficulty_hard", locale = locale),
    }
    .to_string()
}

fn type_label(question_type: QuestionType, locale: &str) -> String {
    match question_type {
        QuestionType::Multiple => t!("settings.type_multiple", locale = locale),
        QuestionType::Boolean => t!("settings.type_boolean", locale = locale),
    }
    .to_string()
}

pub fn settings_page(data: SettingsData, locale: &str) -> Markup {
    let config = data.config;
    html! {
        h1 { (t!("settings.title", locale = locale)) }
        p { (t!("settings.intro", locale = locale)) }

        @if let Some(best) = data.best_score {
            p.best-score { (t!("settings.best_score", locale = locale, score = best)) }
        }

        article style="width: fit-content;" {
            form hx-post=(names::SUBMIT_SETTINGS_URL)
                 hx-disabled-elt="find input[type='submit']" {
                fieldset hx-get=(names::SETTINGS_PREVIEW_URL)
                         hx-include="closest form"
                         hx-trigger="change, input delay:200ms"
                         hx-target="#api-url"
                         hx-swap="outerHTML" {
                    label {
                        (t!("settings.question_count", locale = locale))
                        input name="amount"
                              type="number"
                              min=(names::MIN_QUESTION_COUNT)
                              max=(names::MAX_QUESTION_COUNT)
                              value=(config.amount)
                              required;
                        small {
                            (t!("settings.question_count_hint",
                                locale = locale,
                                min = names::MIN_QUESTION_COUNT,
                                max = names::MAX_QUESTION_COUNT))
                        }
                    }
                    label {
                        (t!("settings.category", locale = locale))
                        select name="category" {
                            option value="" selected[config.category.is_none()] {
                                (t!("settings.any_category", locale = locale))
                            }
                            @for (id, name) in CATEGORIES {
                                option value=(id) selected[config.category == Some(id)] { (name) }
                            }
                        }
                    }
                    label {
                        (t!("settings.difficulty", locale = locale))
                        select name="difficulty" {
                            option value="" selected[config.difficulty.is_none()] {
                                (t!("settings.any_difficulty", locale = locale))
                            }
                            @for difficulty in Difficulty::ALL {
                                option value=(difficulty.as_str()) selected[config.difficulty == Some(difficulty)] {
                                    (difficulty_label(difficulty, locale))
                                }
                            }
                        }
                    }
                    label {
                        (t!("settings.type", locale = locale))
                        select name="type" {
                            option value="" selected[config.question_type.is_none()] {
                                (t!("settings.any_type", locale = locale))
                            }
                            @for question_type in QuestionType::ALL {
                                option value=(question_type.as_str()) selected[config.question_type == Some(question_type)] {
                                    (type_label(question_type, locale))
                                }
                            }
                        }
                    }
                }
                p {
                    small { (t!("settings.api_url", locale = locale)) }
                    br;
                    (api_url(&data.api_url))
                }
                input type="submit" value=(t!("settings.start", locale = locale));
            }
        }
    }
}
