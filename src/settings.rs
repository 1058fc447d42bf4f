//! Settings composer: turns the user's quiz choices into a trivia API request
//! and into the query string handed to the quiz page.

use std::num::IntErrorKind;

use serde::Deserialize;
use url::Url;

use crate::{
    models::{Difficulty, QuestionType, QuizConfig},
    names,
};

/// Builds the trivia API request for `config`. Only `amount` is always present.
pub fn compose_request_url(base: &Url, config: &QuizConfig) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("amount", &config.amount.to_string());
        if let Some(category) = config.category {
            query.append_pair("category", &category.to_string());
        }
        if let Some(difficulty) = config.difficulty {
            query.append_pair("difficulty", difficulty.as_str());
        }
        if let Some(question_type) = config.question_type {
            query.append_pair("type", question_type.as_str());
        }
    }
    url
}

/// The optionally signed run of digits `raw` starts with, after leading
/// whitespace. `"7abc"` and `"7.5"` both read as `"7"`.
fn leading_integer(raw: &str) -> &str {
    let text = raw.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    &text[..sign + digits]
}

/// Parses a requested question count and clamps it into the supported range.
///
/// Only the leading integer counts. Input without one falls back to the
/// minimum.
pub fn validate_amount(raw: &str) -> u32 {
    let (min, max) = (
        i64::from(names::MIN_QUESTION_COUNT),
        i64::from(names::MAX_QUESTION_COUNT),
    );
    let value = match leading_integer(raw).parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => max,
            _ => min,
        },
    };
    value.clamp(min, max) as u32
}

/// Quiz page URL carrying `config` as query parameters. "Any" selections are
/// sent as empty values.
pub fn quiz_page_url(config: &QuizConfig) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("amount", &config.amount.to_string())
        .append_pair(
            "category",
            &config.category.map(|c| c.to_string()).unwrap_or_default(),
        )
        .append_pair(
            "difficulty",
            config.difficulty.map(Difficulty::as_str).unwrap_or_default(),
        )
        .append_pair(
            "type",
            config.question_type.map(QuestionType::as_str).unwrap_or_default(),
        )
        .finish();
    format!("{}?{query}", names::QUIZ_URL)
}

/// Raw settings as submitted by the form or carried on the quiz page URL.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub question_type: Option<String>,
}

impl QuizConfig {
    /// Reads a config from handoff parameters. A missing amount uses the form
    /// default; anything unrecognised in the other fields means "any".
    pub fn from_query(query: &SettingsQuery) -> Self {
        let amount = query
            .amount
            .as_deref()
            .map(validate_amount)
            .unwrap_or(names::DEFAULT_QUESTION_COUNT);
        let category = query
            .category
            .as_deref()
            .and_then(|c| c.trim().parse::<u32>().ok());
        let difficulty = query.difficulty.as_deref().and_then(Difficulty::parse);
        let question_type = query.question_type.as_deref().and_then(QuestionType::parse);

        Self {
            amount,
            category,
            difficulty,
            question_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(names::DEFAULT_TRIVIA_API_URL).unwrap()
    }

    #[test]
    fn request_url_always_carries_amount() {
        for amount in [1, 10, 50] {
            let config = QuizConfig {
                amount,
                ..QuizConfig::default()
            };
            let url = compose_request_url(&base(), &config);
            assert_eq!(
                url.as_str(),
                format!("https://opentdb.com/api.php?amount={amount}")
            );
        }
    }

    #[test]
    fn request_url_includes_selected_parameters_only() {
        let config = QuizConfig {
            amount: 5,
            category: Some(18),
            difficulty: None,
            question_type: Some(QuestionType::Boolean),
        };
        let url = compose_request_url(&base(), &config);
        assert_eq!(
            url.as_str(),
            "https://opentdb.com/api.php?amount=5&category=18&type=boolean"
        );
        assert!(!url.query().unwrap().contains("difficulty"));
    }

    #[test]
    fn request_url_with_every_parameter() {
        let config = QuizConfig {
            amount: 20,
            category: Some(9),
            difficulty: Some(Difficulty::Hard),
            question_type: Some(QuestionType::Multiple),
        };
        let url = compose_request_url(&base(), &config);
        assert_eq!(
            url.query(),
            Some("amount=20&category=9&difficulty=hard&type=multiple")
        );
    }

    #[test]
    fn amount_is_clamped_into_range() {
        assert_eq!(validate_amount("0"), 1);
        assert_eq!(validate_amount("-7"), 1);
        assert_eq!(validate_amount("51"), 50);
        assert_eq!(validate_amount("1000"), 50);
        for n in 1..=50 {
            assert_eq!(validate_amount(&n.to_string()), n);
        }
    }

    #[test]
    fn amount_validation_is_idempotent() {
        for raw in ["-3", "0", "1", "17", "50", "99", "abc", ""] {
            let once = validate_amount(raw);
            assert_eq!(validate_amount(&once.to_string()), once);
        }
    }

    // Input without a leading integer is treated as the minimum.
    #[test]
    fn non_numeric_amount_defaults_to_minimum() {
        assert_eq!(validate_amount(""), 1);
        assert_eq!(validate_amount("ten"), 1);
        assert_eq!(validate_amount("-"), 1);
        assert_eq!(validate_amount(".5"), 1);
    }

    #[test]
    fn amount_reads_the_leading_integer() {
        assert_eq!(validate_amount("4.5"), 4);
        assert_eq!(validate_amount("7abc"), 7);
        assert_eq!(validate_amount("  12 questions"), 12);
        assert_eq!(validate_amount("+30"), 30);
        assert_eq!(validate_amount("-4.5"), 1);
        assert_eq!(validate_amount("80e2"), 50);
    }

    #[test]
    fn overflowing_amount_saturates() {
        assert_eq!(validate_amount("99999999999999999999999"), 50);
        assert_eq!(validate_amount("-99999999999999999999999"), 1);
    }

    #[test]
    fn quiz_page_url_encodes_any_as_empty() {
        let config = QuizConfig {
            amount: 12,
            category: None,
            difficulty: Some(Difficulty::Medium),
            question_type: None,
        };
        assert_eq!(
            quiz_page_url(&config),
            "/quiz?amount=12&category=&difficulty=medium&type="
        );
    }

    #[test]
    fn config_from_query_round_trips_through_page_url() {
        let config = QuizConfig {
            amount: 7,
            category: Some(23),
            difficulty: Some(Difficulty::Easy),
            question_type: Some(QuestionType::Multiple),
        };
        let page_url = quiz_page_url(&config);
        let query = page_url.split_once('?').unwrap().1;
        let parsed: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let get = |k: &str| {
            parsed
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.clone())
        };
        let settings = SettingsQuery {
            amount: get("amount"),
            category: get("category"),
            difficulty: get("difficulty"),
            question_type: get("type"),
        };
        assert_eq!(QuizConfig::from_query(&settings), config);
    }

    #[test]
    fn config_from_query_defaults() {
        let config = QuizConfig::from_query(&SettingsQuery::default());
        assert_eq!(config, QuizConfig::default());

        let config = QuizConfig::from_query(&SettingsQuery {
            amount: Some("75".to_string()),
            category: Some("any".to_string()),
            difficulty: Some("impossible".to_string()),
            question_type: Some(String::new()),
        });
        assert_eq!(config.amount, 50);
        assert_eq!(config.category, None);
        assert_eq!(config.difficulty, None);
        assert_eq!(config.question_type, None);
    }
}
