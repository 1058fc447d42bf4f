//! Client for the Open Trivia DB question API.

use color_eyre::{eyre::eyre, Result};
use scraper::Html;
use serde::Deserialize;
use url::Url;

use crate::{
    models::{Difficulty, QuestionRecord, QuestionType, QuizConfig},
    settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSource {
    Live,
    Demo,
}

/// A non-empty, ordered set of questions for one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBatch {
    questions: Vec<QuestionRecord>,
    source: BatchSource,
}

impl QuestionBatch {
    /// Returns `None` for an empty question list.
    pub fn live(questions: Vec<QuestionRecord>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            source: BatchSource::Live,
        })
    }

    /// The fixed two-question batch used whenever the API is unusable.
    pub fn demo() -> Self {
        let questions = vec![
            QuestionRecord {
                category: "General Knowledge".to_string(),
                question_type: QuestionType::Multiple,
                difficulty: Difficulty::Easy,
                question: "What is the capital of France?".to_string(),
                correct_answer: "Paris".to_string(),
                incorrect_answers: vec![
                    "London".to_string(),
                    "Berlin".to_string(),
                    "Madrid".to_string(),
                ],
            },
            QuestionRecord {
                category: "General Knowledge".to_string(),
                question_type: QuestionType::Boolean,
                difficulty: Difficulty::Easy,
                question: "The Great Wall of China is visible from space.".to_string(),
                correct_answer: "False".to_string(),
                incorrect_answers: vec!["True".to_string()],
            },
        ];
        Self {
            questions,
            source: BatchSource::Demo,
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn source(&self) -> BatchSource {
        self.source
    }

    pub fn into_parts(self) -> (Vec<QuestionRecord>, BatchSource) {
        (self.questions, self.source)
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    response_code: i32,
    #[serde(default)]
    results: Vec<QuestionRecord>,
}

fn describe_response_code(code: i32) -> &'static str {
    match code {
        0 => "success",
        1 => "no results",
        2 => "invalid parameter",
        3 => "token not found",
        4 => "token empty",
        5 => "rate limit",
        _ => "unknown response code",
    }
}

/// Decodes HTML entities the API embeds in text fields. Markup characters
/// are kept as text.
pub fn decode_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(&text.replace('<', "&lt;"))
        .root_element()
        .text()
        .collect::<String>()
}

fn decode_question(q: QuestionRecord) -> QuestionRecord {
    QuestionRecord {
        category: decode_html(&q.category),
        question: decode_html(&q.question),
        correct_answer: decode_html(&q.correct_answer),
        incorrect_answers: q.incorrect_answers.iter().map(|a| decode_html(a)).collect(),
        ..q
    }
}

#[derive(Clone)]
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TriviaClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_url(&self, config: &QuizConfig) -> Url {
        settings::compose_request_url(&self.base_url, config)
    }

    /// Fetches a live batch. Fails on transport errors, non-success HTTP
    /// status, non-zero `response_code` or an empty result list.
    pub async fn fetch_batch(&self, config: &QuizConfig) -> Result<QuestionBatch> {
        let url = self.request_url(config);
        tracing::debug!("fetching questions from {url}");

        let response: ApiResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.response_code != 0 {
            return Err(eyre!(
                "trivia API answered with code {} ({})",
                response.response_code,
                describe_response_code(response.response_code)
            ));
        }

        let questions = response.results.into_iter().map(decode_question).collect();
        QuestionBatch::live(questions).ok_or_else(|| eyre!("trivia API returned no questions"))
    }

    /// Fetches a batch, substituting the demo questions on any failure.
    pub async fn load_batch(&self, config: &QuizConfig) -> QuestionBatch {
        match self.fetch_batch(config).await {
            Ok(batch) => {
                tracing::info!("fetched {} questions", batch.questions().len());
                batch
            }
            Err(e) => {
                tracing::warn!("could not fetch questions, using demo questions: {e}");
                QuestionBatch::demo()
            }
        }
    }
}
