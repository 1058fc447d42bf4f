use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the trivia API, keyed by their numeric id.
pub const CATEGORIES: [(u32, &str); 19] = [
    (9, "General Knowledge"),
    (10, "Books"),
    (11, "Film"),
    (12, "Music"),
    (13, "Musicals & Theatres"),
    (14, "Television"),
    (15, "Video Games"),
    (16, "Board Games"),
    (17, "Science & Nature"),
    (18, "Computers"),
    (19, "Mathematics"),
    (20, "Mythology"),
    (21, "Sports"),
    (22, "Geography"),
    (23, "History"),
    (24, "Politics"),
    (25, "Art"),
    (26, "Celebrities"),
    (27, "Animals"),
];

pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn category_name(id: u32) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(cid, _)| *cid == id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Resolves a category display name back to its id.
///
/// The API prefixes some names with a group ("Entertainment: Books",
/// "Science: Computers"); the prefix is ignored.
pub fn category_id(name: &str) -> Option<u32> {
    let short = name
        .rsplit_once(": ")
        .map(|(_, short)| short)
        .unwrap_or(name)
        .trim();
    CATEGORIES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(short))
        .map(|(id, _)| *id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value.trim())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Multiple,
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Multiple, QuestionType::Boolean];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One trivia question as delivered by the question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub category: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl QuestionRecord {
    pub fn category_id(&self) -> Option<u32> {
        category_id(&self.category)
    }

    /// All answers in source order: incorrect ones first, then the correct one.
    pub fn answers(&self) -> Vec<String> {
        let mut answers = self.incorrect_answers.clone();
        answers.push(self.correct_answer.clone());
        answers
    }
}

/// Parameters of one quiz fetch. `None` means "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub question_type: Option<QuestionType>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            amount: crate::names::DEFAULT_QUESTION_COUNT,
            category: None,
            difficulty: None,
            question_type: None,
        }
    }
}

fn default_total_questions() -> u32 {
    crate::names::DEFAULT_QUESTION_COUNT
}

/// One completed quiz as kept on the highscore board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub username: String,
    pub score: u32,
    pub category: u32,
    pub difficulty: String,
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_total_questions")]
    pub total_questions: u32,
}

impl ScoreRecord {
    pub fn category_name(&self) -> &'static str {
        category_name(self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_table_covers_nine_through_twenty_seven() {
        assert_eq!(CATEGORIES.len(), 19);
        for (expected, (id, _)) in (9..=27).zip(CATEGORIES.iter()) {
            assert_eq!(expected, *id);
        }
    }

    #[test]
    fn unknown_category_ids_display_as_unknown() {
        assert_eq!(category_name(9), "General Knowledge");
        assert_eq!(category_name(27), "Animals");
        assert_eq!(category_name(8), "Unknown");
        assert_eq!(category_name(31), "Unknown");
    }

    #[test]
    fn category_id_accepts_api_group_prefixes() {
        assert_eq!(category_id("General Knowledge"), Some(9));
        assert_eq!(category_id("Entertainment: Books"), Some(10));
        assert_eq!(category_id("Science: Computers"), Some(18));
        assert_eq!(category_id("Science & Nature"), Some(17));
        assert_eq!(category_id("Entertainment: Japanese Anime & Manga"), None);
    }

    #[test]
    fn question_record_decodes_api_shape() {
        let json = r#"{
            "type": "boolean",
            "difficulty": "easy",
            "category": "General Knowledge",
            "question": "The Great Wall of China is visible from space.",
            "correct_answer": "False",
            "incorrect_answers": ["True"]
        }"#;
        let q: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, QuestionType::Boolean);
        assert_eq!(q.difficulty, Difficulty::Easy);
        assert_eq!(q.answers(), vec!["True".to_string(), "False".to_string()]);
        assert_eq!(q.category_id(), Some(9));
    }

    #[test]
    fn score_record_defaults_missing_total_questions() {
        let json = r#"{
            "username": "Alice",
            "score": 7,
            "category": 9,
            "difficulty": "easy",
            "date": "2026-01-02T10:00:00.000Z"
        }"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_questions, 10);
        assert_eq!(record.category_name(), "General Knowledge");

        let stored = serde_json::to_value(&record).unwrap();
        assert!(stored.get("date").is_some());
        assert!(stored.get("totalQuestions").is_some());
    }

    #[test]
    fn enums_parse_their_wire_names() {
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("any"), None);
        assert_eq!(QuestionType::parse("multiple"), Some(QuestionType::Multiple));
        assert_eq!(QuestionType::parse(""), None);
    }
}
