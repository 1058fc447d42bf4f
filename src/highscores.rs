//! Highscore board: the persisted collection of completed quizzes, its
//! filtering, ranking and aggregate statistics.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{models::ScoreRecord, names, storage::Storage, utils};

pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSource {
    Stored,
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(u32),
}

impl CategoryFilter {
    /// `"all"`, empty or unparseable selections mean all categories.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(id) => CategoryFilter::Category(id),
            Err(_) => CategoryFilter::All,
        }
    }

    pub fn as_param(self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Category(id) => id.to_string(),
        }
    }

    pub fn matches(self, record: &ScoreRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => record.category == id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_players: usize,
    pub top_score: Option<u32>,
    pub average_score: Option<u32>,
}

/// A result about to be added to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub username: String,
    pub score: u32,
    pub category: u32,
    pub difficulty: String,
    pub total_questions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone)]
pub struct HighscoreBoard {
    records: Vec<ScoreRecord>,
    source: BoardSource,
}

impl HighscoreBoard {
    /// Loads the stored collection, falling back to demo data when the store
    /// is empty, unreadable or holds something that is not a JSON array.
    /// Records scoring below 1 or failing to decode are discarded.
    pub async fn load(store: &impl Storage) -> Self {
        let (records, source) = match store.get(names::ALL_HIGHSCORES_KEY).await {
            Ok(Some(raw)) => match decode_records(&raw) {
                Some(records) => (records, BoardSource::Stored),
                None => {
                    tracing::warn!("stored highscores are not a JSON array, using demo data");
                    (demo_records(), BoardSource::Demo)
                }
            },
            Ok(None) => (demo_records(), BoardSource::Demo),
            Err(e) => {
                tracing::warn!("storage not available, using demo data: {e}");
                (demo_records(), BoardSource::Demo)
            }
        };

        Self::from_records(records, source)
    }

    pub fn from_records(records: Vec<ScoreRecord>, source: BoardSource) -> Self {
        let mut records: Vec<ScoreRecord> = records.into_iter().filter(|r| r.score >= 1).collect();
        sort_by_score(&mut records);
        Self { records, source }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn source(&self) -> BoardSource {
        self.source
    }

    pub fn filter(&self, filter: CategoryFilter) -> Vec<ScoreRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Appends a result stamped with the current time and persists the board.
    pub async fn add(&mut self, store: &impl Storage, score: NewScore) -> ScoreRecord {
        self.add_at(store, score, Utc::now()).await
    }

    pub async fn add_at(
        &mut self,
        store: &impl Storage,
        score: NewScore,
        timestamp: DateTime<Utc>,
    ) -> ScoreRecord {
        let record = ScoreRecord {
            username: score.username,
            score: score.score,
            category: score.category,
            difficulty: score.difficulty,
            timestamp,
            total_questions: score.total_questions,
        };
        tracing::info!(
            "adding score {} for {} in category {}",
            record.score,
            record.username,
            record.category
        );

        self.records.push(record.clone());
        sort_by_score(&mut self.records);
        self.save(store).await;
        record
    }

    /// Empties the board. Nothing happens unless the user confirmed.
    pub async fn clear_all(&mut self, store: &impl Storage, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Confirmed {
            return false;
        }
        tracing::info!("clearing {} highscores", self.records.len());
        self.records.clear();
        self.save(store).await;
        true
    }

    async fn save(&mut self, store: &impl Storage) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("could not serialize highscores: {e}");
                return;
            }
        };
        match store.set(names::ALL_HIGHSCORES_KEY, &json).await {
            Ok(()) => self.source = BoardSource::Stored,
            Err(e) => tracing::warn!("cannot save highscores: {e}"),
        }
    }
}

// Stable, so equal scores keep their insertion order.
fn sort_by_score(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| b.score.cmp(&a.score));
}

fn decode_records(raw: &str) -> Option<Vec<ScoreRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ScoreRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("discarding unreadable highscore: {e}");
                None
            }
        })
        .collect();
    Some(records)
}

pub fn compute_statistics(records: &[ScoreRecord]) -> Statistics {
    let total_players = records
        .iter()
        .map(|r| r.username.as_str())
        .collect::<HashSet<_>>()
        .len();
    let top_score = records.iter().map(|r| r.score).max();
    let average_score = if records.is_empty() {
        None
    } else {
        let sum: u64 = records.iter().map(|r| u64::from(r.score)).sum();
        Some(utils::rounded_ratio(sum, records.len() as u64))
    };

    Statistics {
        total_players,
        top_score,
        average_score,
    }
}

/// The best three records, in order. Shorter when there are fewer records.
pub fn ranked_podium(records: &[ScoreRecord]) -> &[ScoreRecord] {
    &records[..records.len().min(PODIUM_SIZE)]
}

/// Records below the podium, paired with their display rank.
pub fn remaining_list(records: &[ScoreRecord]) -> Vec<(usize, &ScoreRecord)> {
    records
        .iter()
        .enumerate()
        .skip(PODIUM_SIZE)
        .map(|(i, r)| (i + 1, r))
        .collect()
}

fn demo_record(username: &str, score: u32, category: u32, difficulty: &str, date: &str, total: u32) -> ScoreRecord {
    ScoreRecord {
        username: username.to_string(),
        score,
        category,
        difficulty: difficulty.to_string(),
        timestamp: DateTime::parse_from_rfc3339(date)
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_default(),
        total_questions: total,
    }
}

/// Fixed scores shown while nothing has been stored yet.
pub fn demo_records() -> Vec<ScoreRecord> {
    vec![
        demo_record("QuizMaster", 10, 9, "hard", "2026-09-28T18:42:00Z", 10),
        demo_record("BrainBox", 9, 17, "medium", "2026-09-27T20:15:00Z", 10),
        demo_record("TriviaTom", 8, 23, "easy", "2026-09-26T09:03:00Z", 10),
        demo_record("Lena", 7, 22, "medium", "2026-09-25T14:30:00Z", 10),
        demo_record("QuizMaster", 6, 18, "hard", "2026-09-24T21:11:00Z", 10),
        demo_record("Max", 5, 21, "easy", "2026-09-23T16:47:00Z", 10),
        demo_record("Sophie", 4, 12, "medium", "2026-09-22T11:20:00Z", 5),
        demo_record("Jonas", 3, 27, "easy", "2026-09-21T08:55:00Z", 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Store, UnavailableStorage};

    fn record(username: &str, score: u32, category: u32) -> ScoreRecord {
        ScoreRecord {
            username: username.to_string(),
            score,
            category,
            difficulty: "easy".to_string(),
            timestamp: Utc::now(),
            total_questions: 10,
        }
    }

    fn new_score(username: &str, score: u32) -> NewScore {
        NewScore {
            username: username.to_string(),
            score,
            category: 9,
            difficulty: "easy".to_string(),
            total_questions: 10,
        }
    }

    #[test]
    fn statistics_of_three_records() {
        let records = vec![record("a", 10, 9), record("b", 20, 9), record("a", 30, 9)];
        let stats = compute_statistics(&records);
        assert_eq!(stats.top_score, Some(30));
        assert_eq!(stats.average_score, Some(20));
        assert_eq!(stats.total_players, 2);
    }

    #[test]
    fn statistics_count_usernames_case_sensitively() {
        let records = vec![record("alice", 1, 9), record("Alice", 2, 9)];
        assert_eq!(compute_statistics(&records).total_players, 2);
    }

    #[test]
    fn statistics_average_rounds_half_up() {
        let records = vec![record("a", 1, 9), record("b", 2, 9)];
        assert_eq!(compute_statistics(&records).average_score, Some(2));
        let records = vec![record("a", 1, 9), record("b", 1, 9), record("c", 2, 9)];
        assert_eq!(compute_statistics(&records).average_score, Some(1));
    }

    #[test]
    fn statistics_of_nothing() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.top_score, None);
        assert_eq!(stats.average_score, None);
    }

    #[test]
    fn records_below_one_are_discarded_and_sorted() {
        let board = HighscoreBoard::from_records(
            vec![record("zero", 0, 9), record("low", 2, 9), record("high", 8, 9)],
            BoardSource::Stored,
        );
        let names: Vec<_> = board.records().iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["high", "low"]);
    }

    #[test]
    fn equal_scores_keep_their_order() {
        let board = HighscoreBoard::from_records(
            vec![record("first", 5, 9), record("top", 9, 9), record("second", 5, 9)],
            BoardSource::Stored,
        );
        let names: Vec<_> = board.records().iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
    }

    #[test]
    fn filter_by_exact_category() {
        let board = HighscoreBoard::from_records(
            vec![record("a", 5, 9), record("b", 4, 10), record("c", 3, 9)],
            BoardSource::Stored,
        );
        assert_eq!(board.filter(CategoryFilter::All).len(), 3);
        let general = board.filter(CategoryFilter::Category(9));
        assert_eq!(general.len(), 2);
        assert!(general.iter().all(|r| r.category == 9));
        assert!(board.filter(CategoryFilter::Category(27)).is_empty());
    }

    #[test]
    fn category_filter_parsing() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("12"), CategoryFilter::Category(12));
        assert_eq!(CategoryFilter::Category(12).as_param(), "12");
        assert_eq!(CategoryFilter::All.as_param(), "all");
    }

    #[test]
    fn podium_and_remaining_ranks() {
        let records: Vec<_> = (1..=6).rev().map(|s| record("p", s, 9)).collect();
        let podium = ranked_podium(&records);
        assert_eq!(podium.iter().map(|r| r.score).collect::<Vec<_>>(), vec![6, 5, 4]);

        let rest = remaining_list(&records);
        assert_eq!(
            rest.iter().map(|(rank, r)| (*rank, r.score)).collect::<Vec<_>>(),
            vec![(4, 3), (5, 2), (6, 1)]
        );
    }

    #[test]
    fn short_podium_without_remaining() {
        let records = vec![record("a", 7, 9), record("b", 3, 9)];
        let podium = ranked_podium(&records);
        assert_eq!(podium.len(), 2);
        assert_eq!(podium[0].score, 7);
        assert!(remaining_list(&records).is_empty());
        assert!(ranked_podium(&[]).is_empty());
    }

    #[tokio::test]
    async fn empty_store_loads_demo_data() {
        let store = Store::memory();
        let board = HighscoreBoard::load(&store).await;
        assert_eq!(board.source(), BoardSource::Demo);
        assert_eq!(board.records().len(), demo_records().len());
        assert!(board.records().windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn corrupt_store_loads_demo_data() {
        let store = Store::memory();
        store.set(names::ALL_HIGHSCORES_KEY, "{not json").await.unwrap();
        let board = HighscoreBoard::load(&store).await;
        assert_eq!(board.source(), BoardSource::Demo);
    }

    #[tokio::test]
    async fn unreadable_records_are_dropped_individually() {
        let store = Store::memory();
        let raw = r#"[
            {"username":"ok","score":3,"category":9,"difficulty":"easy","date":"2026-01-01T00:00:00Z","totalQuestions":5},
            {"username":"negative","score":-1,"category":9,"difficulty":"easy","date":"2026-01-01T00:00:00Z"},
            {"username":"zero","score":0,"category":9,"difficulty":"easy","date":"2026-01-01T00:00:00Z"}
        ]"#;
        store.set(names::ALL_HIGHSCORES_KEY, raw).await.unwrap();
        let board = HighscoreBoard::load(&store).await;
        assert_eq!(board.source(), BoardSource::Stored);
        assert_eq!(board.records().len(), 1);
        assert_eq!(board.records()[0].username, "ok");
    }

    #[tokio::test]
    async fn add_persists_and_sorts() {
        let store = Store::memory();
        let mut board = HighscoreBoard::load(&store).await;
        board.clear_all(&store, Confirmation::Confirmed).await;

        board.add(&store, new_score("Bob", 3)).await;
        let added = board.add(&store, new_score("Alice", 7)).await;
        assert_eq!(added.total_questions, 10);

        let reloaded = HighscoreBoard::load(&store).await;
        assert_eq!(reloaded.source(), BoardSource::Stored);
        assert_eq!(reloaded.records()[0].username, "Alice");
        assert_eq!(reloaded.records()[0].timestamp, added.timestamp);
        assert_eq!(reloaded.records()[1].username, "Bob");
    }

    #[tokio::test]
    async fn tied_scores_list_new_record_after_existing_ones() {
        let store = Store::memory();
        let mut board = HighscoreBoard::from_records(Vec::new(), BoardSource::Stored);
        board.add(&store, new_score("first", 5)).await;
        board.add(&store, new_score("second", 5)).await;
        let names: Vec<_> = board.records().iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn clear_requires_confirmation() {
        let store = Store::memory();
        let mut board = HighscoreBoard::load(&store).await;
        assert!(!board.clear_all(&store, Confirmation::Declined).await);
        assert!(!board.records().is_empty());

        assert!(board.clear_all(&store, Confirmation::Confirmed).await);
        assert!(board.records().is_empty());

        let reloaded = HighscoreBoard::load(&store).await;
        assert!(reloaded.records().is_empty());
        assert_eq!(reloaded.source(), BoardSource::Stored);
    }

    #[tokio::test]
    async fn unavailable_store_degrades_to_demo_data() {
        let store = UnavailableStorage;
        let mut board = HighscoreBoard::load(&store).await;
        assert_eq!(board.source(), BoardSource::Demo);
        assert_eq!(board.records(), demo_records().as_slice());

        let added = board.add(&store, new_score("Offline", 42)).await;
        assert_eq!(board.records()[0], added);
        assert_eq!(board.records().len(), demo_records().len() + 1);
        assert_eq!(board.source(), BoardSource::Demo);

        assert!(board.clear_all(&store, Confirmation::Confirmed).await);
        assert!(board.records().is_empty());
        assert_eq!(board.source(), BoardSource::Demo);
    }
}
