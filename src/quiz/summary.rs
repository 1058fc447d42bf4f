use crate::{names, storage::Storage, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMessage {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl ScoreMessage {
    pub fn for_accuracy(accuracy: u32) -> Self {
        if accuracy >= 90 {
            ScoreMessage::Outstanding
        } else if accuracy >= 70 {
            ScoreMessage::Great
        } else if accuracy >= 50 {
            ScoreMessage::Good
        } else {
            ScoreMessage::KeepPracticing
        }
    }
}

/// Percentage of correct answers, rounded to the nearest integer.
pub fn accuracy(score: u32, total: usize) -> u32 {
    utils::rounded_ratio(100 * u64::from(score), total as u64)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: usize,
    pub accuracy: u32,
    pub message: ScoreMessage,
    pub new_high_score: bool,
}

impl QuizSummary {
    /// `stored_best` is `None` when the best score could not be read; such a
    /// run never counts as a new high score.
    pub fn new(score: u32, total: usize, stored_best: Option<u32>) -> Self {
        let accuracy = accuracy(score, total);
        Self {
            score,
            total,
            accuracy,
            message: ScoreMessage::for_accuracy(accuracy),
            new_high_score: stored_best.is_some_and(|best| score > best),
        }
    }
}

/// Reads the best score ever achieved. Unreadable storage yields `None`,
/// an absent or malformed value counts as zero.
pub async fn stored_best_score(store: &impl Storage) -> Option<u32> {
    match store.get(names::HIGH_SCORE_KEY).await {
        Ok(value) => Some(
            value
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(0),
        ),
        Err(e) => {
            tracing::warn!("could not read best score: {e}");
            None
        }
    }
}

pub async fn save_best_score(store: &impl Storage, score: u32) {
    if let Err(e) = store.set(names::HIGH_SCORE_KEY, &score.to_string()).await {
        tracing::warn!("could not save best score {score}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Store, UnavailableStorage};

    #[test]
    fn message_tiers_are_evaluated_highest_first() {
        assert_eq!(ScoreMessage::for_accuracy(100), ScoreMessage::Outstanding);
        assert_eq!(ScoreMessage::for_accuracy(90), ScoreMessage::Outstanding);
        assert_eq!(ScoreMessage::for_accuracy(89), ScoreMessage::Great);
        assert_eq!(ScoreMessage::for_accuracy(70), ScoreMessage::Great);
        assert_eq!(ScoreMessage::for_accuracy(69), ScoreMessage::Good);
        assert_eq!(ScoreMessage::for_accuracy(50), ScoreMessage::Good);
        assert_eq!(ScoreMessage::for_accuracy(49), ScoreMessage::KeepPracticing);
        assert_eq!(ScoreMessage::for_accuracy(0), ScoreMessage::KeepPracticing);
    }

    #[test]
    fn accuracy_is_rounded() {
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(1, 8), 13);
        assert_eq!(accuracy(10, 10), 100);
        assert_eq!(accuracy(0, 10), 0);
    }

    #[test]
    fn new_high_score_needs_strictly_greater_score() {
        assert!(QuizSummary::new(5, 10, Some(4)).new_high_score);
        assert!(!QuizSummary::new(5, 10, Some(5)).new_high_score);
        assert!(!QuizSummary::new(5, 10, None).new_high_score);
        assert!(QuizSummary::new(1, 10, Some(0)).new_high_score);
    }

    #[tokio::test]
    async fn best_score_defaults_to_zero_and_round_trips() {
        let store = Store::memory();
        assert_eq!(stored_best_score(&store).await, Some(0));

        save_best_score(&store, 8).await;
        assert_eq!(stored_best_score(&store).await, Some(8));

        store.set(names::HIGH_SCORE_KEY, "not a number").await.unwrap();
        assert_eq!(stored_best_score(&store).await, Some(0));
    }

    #[tokio::test]
    async fn unavailable_store_never_reports_a_new_best() {
        let store = UnavailableStorage;
        let stored_best = stored_best_score(&store).await;
        assert_eq!(stored_best, None);

        let summary = QuizSummary::new(10, 10, stored_best);
        assert!(!summary.new_high_score);
        assert_eq!(summary.accuracy, 100);

        save_best_score(&store, 10).await;
        assert_eq!(stored_best_score(&store).await, None);
    }
}
