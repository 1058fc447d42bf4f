use rand::{seq::SliceRandom, Rng};

use super::summary::QuizSummary;
use crate::{
    highscores::NewScore,
    models::{QuestionRecord, QuizConfig},
    trivia::{BatchSource, QuestionBatch},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for a question batch. `replay` is set after "play again".
    Loading { replay: bool },
    Presenting { index: usize },
    Answered {
        index: usize,
        selected: usize,
        correct: bool,
        feedback_elapsed: bool,
    },
    Finished(QuizSummary),
}

#[derive(Debug)]
pub enum QuizEvent {
    BatchLoaded(QuestionBatch),
    /// Selection of an answer by its position in the shuffled answer list.
    Select(usize),
    FeedbackElapsed { index: usize },
    Next,
    ShowResults { stored_best: Option<u32> },
    PlayAgain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event does not apply to the current state; nothing changed.
    Ignored,
    Applied,
    /// Applied, and the caller must persist this score as the new best.
    NewBestScore(u32),
    /// Applied, and the caller must load a new batch.
    FetchRequested,
}

/// Returns the answers of `question` in uniformly random order.
pub fn shuffled_answers<R: Rng + ?Sized>(question: &QuestionRecord, rng: &mut R) -> Vec<String> {
    let mut answers = question.answers();
    answers.shuffle(rng);
    answers
}

/// One player's quiz, from fetching questions to the result summary.
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<QuestionRecord>,
    source: Option<BatchSource>,
    state: QuizState,
    score: u32,
    answers: Vec<String>,
    best_score: u32,
    saved: bool,
}

impl QuizSession {
    pub fn new(config: QuizConfig, best_score: u32) -> Self {
        Self {
            config,
            questions: Vec::new(),
            source: None,
            state: QuizState::Loading { replay: false },
            score: 0,
            answers: Vec::new(),
            best_score,
            saved: false,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn source(&self) -> Option<BatchSource> {
        self.source
    }

    /// Answers of the current question in presentation order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Index of the current question, or the question count once finished.
    pub fn index(&self) -> usize {
        match &self.state {
            QuizState::Loading { .. } => 0,
            QuizState::Presenting { index } | QuizState::Answered { index, .. } => *index,
            QuizState::Finished(_) => self.questions.len(),
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match &self.state {
            QuizState::Presenting { index } | QuizState::Answered { index, .. } => {
                self.questions.get(*index)
            }
            _ => None,
        }
    }

    pub fn selected_answer(&self) -> Option<&str> {
        match &self.state {
            QuizState::Answered { selected, .. } => self.answers.get(*selected).map(String::as_str),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&QuizSummary> {
        match &self.state {
            QuizState::Finished(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn handle<R: Rng + ?Sized>(&mut self, event: QuizEvent, rng: &mut R) -> Outcome {
        match (&self.state, event) {
            (QuizState::Loading { .. }, QuizEvent::BatchLoaded(batch)) => {
                let (questions, source) = batch.into_parts();
                self.questions = questions;
                self.source = Some(source);
                self.present(0, rng);
                Outcome::Applied
            }
            (QuizState::Presenting { index }, QuizEvent::Select(selected)) => {
                let index = *index;
                let Some(answer) = self.answers.get(selected) else {
                    return Outcome::Ignored;
                };
                let correct = *answer == self.questions[index].correct_answer;
                if correct {
                    self.score += 1;
                }
                self.state = QuizState::Answered {
                    index,
                    selected,
                    correct,
                    feedback_elapsed: false,
                };
                Outcome::Applied
            }
            (
                QuizState::Answered {
                    index,
                    feedback_elapsed: false,
                    ..
                },
                QuizEvent::FeedbackElapsed { index: fired_for },
            ) if *index == fired_for => {
                if let QuizState::Answered {
                    feedback_elapsed, ..
                } = &mut self.state
                {
                    *feedback_elapsed = true;
                }
                Outcome::Applied
            }
            (
                QuizState::Answered {
                    index,
                    feedback_elapsed: true,
                    ..
                },
                QuizEvent::Next,
            ) if index + 1 < self.questions.len() => {
                let next = index + 1;
                self.present(next, rng);
                Outcome::Applied
            }
            (
                QuizState::Answered {
                    index,
                    feedback_elapsed: true,
                    ..
                },
                QuizEvent::ShowResults { stored_best },
            ) if index + 1 == self.questions.len() => {
                let summary = QuizSummary::new(self.score, self.questions.len(), stored_best);
                let outcome = if summary.new_high_score {
                    self.best_score = self.score;
                    Outcome::NewBestScore(self.score)
                } else {
                    Outcome::Applied
                };
                self.state = QuizState::Finished(summary);
                outcome
            }
            (QuizState::Finished(_), QuizEvent::PlayAgain) => {
                self.questions.clear();
                self.answers.clear();
                self.source = None;
                self.score = 0;
                self.saved = false;
                self.state = QuizState::Loading { replay: true };
                Outcome::FetchRequested
            }
            _ => Outcome::Ignored,
        }
    }

    /// The finished result as it should be added to the highscore board, or
    /// `None` if the quiz is not finished or was already saved.
    pub fn take_result(&mut self, username: &str) -> Option<NewScore> {
        if self.saved {
            return None;
        }
        let summary = self.summary()?;
        let category = self
            .config
            .category
            .or_else(|| self.questions.first().and_then(QuestionRecord::category_id))
            .unwrap_or(0);
        let difficulty = self
            .config
            .difficulty
            .or_else(|| self.questions.first().map(|q| q.difficulty))
            .map(|d| d.to_string())
            .unwrap_or_default();
        let result = NewScore {
            username: username.to_string(),
            score: summary.score,
            category,
            difficulty,
            total_questions: summary.total as u32,
        };
        self.saved = true;
        Some(result)
    }

    fn present<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        self.answers = shuffled_answers(&self.questions[index], rng);
        self.state = QuizState::Presenting { index };
    }
}
