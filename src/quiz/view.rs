//! Presentation-independent description of what the quiz page shows.

use super::{
    session::{QuizSession, QuizState},
    summary::QuizSummary,
};
use crate::{names, trivia::BatchSource, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Open,
    Correct,
    Incorrect,
    Disabled,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AnswerView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub state: AnswerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Waiting for an answer.
    None,
    /// Feedback is showing; the timer for question `index` is pending.
    AwaitingFeedback { index: usize },
    Next,
    ShowResults,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub number: usize,
    pub total: usize,
    pub progress_percent: u32,
    pub category: &'a str,
    pub question: &'a str,
    pub answers: Vec<AnswerView<'a>>,
    pub score: u32,
    pub best_score: u32,
    pub control: Control,
    pub demo: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResultsView<'a> {
    pub summary: &'a QuizSummary,
    pub best_score: u32,
    pub saved: bool,
    /// The configured category, used to link the saved score's board.
    pub category: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum QuizView<'a> {
    Loading { delay_ms: u64 },
    Question(QuestionView<'a>),
    Results(ResultsView<'a>),
}

impl QuizSession {
    pub fn view(&self) -> QuizView<'_> {
        match self.state() {
            QuizState::Loading { replay } => QuizView::Loading {
                delay_ms: if *replay { names::PLAY_AGAIN_DELAY_MS } else { 0 },
            },
            QuizState::Presenting { index } => self.question_view(*index, None, Control::None),
            QuizState::Answered {
                index,
                selected,
                feedback_elapsed,
                ..
            } => {
                let control = if !feedback_elapsed {
                    Control::AwaitingFeedback { index: *index }
                } else if index + 1 < self.questions().len() {
                    Control::Next
                } else {
                    Control::ShowResults
                };
                self.question_view(*index, Some(*selected), control)
            }
            QuizState::Finished(summary) => QuizView::Results(ResultsView {
                summary,
                best_score: self.best_score(),
                saved: self.is_saved(),
                category: self.config().category,
            }),
        }
    }

    fn question_view(&self, index: usize, selected: Option<usize>, control: Control) -> QuizView<'_> {
        let question = &self.questions()[index];
        let total = self.questions().len();
        let answers = self
            .answers()
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let state = match selected {
                    None => AnswerState::Open,
                    Some(_) if *text == question.correct_answer => AnswerState::Correct,
                    Some(s) if s == i => AnswerState::Incorrect,
                    Some(_) => AnswerState::Disabled,
                };
                AnswerView {
                    index: i,
                    text: text.as_str(),
                    state,
                }
            })
            .collect();

        QuizView::Question(QuestionView {
            number: index + 1,
            total,
            progress_percent: utils::rounded_ratio(100 * (index as u64 + 1), total as u64),
            category: &question.category,
            question: &question.question,
            answers,
            score: self.score(),
            best_score: self.best_score(),
            control,
            demo: self.source() == Some(BatchSource::Demo),
        })
    }
}
