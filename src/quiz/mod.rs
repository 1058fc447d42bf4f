//! Quiz runner: the per-player session state machine, its result summary and
//! the registry holding live sessions.

mod registry;
mod session;
mod summary;
mod view;

pub use registry::SessionRegistry;
pub use session::{shuffled_answers, Outcome, QuizEvent, QuizSession, QuizState};
pub use summary::{accuracy, save_best_score, stored_best_score, QuizSummary, ScoreMessage};
pub use view::{AnswerState, AnswerView, Control, QuestionView, QuizView, ResultsView};
