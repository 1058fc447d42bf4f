pub const SETTINGS_URL: &str = "/";
pub const SETTINGS_PREVIEW_URL: &str = "/settings/preview";
pub const SUBMIT_SETTINGS_URL: &str = "/settings";
pub const HIGHSCORES_URL: &str = "/highscores";
pub const CLEAR_HIGHSCORES_URL: &str = "/highscores/clear";
pub const QUIZ_URL: &str = "/quiz";
pub const LOAD_QUESTIONS_URL: &str = "/quiz/load";
pub const SUBMIT_ANSWER_URL: &str = "/quiz/answer";
pub const NEXT_QUESTION_URL: &str = "/quiz/next";
pub const SHOW_RESULTS_URL: &str = "/quiz/results";
pub const PLAY_AGAIN_URL: &str = "/quiz/play-again";
pub const SAVE_SCORE_URL: &str = "/quiz/save";
pub const LEAVE_QUIZ_URL: &str = "/quiz/leave";

pub fn feedback_url(question_idx: usize) -> String {
    format!("/quiz/feedback/{question_idx}")
}

pub fn highscores_filter_url(category: u32) -> String {
    format!("{HIGHSCORES_URL}?category={category}")
}

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

// Trivia API
pub const DEFAULT_TRIVIA_API_URL: &str = "https://opentdb.com/api.php";

// Quiz settings
pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 50;
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

// Client-side timers, in milliseconds
pub const FEEDBACK_DELAY_MS: u64 = 1500;
pub const PLAY_AGAIN_DELAY_MS: u64 = 1000;

// Sessions idle longer than this are pruned
pub const SESSION_IDLE_SECS: u64 = 3600;

// Persistent store keys
pub const ALL_HIGHSCORES_KEY: &str = "triviaAllHighscores";
pub const HIGH_SCORE_KEY: &str = "triviaHighScore";

pub const ANONYMOUS_USERNAME: &str = "Anonymous";
pub const MAX_USERNAME_LEN: usize = 24;

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "de"];
pub const SET_LOCALE_URL: &str = "/set-locale";
