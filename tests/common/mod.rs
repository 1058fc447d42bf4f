#![allow(dead_code)]

use triviaboard::{
    db::Db, quiz::SessionRegistry, storage::Store, trivia::TriviaClient, AppState,
};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("triviaboard_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("file:{}", path.display());
    Db::new(url).await.expect("failed to create test database")
}

/// App state on an in-memory store, fetching questions from `trivia_url`.
pub fn test_state(trivia_url: &str) -> AppState {
    AppState {
        store: Store::memory(),
        trivia: TriviaClient::new(trivia_url.parse().expect("valid trivia url")),
        sessions: SessionRegistry::new(),
        secure_cookies: false,
    }
}

pub fn sample_api_body() -> serde_json::Value {
    serde_json::json!({
        "response_code": 0,
        "results": [
            {
                "category": "Entertainment: Film",
                "type": "multiple",
                "difficulty": "medium",
                "question": "Which &quot;Star Wars&quot; film came out in 1980?",
                "correct_answer": "The Empire Strikes Back",
                "incorrect_answers": ["A New Hope", "Return of the Jedi", "The Phantom Menace"]
            },
            {
                "category": "Entertainment: Film",
                "type": "boolean",
                "difficulty": "medium",
                "question": "Schr&ouml;dinger&#039;s cat appears in a Pixar film.",
                "correct_answer": "False",
                "incorrect_answers": ["True"]
            }
        ]
    })
}
