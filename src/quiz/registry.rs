use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use ulid::Ulid;

use super::session::QuizSession;
use crate::names;

struct Entry {
    session: QuizSession,
    touched: Instant,
}

/// Active quiz sessions keyed by the token stored in the player's cookie.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, Entry>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `session` and returns its token. Idle sessions are pruned.
    pub fn start(&self, session: QuizSession) -> String {
        let token = Ulid::new().to_string();
        let mut sessions = self.lock();

        let idle = Duration::from_secs(names::SESSION_IDLE_SECS);
        let before = sessions.len();
        sessions.retain(|_, entry| entry.touched.elapsed() < idle);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!("pruned {pruned} idle quiz sessions");
        }

        sessions.insert(
            token.clone(),
            Entry {
                session,
                touched: Instant::now(),
            },
        );
        token
    }

    /// Runs `f` on the session behind `token`, or returns `None` if there is none.
    pub fn with_session<T>(&self, token: &str, f: impl FnOnce(&mut QuizSession) -> T) -> Option<T> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(token)?;
        entry.touched = Instant::now();
        Some(f(&mut entry.session))
    }

    /// Tears the session down. Returns whether it existed.
    pub fn end(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
