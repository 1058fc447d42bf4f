//! String-keyed persistent storage used by the quiz runner and the highscore
//! board. Nothing here is transactional; concurrent writers win in order.

use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex},
};

use color_eyre::{eyre::eyre, Result};

use crate::db::Db;

pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Process-local storage, used when no database is reachable and in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| eyre!("memory storage lock poisoned"))
    }
}

impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The store the application runs on.
#[derive(Clone)]
pub enum Store {
    Db(Db),
    Memory(MemoryStorage),
}

impl Store {
    pub fn memory() -> Self {
        Store::Memory(MemoryStorage::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Store::Db(_) => "database",
            Store::Memory(_) => "memory",
        }
    }
}

impl Storage for Store {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Store::Db(db) => db.get_value(key).await,
            Store::Memory(mem) => mem.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Store::Db(db) => db.set_value(key, value).await,
            Store::Memory(mem) => mem.set(key, value).await,
        }
    }
}

/// A store whose every read and write fails, standing in for a database
/// that went away.
#[cfg(test)]
pub(crate) struct UnavailableStorage;

#[cfg(test)]
impl Storage for UnavailableStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Err(eyre!("storage unavailable while reading {key}"))
    }

    async fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(eyre!("storage unavailable while writing {key}"))
    }
}
