// Database module - string key-value storage on libsql

use std::sync::Arc;
use color_eyre::{eyre::OptionExt, Result};

mod kv;
mod schema;

// Main database handle
#[derive(Clone)]
pub struct Db {
    db: Arc<libsql::Database>,
}

impl Db {
    /// Opens a local database. `url` may carry a `file:` prefix.
    pub async fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let path = url.strip_prefix("file:").unwrap_or(&url);
        let db = libsql::Builder::new_local(path).build().await?;

        let conn = db.connect()?;

        // Verify connection
        let one = conn
            .query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or_eyre("connection check failed")?
            .get::<i32>(0)?;
        assert_eq!(one, 1);

        schema::create_schema(&conn).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { db: Arc::new(db) })
    }

    fn connect(&self) -> Result<libsql::Connection> {
        Ok(self.db.connect()?)
    }
}
