use color_eyre::{eyre::WrapErr, Result};

use super::Db;

impl Db {
    pub async fn get_value(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT value FROM kv_store WHERE key = ?1",
                libsql::params![key],
            )
            .await
            .wrap_err_with(|| format!("could not read key {key}"))?;

        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    pub async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
            "#,
            libsql::params![key, value],
        )
        .await
        .wrap_err_with(|| format!("could not write key {key}"))?;

        tracing::debug!("stored {} bytes under {key}", value.len());
        Ok(())
    }
}
