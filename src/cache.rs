use crate::error::{AuraError, Result};
use crate::model::{DashboardData, SCHEMA_VERSION};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

pub const CACHE_FILE: &str = "cache.db";

/// Response cache for fetched dashboard data, one row per source key.
pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref();
        std::fs::create_dir_all(cache_dir)?;
        let conn = Connection::open(cache_dir.join(CACHE_FILE))?;
        let mut cache = Self { conn };
        cache.initialize()?;
        Ok(cache)
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let mut cache = Self {
            conn: Connection::open_in_memory()?,
        };
        cache.initialize()?;
        Ok(cache)
    }

    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS responses (
                key TEXT PRIMARY KEY,
                fetched_at INTEGER NOT NULL,
                payload TEXT NOT NULL
            );
            ",
        )?;
        self.check_schema_version()?;
        Ok(())
    }

    fn check_schema_version(&mut self) -> Result<()> {
        let user_version: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if user_version == 0 {
            let set_stmt = format!("PRAGMA user_version = {SCHEMA_VERSION};");
            self.conn.execute_batch(&set_stmt)?;
        } else if user_version != SCHEMA_VERSION as i64 {
            return Err(AuraError::Cache(format!(
                "Schema version mismatch: expected {}, found {}",
                SCHEMA_VERSION, user_version
            )));
        }

        Ok(())
    }

    /// Returns the stored payload for `key` unless it is older than `ttl`.
    pub fn get(&self, key: &str, ttl: Duration, now: DateTime<Utc>) -> Result<Option<DashboardData>> {
        let result = self.conn.query_row(
            "SELECT fetched_at, payload FROM responses WHERE key = ?",
            params![key],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
        );

        let (fetched_at, payload) = match result {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let fetched_at = Utc
            .timestamp_opt(fetched_at, 0)
            .single()
            .ok_or_else(|| AuraError::Cache(format!("Invalid timestamp for '{key}': {fetched_at}")))?;

        if now - fetched_at >= ttl {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&payload)?))
    }

    pub fn put(&mut self, key: &str, data: &DashboardData, now: DateTime<Utc>) -> Result<()> {
        let payload = serde_json::to_string(data)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO responses (key, fetched_at, payload) VALUES (?, ?, ?)",
            params![key, now.timestamp(), payload],
        )?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM responses", [])?)
    }
}

/// `<platform cache dir>/aurafarm`, or `./.aurafarm` when there is none.
pub fn default_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("aurafarm"))
        .unwrap_or_else(|| PathBuf::from(".aurafarm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivitySnapshot, LanguageUsage, Profile, Rgb};
    use pretty_assertions::assert_eq;

    fn data() -> DashboardData {
        DashboardData {
            profile: Profile {
                name: Some("Mock User".into()),
                login: "mockuser".into(),
                followers: 3,
                repositories: 2,
            },
            snapshot: ActivitySnapshot::empty(),
            languages: vec![LanguageUsage::new("Rust", 1200, Rgb::new(0xde, 0xa5, 0x84))],
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn fresh_entries_are_returned() {
        let mut cache = Cache::in_memory().unwrap();
        cache.put("github:mockuser", &data(), at(1_000)).unwrap();
        let hit = cache
            .get("github:mockuser", Duration::hours(1), at(1_000 + 60))
            .unwrap();
        assert_eq!(hit, Some(data()));
    }

    #[test]
    fn stale_or_missing_entries_are_misses() {
        let mut cache = Cache::in_memory().unwrap();
        cache.put("github:mockuser", &data(), at(0)).unwrap();
        assert_eq!(cache.get("github:mockuser", Duration::hours(1), at(3_600)).unwrap(), None);
        assert_eq!(cache.get("local:/tmp/x", Duration::hours(1), at(1)).unwrap(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let mut cache = Cache::in_memory().unwrap();
        cache.put("a", &data(), at(0)).unwrap();
        cache.put("b", &data(), at(0)).unwrap();
        assert_eq!(cache.clear().unwrap(), 2);
        assert_eq!(cache.get("a", Duration::hours(1), at(1)).unwrap(), None);
    }

    #[test]
    fn reopening_keeps_entries_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        Cache::new(dir.path()).unwrap().put("k", &data(), at(10)).unwrap();
        let reopened = Cache::new(dir.path()).unwrap();
        assert!(reopened.get("k", Duration::hours(1), at(20)).unwrap().is_some());
    }

    #[test]
    fn schema_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let conn = Connection::open(dir.path().join(CACHE_FILE)).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        drop(conn);
        assert!(matches!(Cache::new(dir.path()), Err(AuraError::Cache(_))));
    }
}
