pub mod github;
pub mod local;
pub mod mock;

pub use github::GitHubClient;
pub use local::LocalRepo;

use crate::cache::Cache;
use crate::cli::CommonArgs;
use crate::model::DashboardData;
use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where dashboard data comes from for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Mock,
    Local {
        repo: Option<PathBuf>,
        author: Option<String>,
    },
    GitHub {
        user: Option<String>,
    },
}

impl Source {
    pub fn from_args(common: &CommonArgs) -> Self {
        if common.mock {
            Source::Mock
        } else if common.repo.is_some() || common.author.is_some() {
            Source::Local {
                repo: common.repo.clone(),
                author: common.author.clone(),
            }
        } else {
            Source::GitHub {
                user: common.user.clone(),
            }
        }
    }

    /// Cache row for this source; mock data is never cached.
    pub fn cache_key(&self) -> Option<String> {
        match self {
            Source::Mock => None,
            Source::Local { repo, author } => {
                let repo = repo
                    .as_deref()
                    .map(|p| p.canonicalize().unwrap_or_else(|_| p.to_path_buf()))
                    .unwrap_or_else(|| PathBuf::from("."));
                Some(format!(
                    "local:{}:{}",
                    repo.display(),
                    author.as_deref().unwrap_or("*")
                ))
            }
            Source::GitHub { user } => Some(format!("github:{}", user.as_deref().unwrap_or("@me"))),
        }
    }

    pub fn fetch(&self, today: NaiveDate) -> anyhow::Result<DashboardData> {
        match self {
            Source::Mock => Ok(mock::generate(today)),
            Source::Local { repo, author } => {
                let repo = LocalRepo::open(repo.as_ref()).context("Failed to open git repository")?;
                let progress = std::io::stderr().is_terminal();
                repo.fetch(today, author.as_deref(), progress)
                    .context("Failed to read local activity")
            }
            Source::GitHub { user } => GitHubClient::from_env()
                .context("Failed to create GitHub client")?
                .fetch(user.as_deref())
                .context("Failed to fetch GitHub stats"),
        }
    }
}

/// Fetches data for `source`, serving it from the cache while fresh.
/// Cache problems are logged and never stop the fetch.
pub fn load(
    source: &Source,
    cache_dir: Option<&Path>,
    ttl: Duration,
    today: NaiveDate,
) -> anyhow::Result<DashboardData> {
    let key = source.cache_key();
    let mut cache = match (&key, cache_dir) {
        (Some(_), Some(dir)) => match Cache::new(dir) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!("cache unavailable: {e}");
                None
            }
        },
        _ => None,
    };

    let now = Utc::now();
    if let (Some(cache), Some(key)) = (&cache, &key) {
        match cache.get(key, ttl, now) {
            Ok(Some(data)) => {
                info!(%key, "cache hit");
                return Ok(data);
            }
            Ok(None) => info!(%key, "cache miss"),
            Err(e) => warn!(%key, "cache read failed: {e}"),
        }
    }

    let data = source.fetch(today)?;

    if let (Some(cache), Some(key)) = (&mut cache, &key) {
        if let Err(e) = cache.put(key, &data, now) {
            warn!(%key, "cache write failed: {e}");
        }
    }

    Ok(data)
}
