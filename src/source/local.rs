use crate::error::{AuraError, Result};
use crate::model::{ActivitySnapshot, DashboardData, LanguageUsage, Profile, Rgb, CALENDAR_WEEKS};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use gix::{discover, ObjectId, Repository};
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension to language name and GitHub linguist color.
const EXTENSION_LANGUAGES: &[(&str, &str, Rgb)] = &[
    ("rs", "Rust", Rgb::new(0xde, 0xa5, 0x84)),
    ("py", "Python", Rgb::new(0x35, 0x72, 0xa5)),
    ("js", "JavaScript", Rgb::new(0xf1, 0xe0, 0x5a)),
    ("mjs", "JavaScript", Rgb::new(0xf1, 0xe0, 0x5a)),
    ("jsx", "JavaScript", Rgb::new(0xf1, 0xe0, 0x5a)),
    ("ts", "TypeScript", Rgb::new(0x31, 0x78, 0xc6)),
    ("tsx", "TypeScript", Rgb::new(0x31, 0x78, 0xc6)),
    ("go", "Go", Rgb::new(0x00, 0xad, 0xd8)),
    ("java", "Java", Rgb::new(0xb0, 0x72, 0x19)),
    ("kt", "Kotlin", Rgb::new(0xa9, 0x7b, 0xff)),
    ("scala", "Scala", Rgb::new(0xc2, 0x2d, 0x40)),
    ("c", "C", Rgb::new(0x55, 0x55, 0x55)),
    ("h", "C", Rgb::new(0x55, 0x55, 0x55)),
    ("cc", "C++", Rgb::new(0xf3, 0x4b, 0x7d)),
    ("cpp", "C++", Rgb::new(0xf3, 0x4b, 0x7d)),
    ("hpp", "C++", Rgb::new(0xf3, 0x4b, 0x7d)),
    ("cs", "C#", Rgb::new(0x17, 0x86, 0x00)),
    ("rb", "Ruby", Rgb::new(0x70, 0x15, 0x16)),
    ("php", "PHP", Rgb::new(0x4f, 0x5d, 0x95)),
    ("swift", "Swift", Rgb::new(0xf0, 0x51, 0x38)),
    ("dart", "Dart", Rgb::new(0x00, 0xb4, 0xab)),
    ("ex", "Elixir", Rgb::new(0x6e, 0x4a, 0x7e)),
    ("exs", "Elixir", Rgb::new(0x6e, 0x4a, 0x7e)),
    ("hs", "Haskell", Rgb::new(0x5e, 0x50, 0x86)),
    ("lua", "Lua", Rgb::new(0x00, 0x00, 0x80)),
    ("zig", "Zig", Rgb::new(0xec, 0x91, 0x5c)),
    ("sh", "Shell", Rgb::new(0x89, 0xe0, 0x51)),
    ("bash", "Shell", Rgb::new(0x89, 0xe0, 0x51)),
    ("html", "HTML", Rgb::new(0xe3, 0x4c, 0x26)),
    ("css", "CSS", Rgb::new(0x56, 0x3d, 0x7c)),
    ("scss", "SCSS", Rgb::new(0xc6, 0x53, 0x8c)),
    ("vue", "Vue", Rgb::new(0x41, 0xb8, 0x83)),
    ("nix", "Nix", Rgb::new(0x7e, 0x7e, 0xff)),
];

pub fn language_for_path(path: &Path) -> Option<(&'static str, Rgb)> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_LANGUAGES
        .iter()
        .find(|(e, _, _)| *e == ext)
        .map(|&(_, name, color)| (name, color))
}

pub struct LocalRepo {
    repo: Repository,
    path: PathBuf,
}

impl LocalRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    /// Commits per author-local day on or after `since`, reachable from HEAD.
    /// `author` filters by case-insensitive substring of name or email.
    pub fn daily_commit_counts(
        &self,
        since: NaiveDate,
        author: Option<&str>,
        progress: bool,
    ) -> Result<BTreeMap<NaiveDate, u32>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let author = author.map(str::to_lowercase);
        let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = vec![head_commit.id];

        let pb = if progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} {pos}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Reading commit history...");
            pb
        } else {
            ProgressBar::hidden()
        };

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            stack.extend(commit.parent_ids().map(ObjectId::from));
            pb.inc(1);

            let time = commit.time()?;
            let offset = FixedOffset::east_opt(time.offset).unwrap_or(Utc.fix());
            let Some(date) = DateTime::from_timestamp(time.seconds, 0)
                .map(|dt| dt.with_timezone(&offset).date_naive())
            else {
                warn!(%commit_id, seconds = time.seconds, "skipping commit with invalid timestamp");
                continue;
            };
            if date < since {
                continue;
            }

            if let Some(needle) = &author {
                let signature = commit.author()?;
                let name = signature.name.to_string().to_lowercase();
                let email = signature.email.to_string().to_lowercase();
                if !name.contains(needle.as_str()) && !email.contains(needle.as_str()) {
                    continue;
                }
            }

            *counts.entry(date).or_insert(0) += 1;
        }

        pb.finish_and_clear();
        debug!(commits = seen.len(), days = counts.len(), "walked history");
        Ok(counts)
    }

    /// Bytes per language in the working tree, honoring ignore files.
    pub fn language_usage(&self) -> Vec<LanguageUsage> {
        let mut sizes: Vec<LanguageUsage> = Vec::new();

        for entry in WalkBuilder::new(&self.path).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable path: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let Some((name, color)) = language_for_path(entry.path()) else {
                continue;
            };
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    warn!("skipping {}: {e}", entry.path().display());
                    continue;
                }
            };

            match sizes.iter_mut().find(|u| u.language == name) {
                Some(usage) => usage.size += size,
                None => sizes.push(LanguageUsage::new(name, size, color)),
            }
        }

        sizes
    }

    pub fn fetch(&self, today: NaiveDate, author: Option<&str>, progress: bool) -> Result<DashboardData> {
        let since = today - Duration::weeks(CALENDAR_WEEKS as i64);
        let counts = self.daily_commit_counts(since, author, progress)?;
        let snapshot = ActivitySnapshot::from_daily_counts(&counts, today);

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AuraError::GitRepo(format!("No directory name for {}", self.path.display())))?;

        Ok(DashboardData {
            profile: Profile {
                name: author.map(str::to_string),
                login: name,
                followers: 0,
                repositories: 1,
            },
            snapshot,
            languages: self.language_usage(),
        })
    }
}
