use crate::cache::{self, Cache};
use crate::dashboard::DashboardView;
use crate::languages::DEFAULT_TOP_K;
use crate::source::{self, Source};
use crate::theme::{theme_index, Palette};
use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "aurafarm")]
#[command(about = "Contribution calendar, streaks, and language breakdown in your terminal")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Use generated data instead of fetching")]
    pub mock: bool,

    #[arg(long, help = "Read activity from a local git repository instead of GitHub")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Only count local commits whose author name or email contains this")]
    pub author: Option<String>,

    #[arg(long, help = "GitHub login to show (defaults to the authenticated user)")]
    pub user: Option<String>,

    #[arg(long, help = "Directory for the response cache and logs")]
    pub cache: Option<PathBuf>,

    #[arg(long, help = "Always fetch fresh data", default_value_t = false)]
    pub no_cache: bool,

    #[arg(long, help = "How long cached responses stay fresh", default_value = "1h", value_parser = humantime::parse_duration)]
    pub cache_ttl: std::time::Duration,

    #[arg(long, help = "Theme name or index", default_value = "0")]
    pub theme: String,

    #[arg(long, help = "Five comma separated #rrggbb intensity colors")]
    pub palette: Option<String>,

    #[arg(long, help = "Languages to list before folding the rest into Others", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Interactive dashboard (the default)
    Dash,
    /// Print stats without the interactive UI
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Remove cached responses
    Clean,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let cache_dir = self.common.cache.clone().unwrap_or_else(cache::default_dir);
        let _log_guard = match crate::logging::init(&cache_dir, self.common.log_level.as_deref()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("warning: logging disabled: {e:#}");
                None
            }
        };

        let command = self.command.clone().unwrap_or(Commands::Dash);
        if let Commands::Clean = command {
            let removed = Cache::new(&cache_dir)
                .and_then(|mut c| c.clear())
                .context("Failed to clear cache")?;
            println!("Removed {removed} cached responses from {}", cache_dir.display());
            return Ok(());
        }

        let theme = theme_index(&self.common.theme)?;
        let palette = self
            .common
            .palette
            .as_deref()
            .map(Palette::parse)
            .transpose()
            .context("Invalid --palette")?;

        let ttl = Duration::from_std(self.common.cache_ttl).context("Invalid --cache-ttl")?;
        let today = Local::now().date_naive();
        let source = Source::from_args(&self.common);
        info!(?source, %today, "loading dashboard data");

        let run_cache = (!self.common.no_cache).then_some(cache_dir.as_path());
        let data = source::load(&source, run_cache, ttl, today)?;

        let view = DashboardView::new(&data, today, self.common.top);
        match command {
            Commands::Dash if std::io::stdout().is_terminal() => {
                crate::tui::run(&view, theme, palette).context("Dashboard failed")
            }
            Commands::Dash => {
                warn!("stdout is not a terminal, printing summary instead");
                crate::output::output_summary(&view)
            }
            Commands::Stats { json, ndjson } => {
                if json {
                    crate::output::output_json(&view)
                } else if ndjson {
                    crate::output::output_ndjson(&view)
                } else {
                    crate::output::output_summary(&view)
                }
            }
            Commands::Clean => Ok(()),
        }
    }
}
