use crate::error::{AuraError, Result};
use crate::model::{
    ActivityDay, ActivitySnapshot, ActivityWeek, DashboardData, LanguageUsage, Profile, Rgb,
    NEUTRAL_GRAY,
};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::process::Command;
use tracing::{debug, warn};

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("aurafarm/", env!("CARGO_PKG_VERSION"));
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const STATS_QUERY: &str = r#"
query($userName: String!) {
  user(login: $userName) {
    name
    login
    followers { totalCount }
    repositories(first: 100, ownerAffiliations: OWNER, isFork: false, orderBy: {field: UPDATED_AT, direction: DESC}) {
      totalCount
      nodes {
        languages(first: 10, orderBy: {field: SIZE, direction: DESC}) {
          edges { size node { name color } }
        }
      }
    }
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks { contributionDays { contributionCount date } }
      }
    }
  }
}
"#;

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct UserData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    name: Option<String>,
    login: String,
    followers: TotalCount,
    repositories: Repositories,
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repositories {
    total_count: u64,
    #[serde(default)]
    nodes: Vec<Repository>,
}

#[derive(Deserialize)]
struct Repository {
    languages: Option<LanguageConnection>,
}

#[derive(Deserialize)]
struct LanguageConnection {
    #[serde(default)]
    edges: Vec<LanguageEdge>,
}

#[derive(Deserialize)]
struct LanguageEdge {
    size: u64,
    node: LanguageNode,
}

#[derive(Deserialize)]
struct LanguageNode {
    name: String,
    color: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionCalendar {
    total_contributions: u64,
    weeks: Vec<ContributionWeek>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionWeek {
    contribution_days: Vec<ContributionDay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionDay {
    contribution_count: u32,
    date: NaiveDate,
}

#[derive(Deserialize)]
struct ViewerLogin {
    login: String,
}

/// Talks to GitHub with `GITHUB_TOKEN` when set, otherwise through `gh`.
pub struct GitHubClient {
    token: Option<String>,
    http: Client,
}

impl GitHubClient {
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty());
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { token, http })
    }

    pub fn fetch(&self, user: Option<&str>) -> Result<DashboardData> {
        let login = match user {
            Some(login) => login.to_string(),
            None => self.viewer_login()?,
        };
        debug!(%login, "fetching contribution stats");

        let body = self.graphql(STATS_QUERY, &login)?;
        parse_stats(&body)
    }

    fn viewer_login(&self) -> Result<String> {
        if let Some(token) = &self.token {
            match self.get_json::<ViewerLogin>("/user", token) {
                Ok(viewer) => return Ok(viewer.login),
                Err(e) => warn!("{TOKEN_ENV} rejected, falling back to gh: {e}"),
            }
        }
        let viewer: ViewerLogin = serde_json::from_str(&run_gh(&["api", "user"])?)?;
        Ok(viewer.login)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, token: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{GITHUB_API_BASE}{endpoint}"))
            .bearer_auth(token)
            .send()?;
        Ok(check_status(response)?.json()?)
    }

    fn graphql(&self, query: &str, login: &str) -> Result<String> {
        match &self.token {
            Some(token) => {
                let response = self
                    .http
                    .post(format!("{GITHUB_API_BASE}/graphql"))
                    .bearer_auth(token)
                    .json(&json!({ "query": query, "variables": { "userName": login } }))
                    .send()?;
                Ok(check_status(response)?.text()?)
            }
            None => run_gh(&[
                "api",
                "graphql",
                "-f",
                &format!("query={query}"),
                "-f",
                &format!("userName={login}"),
            ]),
        }
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(AuraError::GitHub(format!(
        "GitHub API error ({}): {}",
        status,
        body.trim()
    )))
}

fn run_gh(args: &[&str]) -> Result<String> {
    let output = Command::new("gh").args(args).output().map_err(|e| {
        AuraError::GitHub(format!(
            "Set {TOKEN_ENV} or install the 'gh' CLI and run 'gh auth login' ({e})"
        ))
    })?;
    if !output.status.success() {
        return Err(AuraError::GitHub(format!(
            "gh {} failed: {}",
            args.first().copied().unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    String::from_utf8(output.stdout).map_err(|e| AuraError::GitHub(e.to_string()))
}

/// Turns a GraphQL stats response body into dashboard data.
pub fn parse_stats(body: &str) -> Result<DashboardData> {
    let response: GraphQlResponse<UserData> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(AuraError::GitHub(messages.join("; ")));
    }
    let user = response
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| AuraError::GitHub("User not found".to_string()))?;

    let calendar = user.contributions_collection.contribution_calendar;
    let weeks = calendar
        .weeks
        .into_iter()
        .map(|w| {
            ActivityWeek::new(
                w.contribution_days
                    .into_iter()
                    .map(|d| ActivityDay::new(d.date, d.contribution_count))
                    .collect(),
            )
        })
        .collect();

    let languages = user
        .repositories
        .nodes
        .into_iter()
        .filter_map(|repo| repo.languages)
        .flat_map(|langs| langs.edges)
        .map(|edge| {
            let color = edge
                .node
                .color
                .as_deref()
                .and_then(|c| c.parse::<Rgb>().ok())
                .unwrap_or(NEUTRAL_GRAY);
            LanguageUsage::new(edge.node.name, edge.size, color)
        })
        .collect();

    Ok(DashboardData {
        profile: Profile {
            name: user.name,
            login: user.login,
            followers: user.followers.total_count,
            repositories: user.repositories.total_count,
        },
        snapshot: ActivitySnapshot::new(weeks, calendar.total_contributions),
        languages,
    })
}
