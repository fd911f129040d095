use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use api_types::{article, feed, profile, stats};
use engine::{Engine, EngineError};

use crate::render;

#[derive(Parser, Debug)]
#[command(name = "poorband")]
#[command(about = "Feed and spending statistics over the poorband database")]
pub struct Cli {
    /// Settings file, without extension.
    #[arg(long, default_value = "settings")]
    pub config: String,

    /// Database connection string; overrides the settings file.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Article ids in the user's feed, newest first.
    Feed(UserArgs),
    /// Expenditure records per day of the month.
    Daily(PeriodArgs),
    /// Amount spent per day of the month.
    Calendar(PeriodArgs),
    /// Amount spent per category over the month.
    Chart(PeriodArgs),
    /// Amount spent over the month.
    Total(PeriodArgs),
    /// Articles written by a login id.
    Articles(LoginArgs),
    /// Article ids whose body contains the text.
    Search(SearchArgs),
    /// Users the user follows.
    Following(UserArgs),
    /// Users following the user.
    Followers(UserArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct UserArgs {
    #[arg(long)]
    pub user: i64,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct PeriodArgs {
    #[arg(long)]
    pub user: i64,
    #[arg(long)]
    pub year: i32,
    #[arg(long)]
    pub month: u32,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct LoginArgs {
    #[arg(long)]
    pub login: String,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SearchArgs {
    pub needle: String,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one command and returns its JSON output.
pub async fn run(engine: &Engine, command: Command) -> Result<String, CliError> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Feed(UserArgs { user }) => to_json(&feed::FeedResponse {
            user_seq: user,
            article_seqs: engine.resolve_feed(user).await?,
        }),
        Command::Daily(PeriodArgs { user, year, month }) => {
            let days = engine.daily_expenditures(user, year, month).await?;
            to_json(&render::daily_expenditures(year, month, days))
        }
        Command::Calendar(PeriodArgs { user, year, month }) => {
            let days = engine.daily_totals(user, year, month).await?;
            to_json(&render::calendar(year, month, days))
        }
        Command::Chart(PeriodArgs { user, year, month }) => {
            let totals = engine.category_totals(user, year, month).await?;
            to_json(&render::chart(year, month, totals))
        }
        Command::Total(PeriodArgs { user, year, month }) => to_json(&stats::MonthTotal {
            year,
            month,
            total: engine.month_total(user, year, month).await?,
        }),
        Command::Articles(LoginArgs { login }) => {
            let articles = engine.articles_by_login(&login).await?;
            to_json(&article::ArticleList {
                articles: articles.into_iter().map(render::article_view).collect(),
            })
        }
        Command::Search(SearchArgs { needle }) => {
            let article_seqs = engine.search_articles(&needle).await?;
            to_json(&article::ArticleSearch {
                needle,
                article_seqs,
            })
        }
        Command::Following(UserArgs { user }) => to_json(&profile::FollowList {
            user_seq: user,
            users: engine.following(user).await?,
        }),
        Command::Followers(UserArgs { user }) => to_json(&profile::FollowList {
            user_seq: user,
            users: engine.followers(user).await?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_period_commands() {
        let cli = Cli::try_parse_from([
            "poorband", "chart", "--user", "7", "--year", "2024", "--month", "12",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Chart(PeriodArgs {
                user: 7,
                year: 2024,
                month: 12
            })
        );
        assert_eq!(cli.config, "settings");
    }

    #[test]
    fn parses_search_needle_as_positional() {
        let cli = Cli::try_parse_from(["poorband", "search", "lunch"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Search(SearchArgs {
                needle: "lunch".to_string()
            })
        );
    }

    #[test]
    fn rejects_missing_month() {
        assert!(Cli::try_parse_from(["poorband", "daily", "--user", "1", "--year", "2024"]).is_err());
    }
}
