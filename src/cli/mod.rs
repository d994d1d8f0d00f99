//! Command-line front end for actpulse.
//!
//! This module provides:
//! - Argument parsing
//! - Version and usage display
//! - Command dispatch against an [`ActsClient`]
//!
//! # Usage
//!
//! ```ignore
//! use actpulse::cli::{parse_args, run};
//!
//! let args = parse_args(std::env::args())?;
//! run(args).await?;
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use version::{help_text, version_line, VERSION};

use color_eyre::eyre::{eyre, Report};
use color_eyre::Result;

use crate::acts::{filter_acts, select_act};
use crate::cli_output::{
    render_act_details, render_acts, render_badge, render_dashboard, render_health,
    render_submission,
};
use crate::client::ActsClient;
use crate::config::ClientConfig;
use crate::dashboard::DashboardStats;
use crate::error::ApiError;
use crate::health_check::run_health_check;
use crate::sentiment::SentimentBadge;
use crate::submission::CommentDraft;
use crate::traits::HttpClient;

/// Run a parsed command and print its output to stdout.
///
/// Commands that never touch the network skip building the HTTP client,
/// so `--help` works even with a broken `ACTPULSE_API_URL`.
pub async fn run(args: CliArgs) -> Result<()> {
    if let Some(output) = offline_output(&args.command) {
        print!("{}", output);
        return Ok(());
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }
    let config = config.validate()?;
    let client = ActsClient::from_config(&config)?;
    tracing::info!(base_url = %client.base_url(), "Using API origin");

    let output = execute(&args.command, &client).await?;
    print!("{}", output);
    Ok(())
}

/// Output for commands that need no client, `None` for the rest.
pub fn offline_output(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Help => Some(help_text()),
        CliCommand::Version => Some(format!("{}\n", version_line())),
        CliCommand::Classify { label } => Some(render_badge(&SentimentBadge::new(label.as_str()))),
        _ => None,
    }
}

/// Execute a command against `client` and return the rendered text.
pub async fn execute<C: HttpClient>(command: &CliCommand, client: &ActsClient<C>) -> Result<String> {
    match command {
        CliCommand::Acts { search } => {
            let acts = client.list_acts().await.map_err(api_failure)?;
            let term = search.as_deref().unwrap_or("");
            let matching = filter_acts(&acts, term);
            let shown_term = search.as_deref().filter(|t| !t.trim().is_empty());
            Ok(render_acts(&matching, acts.len(), shown_term))
        }
        CliCommand::Show { act } => {
            let details = client.fetch_act_details(act).await.map_err(api_failure)?;
            Ok(render_act_details(&details))
        }
        CliCommand::Add { act, comment } => {
            let comment = CommentDraft::new(act.as_str(), comment.as_str()).validate()?;
            let responses = client.submit_comment(&comment).await.map_err(api_failure)?;
            if responses.is_empty() {
                tracing::warn!(act = %comment.act, "Submission returned no analysis");
            } else {
                tracing::info!(act = %comment.act, "Comment submitted");
            }
            Ok(render_submission(&responses))
        }
        CliCommand::Health => {
            // An unhealthy or unknown backend is still a completed check
            let result = run_health_check(client).await;
            Ok(render_health(&result, client.base_url()))
        }
        CliCommand::Dashboard => {
            let stats = DashboardStats::collect(client).await.map_err(api_failure)?;
            Ok(render_dashboard(&stats))
        }
        CliCommand::Ask { question } => {
            let acts = client.list_acts().await.map_err(api_failure)?;
            match select_act(question, &acts) {
                Some(act) => {
                    tracing::info!(%act, "Matched question to act");
                    let details = client.fetch_act_details(act).await.map_err(api_failure)?;
                    Ok(render_act_details(&details))
                }
                None => {
                    let all = filter_acts(&acts, "");
                    let mut output = String::from(
                        "I couldn't tell which act you mean. Try naming one of these:\n\n",
                    );
                    output.push_str(&render_acts(&all, acts.len(), None));
                    Ok(output)
                }
            }
        }
        CliCommand::Help | CliCommand::Version | CliCommand::Classify { .. } => {
            Ok(offline_output(command).unwrap_or_default())
        }
    }
}

/// Log the technical detail and surface the user-facing message.
fn api_failure(err: ApiError) -> Report {
    tracing::debug!(error_code = err.error_code(), error = %err, "Command failed");
    eyre!("{}", err.user_message())
}
