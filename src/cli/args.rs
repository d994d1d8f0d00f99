//! Command-line argument parsing.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List acts, optionally filtered
    Acts { search: Option<String> },
    /// Show one act's details
    Show { act: String },
    /// Submit a comment on an act
    Add { act: String, comment: String },
    /// Check backend health
    Health,
    /// Aggregate sentiment across all acts
    Dashboard,
    /// Pick an act from a question and show it
    Ask { question: String },
    /// Classify a sentiment label offline
    Classify { label: String },
    /// Show version information
    Version,
    /// Show usage
    Help,
}

/// Global options plus the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// `--url` override for the base origin
    pub base_url: Option<String>,
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("'{command}' requires {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{command}' takes no arguments, got '{arg}'")]
    UnexpectedArgument { command: &'static str, arg: String },

    #[error("{flag} is only valid with 'acts'")]
    UnexpectedFlag { flag: &'static str },

    #[error("Unknown command '{0}'. Run with --help for usage.")]
    UnknownCommand(String),

    #[error("Unknown flag '{0}'. Run with --help for usage.")]
    UnknownFlag(String),
}

pub const USAGE: &str = "\
Usage: actpulse [--url <ORIGIN>] <COMMAND> [ARGS]

Commands:
  acts [TERM] [--search <TERM>]   List acts, optionally filtered by name
  show <ACT>                      Show an act's summary, key terms and comments
  add <ACT> <COMMENT...>          Submit a comment and print its sentiment
  health                          Check API and database status
  dashboard                       Sentiment totals across all acts
  ask <QUESTION...>               Find the act a question is about and show it
  classify <LABEL...>             Show how a sentiment label is displayed

Options:
  --url <ORIGIN>    API origin (overrides ACTPULSE_API_URL)
  -V, --version     Print version
  -h, --help        Print this help

Environment:
  ACTPULSE_API_URL        API origin
  ACTPULSE_TIMEOUT_SECS   Request timeout in seconds, 0 disables
  RUST_LOG                Log filter (default: warn)
";

/// Parse command-line arguments.
///
/// ```
/// use actpulse::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["actpulse".to_string(), "health".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Health);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut base_url = None;
    let mut search = None;
    let mut positionals: Vec<String> = Vec::new();

    // Skip the program name
    let mut iter = args.skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    base_url,
                    command: CliCommand::Version,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    base_url,
                    command: CliCommand::Help,
                })
            }
            "--url" => base_url = Some(iter.next().ok_or(ArgsError::MissingValue("--url"))?),
            "--search" | "-s" => {
                search = Some(iter.next().ok_or(ArgsError::MissingValue("--search"))?)
            }
            "--" => {
                positionals.extend(iter.by_ref());
                break;
            }
            other => {
                if let Some(value) = other.strip_prefix("--url=") {
                    base_url = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--search=") {
                    search = Some(value.to_string());
                } else if other.starts_with('-') && other.len() > 1 {
                    return Err(ArgsError::UnknownFlag(other.to_string()));
                } else {
                    positionals.push(other.to_string());
                }
            }
        }
    }

    let command = build_command(positionals, search)?;
    Ok(CliArgs { base_url, command })
}

fn build_command(positionals: Vec<String>, search: Option<String>) -> Result<CliCommand, ArgsError> {
    let mut rest = positionals.into_iter();
    let Some(name) = rest.next() else {
        return match search {
            Some(_) => Err(ArgsError::UnexpectedFlag { flag: "--search" }),
            None => Ok(CliCommand::Help),
        };
    };
    let rest: Vec<String> = rest.collect();

    if search.is_some() && name != "acts" {
        return Err(ArgsError::UnexpectedFlag { flag: "--search" });
    }

    let command = match name.as_str() {
        "acts" => {
            let inline = joined(&rest);
            CliCommand::Acts {
                search: search.or(inline),
            }
        }
        "show" => CliCommand::Show {
            act: joined(&rest).ok_or(ArgsError::MissingArgument {
                command: "show",
                what: "an act name",
            })?,
        },
        "add" => {
            let mut parts = rest.into_iter();
            let act = parts
                .next()
                .filter(|a| !a.trim().is_empty())
                .ok_or(ArgsError::MissingArgument {
                    command: "add",
                    what: "an act name and a comment",
                })?;
            let comment = joined(&parts.collect::<Vec<_>>()).ok_or(ArgsError::MissingArgument {
                command: "add",
                what: "a comment",
            })?;
            CliCommand::Add { act, comment }
        }
        "health" => no_args("health", &rest, CliCommand::Health)?,
        "dashboard" => no_args("dashboard", &rest, CliCommand::Dashboard)?,
        "ask" => CliCommand::Ask {
            question: joined(&rest).ok_or(ArgsError::MissingArgument {
                command: "ask",
                what: "a question",
            })?,
        },
        "classify" => CliCommand::Classify {
            label: rest.join(" "),
        },
        "version" => CliCommand::Version,
        "help" => CliCommand::Help,
        _ => return Err(ArgsError::UnknownCommand(name)),
    };
    Ok(command)
}

/// Space-join words, `None` when nothing but whitespace remains.
fn joined(words: &[String]) -> Option<String> {
    let text = words.join(" ");
    (!text.trim().is_empty()).then_some(text)
}

fn no_args(
    command: &'static str,
    rest: &[String],
    parsed: CliCommand,
) -> Result<CliCommand, ArgsError> {
    match rest.first() {
        Some(arg) => Err(ArgsError::UnexpectedArgument {
            command,
            arg: arg.clone(),
        }),
        None => Ok(parsed),
    }
}
