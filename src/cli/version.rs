//! Version and usage output.

use super::args::USAGE;

/// The current version of actpulse, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string printed by `--version`.
pub fn version_line() -> String {
    format!("actpulse {}", VERSION)
}

/// Version banner followed by usage, printed by `--help`.
pub fn help_text() -> String {
    format!(
        "{}\nSentiment dashboard client for public comments on legislative acts.\n\n{}",
        version_line(),
        USAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_help_lists_commands() {
        let help = help_text();
        assert!(help.starts_with("actpulse "));
        for command in ["acts", "show", "add", "health", "dashboard", "ask", "classify"] {
            assert!(help.contains(command), "missing {}", command);
        }
    }
}
