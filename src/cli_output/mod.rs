//! Plain-text terminal rendering for CLI commands.

mod boxes;
mod views;

pub use boxes::*;
pub use views::*;
