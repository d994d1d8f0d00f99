//! Wire records exchanged with the backend.
//!
//! All records are plain owned values. A fetch replaces whatever the caller
//! held before; nothing is patched in place.

mod act;
mod comment;
mod health;

pub use act::{ActDetails, ActName, CommentSentiment, WORD_PREVIEW_LIMIT};
pub use comment::{Comment, CommentResponse};
pub use health::{HealthStatus, API_UP, DATABASE_HEALTHY};
