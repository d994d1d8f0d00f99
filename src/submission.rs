//! Comment form validation, done by the caller before anything is sent.

use crate::error::ValidationError;
use crate::models::Comment;

/// What the user typed into the comment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub act: String,
    pub comment: String,
}

impl CommentDraft {
    pub fn new(act: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            act: act.into(),
            comment: comment.into(),
        }
    }

    /// Require an act and a non-blank comment; the comment is trimmed.
    pub fn validate(&self) -> Result<Comment, ValidationError> {
        if self.act.trim().is_empty() {
            return Err(ValidationError::MissingAct);
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ValidationError::EmptyComment);
        }
        Ok(Comment::new(self.act.clone(), comment))
    }
}
