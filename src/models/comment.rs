use serde::{Deserialize, Serialize};

/// Outbound comment for `POST /add`.
///
/// `sentiment` is assigned by the server; the client never fills it in and
/// it is left off the wire when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
    pub act: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl Comment {
    pub fn new(act: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            act: act.into(),
            sentiment: None,
        }
    }
}

/// Comment echoed back by the server with its computed sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: String,
    pub act: String,
    pub sentiment: String,
}
