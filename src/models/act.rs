use serde::{Deserialize, Serialize};

/// Opaque act identifier; the display name doubles as the query key.
pub type ActName = String;

/// Number of key terms shown in an act preview.
pub const WORD_PREVIEW_LIMIT: usize = 10;

/// One comment and the sentiment label the server assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSentiment {
    pub comment: String,
    pub sentiment: String,
}

/// Response of `GET /fetch?act=...`.
///
/// On the wire `comments` is an object keyed by comment text. It is held
/// here as ordered pairs in document order, so two comments with identical
/// text both survive decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActDetails {
    pub act: ActName,
    pub overall_sentiment: String,
    pub summary: String,
    #[serde(default)]
    pub word_list: Vec<String>,
    #[serde(default, with = "comment_map")]
    pub comments: Vec<CommentSentiment>,
}

impl ActDetails {
    /// First `n` key terms, in server order.
    pub fn top_words(&self, n: usize) -> &[String] {
        &self.word_list[..n.min(self.word_list.len())]
    }

    /// Sentiment labels of every comment, in order.
    pub fn comment_labels(&self) -> impl Iterator<Item = &str> {
        self.comments.iter().map(|c| c.sentiment.as_str())
    }
}

/// Ordered (de)serialization of `{ "<comment>": "<label>", ... }`.
mod comment_map {
    use super::CommentSentiment;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(pairs: &[CommentSentiment], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for pair in pairs {
            map.serialize_entry(&pair.comment, &pair.sentiment)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<CommentSentiment>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PairsVisitor)
    }

    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<CommentSentiment>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping comment text to a sentiment label")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((comment, sentiment)) = access.next_entry::<String, String>()? {
                pairs.push(CommentSentiment { comment, sentiment });
            }
            Ok(pairs)
        }
    }
}
