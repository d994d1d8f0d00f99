//! Sentiment classification for display.
//!
//! The backend labels sentiment with free text (`"Positive"`, `"very
//! negative"`, `"Neutral/Mixed"`, ...) and may invent new labels at any time.
//! [`classify`] folds any label into one of three display categories with an
//! ordered substring rule table and a mandatory default. Negation is not
//! parsed: `"not positive"` is [`SentimentCategory::Positive`], matching the
//! labels the server actually emits.

use std::fmt;

/// Display category of a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

/// Ordered (substring, category) rules; the first hit wins.
const RULES: &[(&str, SentimentCategory)] = &[
    ("positive", SentimentCategory::Positive),
    ("negative", SentimentCategory::Negative),
];

/// Category for labels no rule matches, including the empty string.
const FALLBACK: SentimentCategory = SentimentCategory::Neutral;

/// Classify a label. Total: every input maps to exactly one category.
pub fn classify(label: &str) -> SentimentCategory {
    let normalized = label.to_lowercase();
    RULES
        .iter()
        .find(|(needle, _)| normalized.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK)
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "😊",
            SentimentCategory::Negative => "😟",
            SentimentCategory::Neutral => "😐",
        }
    }

    /// Style token consumed by renderers.
    pub fn style(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "status-positive",
            SentimentCategory::Negative => "status-negative",
            SentimentCategory::Neutral => "status-neutral",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label ready for display: the server's text plus its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentBadge {
    pub label: String,
    pub category: SentimentCategory,
}

impl SentimentBadge {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let category = classify(&label);
        Self { label, category }
    }

    pub fn glyph(&self) -> &'static str {
        self.category.glyph()
    }

    pub fn style(&self) -> &'static str {
        self.category.style()
    }
}

/// Renders as `<glyph> <label>`, the original label text kept verbatim.
impl fmt::Display for SentimentBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label)
    }
}

/// Per-category counts over a set of labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Self::default();
        for label in labels {
            tally.record(classify(label));
        }
        tally
    }

    pub fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Negative => self.negative += 1,
            SentimentCategory::Neutral => self.neutral += 1,
        }
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &SentimentTally) {
        self.positive += other.positive;
        self.negative += other.negative;
        self.neutral += other.neutral;
    }

    pub fn count(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Whole-number share of `category`, rounded half away from zero; 0 when empty.
    pub fn percent(&self, category: SentimentCategory) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(category) as f64 * 100.0 / total as f64).round() as u32
    }
}
