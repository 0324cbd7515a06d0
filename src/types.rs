//! Core data model types shared by ingestion, processing and export.
//!
//! Every summary is a plain value: an analyzer builds it once and the writers only borrow it.
//! Mappings use [`IndexMap`] so iteration follows insertion order (the CSV writer relies on it).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One CSV record: column name -> raw (untrimmed) cell value, in header order.
pub type TableRow = IndexMap<String, String>;

/// Per-year statistics produced by [`crate::processing::summarize_yearly`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearStats {
    /// Number of cells in the column that held a non-negative integer.
    pub months_counted: usize,
    /// Sum of those integers.
    pub total_passengers: u64,
    /// Mean rounded to 2 decimal places, `0.0` when nothing was counted.
    pub avg_per_month: f64,
}

/// Year label -> statistics, in the column order of the first input row.
pub type YearlySummary = IndexMap<String, YearStats>;

/// A single post from the JSON listing.
///
/// Fields other than `userId`, `title` and `body` are ignored. A missing or `null`
/// title/body is read as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Grouping key; `None` when absent or `null`.
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl Post {
    /// Create a post.
    pub fn new(user_id: Option<i64>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Key used for `posts_per_user`: the decimal id, or `"null"` when there is none.
    pub fn group_key(&self) -> String {
        match self.user_id {
            Some(id) => id.to_string(),
            None => "null".to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A ranked `(word, count)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    /// Create a pair.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Output of [`crate::processing::summarize_posts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsSummary {
    /// Number of input posts.
    pub post_count: usize,
    /// Group key -> number of posts, in first-seen order.
    pub posts_per_user: IndexMap<String, usize>,
    /// Most common words across titles and bodies.
    pub top_words: Vec<WordCount>,
}

/// Output of [`crate::processing::text_metrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Length of the decoded text in characters (Unicode scalar values).
    pub characters: usize,
    /// Number of word tokens, before any length filter.
    pub word_count: usize,
    /// Most common words of the minimum ranking length.
    pub top_words: Vec<WordCount>,
}
