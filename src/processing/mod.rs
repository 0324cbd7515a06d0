//! In-memory analyzers.
//!
//! Each analyzer takes parsed input and returns an owned summary value; none of them touch the
//! filesystem or the network.
//!
//! - [`summarize_yearly()`]: per-year count/total/mean over a month-by-year table
//! - [`summarize_posts()`]: posts per user and most common words across titles and bodies
//! - [`text_metrics()`]: character/word counts and most common long words
//!
//! ## Example
//!
//! ```rust
//! use web_data_reports::processing::{summarize_yearly, text_metrics};
//! use web_data_reports::types::TableRow;
//!
//! let mut jan = TableRow::new();
//! jan.insert("Month".to_string(), "JAN".to_string());
//! jan.insert("1958".to_string(), "340".to_string());
//! let mut feb = TableRow::new();
//! feb.insert("Month".to_string(), "FEB".to_string());
//! feb.insert("1958".to_string(), "318".to_string());
//!
//! let summary = summarize_yearly(&[jan, feb]).unwrap();
//! assert_eq!(summary["1958"].total_passengers, 658);
//! assert_eq!(summary["1958"].avg_per_month, 329.0);
//!
//! let metrics = text_metrics("aa bb ccc dddd eeeee eeeee");
//! assert_eq!(metrics.word_count, 6);
//! assert_eq!(metrics.top_words[0].word, "eeeee");
//! ```

pub mod posts;
pub mod tabular;
pub mod text;
pub mod words;

pub use posts::{summarize_posts, summarize_posts_with, POSTS_MIN_WORD_LEN, POSTS_TOP_N};
pub use tabular::summarize_yearly;
pub use text::{text_metrics, text_metrics_with, TEXT_MIN_WORD_LEN, TEXT_TOP_N};
pub use words::{tokenize, WordCounter};
