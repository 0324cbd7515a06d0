//! Getting source data into memory.
//!
//! - [`fetch`]: the [`Fetcher`] seam and its HTTP implementation
//! - [`raw`]: verbatim archival of fetched bytes
//! - [`csv`], [`json`], [`text`]: decoding fetched bytes into the analyzers' input types

pub mod csv;
pub mod fetch;
pub mod json;
pub mod raw;
pub mod text;

pub use self::csv::read_table_rows;
pub use self::json::parse_posts;
pub use fetch::{Fetcher, HttpFetcher};
pub use raw::save_raw;
pub use text::decode_text;
