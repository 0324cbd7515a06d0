//! Plain-text ingestion.

/// Decode fetched bytes as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
