//! JSON ingestion of the posts listing.
//!
//! The listing is a JSON array of objects: `[{"userId":1,"title":"..","body":".."}, ...]`.
//! Only `userId`, `title` and `body` are read; other fields are ignored.

use serde_json::error::Category;

use crate::error::{PipelineError, PipelineResult};
use crate::types::Post;

const SOURCE_NAME: &str = "posts json";

/// Parse fetched JSON bytes (invalid UTF-8 replaced) into posts.
pub fn parse_posts(bytes: &[u8]) -> PipelineResult<Vec<Post>> {
    let text = String::from_utf8_lossy(bytes);
    parse_posts_from_str(&text)
}

/// Parse posts from an in-memory string. See [`parse_posts`].
///
/// Malformed or truncated JSON is a [`PipelineError::Parse`]; well-formed JSON of the wrong
/// shape (not an array of objects, or a field of the wrong type) is a [`PipelineError::Json`].
pub fn parse_posts_from_str(input: &str) -> PipelineResult<Vec<Post>> {
    serde_json::from_str::<Vec<Post>>(input).map_err(|e| match e.classify() {
        Category::Syntax | Category::Eof => PipelineError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: format!("invalid json: {e}"),
        },
        Category::Io | Category::Data => PipelineError::Json(e),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_posts, parse_posts_from_str};
    use crate::error::PipelineError;
    use crate::types::Post;

    #[test]
    fn parses_array_and_ignores_extra_fields() {
        let input = r#"[{"userId":1,"id":1,"title":"a","body":"b"},{"userId":2,"id":2,"title":"c","body":"d"}]"#;
        let posts = parse_posts(input.as_bytes()).unwrap();
        assert_eq!(posts, vec![Post::new(Some(1), "a", "b"), Post::new(Some(2), "c", "d")]);
    }

    #[test]
    fn empty_array_is_no_posts() {
        assert!(parse_posts_from_str(" [] \n").unwrap().is_empty());
    }

    #[test]
    fn malformed_input_is_a_parse_error_with_position() {
        let err = parse_posts_from_str(r#"[{"userId":1,"title":"a"},"#).unwrap_err();
        match err {
            PipelineError::Parse { source_name, message } => {
                assert_eq!(source_name, "posts json");
                assert!(message.contains("line 1"), "{message}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
        assert!(matches!(
            parse_posts_from_str("   ").unwrap_err(),
            PipelineError::Parse { .. }
        ));
    }

    #[test]
    fn non_array_shapes_are_json_errors() {
        for input in ["42", r#"{"userId":4,"title":"t"}"#, "[1, 2]", r#"[{"userId":"seven"}]"#] {
            let err = parse_posts_from_str(input).unwrap_err();
            assert!(matches!(err, PipelineError::Json(_)), "{input}: {err:?}");
        }
    }

    #[test]
    fn newline_delimited_objects_are_rejected() {
        let err = parse_posts_from_str("{\"userId\":1}\n{\"userId\":2}\n").unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
    }
}
