//! Group counts and word frequencies over the posts listing.

use indexmap::IndexMap;
use tracing::info;

use super::words::{tokenize, top_words};
use crate::types::{Post, PostsSummary};

/// Default number of ranked words in a [`PostsSummary`].
pub const POSTS_TOP_N: usize = 15;
/// Default minimum ranked word length for posts (words of 3 characters or fewer are dropped).
pub const POSTS_MIN_WORD_LEN: usize = 4;

/// Summarize posts with the default limits ([`POSTS_TOP_N`], [`POSTS_MIN_WORD_LEN`]).
pub fn summarize_posts(posts: &[Post]) -> PostsSummary {
    summarize_posts_with(posts, POSTS_TOP_N, POSTS_MIN_WORD_LEN)
}

/// Summarize posts, ranking the `top_n` most common words of at least `min_word_len` characters.
///
/// Words are taken from `title + " " + body` of every post, in input order; ties in the ranking
/// go to the word seen first.
pub fn summarize_posts_with(posts: &[Post], top_n: usize, min_word_len: usize) -> PostsSummary {
    let mut posts_per_user: IndexMap<String, usize> = IndexMap::new();
    for post in posts {
        *posts_per_user.entry(post.group_key()).or_insert(0) += 1;
    }

    let all_text = posts
        .iter()
        .map(|p| format!("{} {}", p.title, p.body))
        .collect::<Vec<_>>()
        .join(" ");
    let tokens = tokenize(&all_text);

    let summary = PostsSummary {
        post_count: posts.len(),
        posts_per_user,
        top_words: top_words(&tokens, min_word_len, top_n),
    };
    info!("Posts summary prepared with {} posts.", summary.post_count);
    summary
}
