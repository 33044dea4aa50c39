//! Derives the shareable text block from the selected posts.

use crate::post::Post;
use crate::text::{decode_entities, strip_tags, truncate_chars};

pub const EMPTY_SELECTION_MESSAGE: &str = "No posts selected!";

const DESCRIPTION_LIMIT: usize = 100;

/// Combine posts into one text block, one entry per post, separated by
/// blank lines. An empty slice yields [`EMPTY_SELECTION_MESSAGE`].
pub fn combine(posts: &[&Post]) -> String {
    if posts.is_empty() {
        return EMPTY_SELECTION_MESSAGE.to_string();
    }
    posts.iter().map(|post| entry(post)).collect::<Vec<_>>().join("\n\n")
}

fn entry(post: &Post) -> String {
    let description = decode_entities(&strip_tags(&post.excerpt));
    let description = if description.is_empty() {
        "No description"
    } else {
        truncate_chars(&description, DESCRIPTION_LIMIT)
    };
    format!(
        "\u{1f539} **{}**\n\u{1f4c4} **Short Description:** {}...\n\u{1f517} [Apply Here]({})",
        post.title, description, post.link
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostKind;
    use chrono::TimeZone;

    fn post(id: u64, title: &str, excerpt: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            link: format!("https://example.org/{}", id),
            kind: PostKind::Listing,
            published_at: chrono::Utc.with_ymd_and_hms(2025, 3, 22, 8, 0, 0).unwrap(),
            thumbnail: None,
        }
    }

    #[test]
    fn test_empty_selection_message() {
        assert_eq!(combine(&[]), EMPTY_SELECTION_MESSAGE);
    }

    #[test]
    fn test_single_entry_format() {
        let p = post(7, "QA Officer", "<p>Openings at the Goa plant.</p>");
        let text = combine(&[&p]);
        assert_eq!(
            text,
            "\u{1f539} **QA Officer**\n\u{1f4c4} **Short Description:** Openings at the Goa plant....\n\u{1f517} [Apply Here](https://example.org/7)"
        );
    }

    #[test]
    fn test_entries_joined_by_blank_line() {
        let a = post(1, "First", "<p>one</p>");
        let b = post(2, "Second", "<p>two</p>");
        let text = combine(&[&a, &b]);
        assert_eq!(text.matches("\n\n").count(), 1);
        assert!(text.contains("**First**"));
        assert!(text.contains("**Second**"));
    }

    #[test]
    fn test_empty_excerpt_falls_back() {
        let p = post(3, "Untitled role", "<p></p>");
        let text = combine(&[&p]);
        assert!(text.contains("**Short Description:** No description..."));
    }

    #[test]
    fn test_long_excerpt_truncated_to_100_chars() {
        let long = format!("<p>{}</p>", "x".repeat(250));
        let p = post(4, "Long", &long);
        let text = combine(&[&p]);
        assert!(text.contains(&format!("{}...", "x".repeat(100))));
        assert!(!text.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_excerpt_entities_decoded() {
        let p = post(5, "Plant roles", "<p>QC &amp; QA \u{2013} walk-in [&hellip;]</p>");
        let text = combine(&[&p]);
        assert!(text.contains("QC & QA \u{2013} walk-in [\u{2026}]"));
    }
}
