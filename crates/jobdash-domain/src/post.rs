use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// Post type as reported by the content API.
///
/// Anything that is not a regular blog post is treated as a job listing,
/// which is what the dashboard exists to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Post,
    #[serde(other)]
    Listing,
}

impl PostKind {
    pub fn label(&self) -> &'static str {
        match self {
            PostKind::Post => "Blog Post",
            PostKind::Listing => "Job Listing",
        }
    }
}

/// A job-listing post, already enriched and decoded for display.
///
/// `title` has HTML entities decoded; `excerpt` keeps the raw rendered HTML
/// until composition strips it down to plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub link: String,
    pub kind: PostKind,
    pub published_at: DateTime<Utc>,
    pub thumbnail: Option<String>,
}

impl Post {
    pub fn published_label(&self) -> String {
        self.published_at.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_labels() {
        assert_eq!(PostKind::Post.label(), "Blog Post");
        assert_eq!(PostKind::Listing.label(), "Job Listing");
    }

    #[test]
    fn test_kind_deserializes_unknown_types_as_listing() {
        let kind: PostKind = serde_json::from_str("\"post\"").unwrap();
        assert_eq!(kind, PostKind::Post);

        let kind: PostKind = serde_json::from_str("\"page\"").unwrap();
        assert_eq!(kind, PostKind::Listing);
    }

    #[test]
    fn test_published_label() {
        let post = Post {
            id: 1,
            title: "Walk-In Drive".to_string(),
            excerpt: String::new(),
            link: "https://example.org/walk-in".to_string(),
            kind: PostKind::Listing,
            published_at: Utc.with_ymd_and_hms(2025, 3, 22, 9, 30, 0).unwrap(),
            thumbnail: None,
        };
        assert_eq!(post.published_label(), "2025-03-22 09:30");
        assert!(!post.has_thumbnail());
    }
}
