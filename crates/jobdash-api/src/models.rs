//! Wire models for the content API.
//!
//! The API nests every rendered text field as `{ "rendered": "..." }` and
//! reports the featured image as a media id (`0` when there is none) that
//! must be resolved with a second request.

use chrono::NaiveDateTime;
use serde::Deserialize;

use jobdash_domain::text::decode_entities;
use jobdash_domain::{Post, PostKind};

#[derive(Debug, Clone, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpPost {
    pub id: u64,
    /// Publication time in UTC, without an offset suffix.
    pub date_gmt: NaiveDateTime,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: Rendered,
    pub excerpt: Rendered,
    #[serde(default)]
    pub featured_media: u64,
}

impl WpPost {
    /// Convert to the domain model, decoding the title's HTML entities.
    /// The excerpt stays raw; composition strips it at display time.
    pub fn into_post(self, thumbnail: Option<String>) -> Post {
        Post {
            id: self.id,
            title: decode_entities(&self.title.rendered),
            excerpt: self.excerpt.rendered,
            link: self.link,
            kind: self.kind,
            published_at: self.date_gmt.and_utc(),
            thumbnail,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpMedia {
    pub source_url: Option<String>,
}

/// One page of search results plus the pagination totals the API reports
/// in its `X-WP-Total` / `X-WP-TotalPages` response headers.
#[derive(Debug, Clone, Default)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
}

impl PostPage {
    /// Whether another page exists after `page` (the page this result came
    /// from). Falls back to "non-empty means maybe" when the API did not
    /// report totals.
    pub fn has_more(&self, page: u32) -> bool {
        match self.total_pages {
            Some(total_pages) => page < total_pages,
            None => !self.posts.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{
        "id": 90321,
        "date_gmt": "2025-03-20T06:15:00",
        "link": "https://pharmarecruiter.in/openings-at-svil/",
        "type": "post",
        "title": { "rendered": "Walk-In Drive &#8211; QC &amp; QA" },
        "excerpt": { "rendered": "<p>Multiple roles on March 22nd [&hellip;]</p>\n" },
        "featured_media": 90322
    }"#;

    #[test]
    fn test_wp_post_deserializes() {
        let wp: WpPost = serde_json::from_str(POST_JSON).unwrap();
        assert_eq!(wp.id, 90321);
        assert_eq!(wp.kind, PostKind::Post);
        assert_eq!(wp.featured_media, 90322);
        assert_eq!(wp.title.rendered, "Walk-In Drive &#8211; QC &amp; QA");
    }

    #[test]
    fn test_into_post_decodes_title_keeps_excerpt_raw() {
        let wp: WpPost = serde_json::from_str(POST_JSON).unwrap();
        let post = wp.into_post(Some("https://cdn.example.org/thumb.jpg".into()));
        assert_eq!(post.title, "Walk-In Drive \u{2013} QC & QA");
        assert!(post.excerpt.starts_with("<p>"));
        assert_eq!(post.published_at.to_rfc3339(), "2025-03-20T06:15:00+00:00");
        assert_eq!(post.thumbnail.as_deref(), Some("https://cdn.example.org/thumb.jpg"));
    }

    #[test]
    fn test_missing_featured_media_defaults_to_zero() {
        let json = r#"{
            "id": 1,
            "date_gmt": "2025-03-20T06:15:00",
            "link": "https://example.org/p",
            "type": "post",
            "title": { "rendered": "t" },
            "excerpt": { "rendered": "" }
        }"#;
        let wp: WpPost = serde_json::from_str(json).unwrap();
        assert_eq!(wp.featured_media, 0);
    }

    #[test]
    fn test_media_with_null_source_url() {
        let media: WpMedia = serde_json::from_str(r#"{ "source_url": null }"#).unwrap();
        assert!(media.source_url.is_none());
    }

    #[test]
    fn test_has_more_from_totals() {
        let page = PostPage {
            posts: vec![],
            total: Some(43),
            total_pages: Some(5),
        };
        assert!(page.has_more(1));
        assert!(page.has_more(4));
        assert!(!page.has_more(5));
    }

    #[test]
    fn test_has_more_without_totals() {
        let empty = PostPage::default();
        assert!(!empty.has_more(1));
    }
}
