//! reqwest-based client for a WordPress-style content API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, SecondsFormat, Utc};
use futures::future::join_all;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use jobdash_core::{JobdashError, JobdashResult};
use jobdash_domain::Post;

use crate::models::{PostPage, WpMedia, WpPost};
use crate::traits::PostSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const TOTAL_HEADER: &str = "X-WP-Total";
const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

pub struct WpClient {
    client: Client,
    base_url: String,
    per_page: u32,
    recency_days: i64,
}

impl WpClient {
    /// `base_url` points at the API root, e.g. `https://host/wp-json/wp/v2`.
    pub fn new(base_url: &str, per_page: u32, recency_days: i64) -> JobdashResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("jobdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JobdashError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page,
            recency_days,
        })
    }

    /// Resolve a featured-media id to its source URL. Lookup failures
    /// degrade to `None`; the post is still worth showing without an image.
    async fn fetch_media_url(&self, media_id: u64) -> Option<String> {
        let url = format!("{}/media/{}", self.base_url, media_id);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<WpMedia>().await {
                    Ok(media) => media.source_url,
                    Err(e) => {
                        warn!("failed to decode media {}: {}", media_id, e);
                        None
                    }
                }
            }
            Ok(response) => {
                warn!("media {} lookup returned {}", media_id, response.status());
                None
            }
            Err(e) => {
                warn!("media {} lookup failed: {}", media_id, e);
                None
            }
        }
    }

    async fn enrich(&self, wp_post: WpPost) -> Post {
        let thumbnail = match wp_post.featured_media {
            0 => None,
            media_id => self.fetch_media_url(media_id).await,
        };
        wp_post.into_post(thumbnail)
    }
}

#[async_trait]
impl PostSource for WpClient {
    async fn fetch_page(&self, query: &str, page: u32) -> JobdashResult<PostPage> {
        let after = (Utc::now() - ChronoDuration::days(self.recency_days))
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        debug!("fetching posts: query={:?} page={}", query, page);

        let page_param = page.to_string();
        let per_page_param = self.per_page.to_string();
        let response = self
            .client
            .get(format!("{}/posts", self.base_url))
            .query(&[
                ("search", query),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
                ("after", after.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    JobdashError::Http(format!(
                        "request timed out after {}s",
                        REQUEST_TIMEOUT.as_secs()
                    ))
                } else {
                    JobdashError::Http(e.to_string())
                }
            })?;

        // WordPress answers a page past the last one with 400
        // (rest_post_invalid_page_number); treat that as end of results.
        if response.status() == StatusCode::BAD_REQUEST && page > 1 {
            return Ok(PostPage::default());
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(JobdashError::Api { status, message });
        }

        let total = header_number(&response, TOTAL_HEADER);
        let total_pages = header_number(&response, TOTAL_PAGES_HEADER).map(|n| n as u32);

        let wp_posts: Vec<WpPost> = response
            .json()
            .await
            .map_err(|e| JobdashError::Serialization(e.to_string()))?;

        let posts = join_all(wp_posts.into_iter().map(|wp_post| self.enrich(wp_post))).await;

        Ok(PostPage {
            posts,
            total,
            total_pages,
        })
    }
}

fn header_number(response: &Response, name: &str) -> Option<u64> {
    response.headers().get(name)?.to_str().ok()?.parse().ok()
}
