use async_trait::async_trait;

use jobdash_core::JobdashResult;

use crate::models::PostPage;

/// Seam between the view-state controller and the remote content API.
///
/// The production implementation is [`crate::WpClient`]; tests substitute
/// a mock or a canned stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch one page of posts matching `query` (1-based `page`).
    async fn fetch_page(&self, query: &str, page: u32) -> JobdashResult<PostPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_returns_canned_page() {
        let mut source = MockPostSource::new();
        source
            .expect_fetch_page()
            .withf(|query, page| query == "pharma" && *page == 1)
            .returning(|_, _| {
                Ok(PostPage {
                    posts: vec![],
                    total: Some(0),
                    total_pages: Some(0),
                })
            });

        let page = source.fetch_page("pharma", 1).await.unwrap();
        assert_eq!(page.total, Some(0));
        assert!(!page.has_more(1));
    }
}
