use serde::Serialize;

use jobdash_api::PostPage;
use jobdash_domain::Post;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct SearchOutput {
    pub posts: Vec<Post>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

pub fn output_posts(page: PostPage) {
    let count = page.posts.len();
    let output = SearchOutput {
        posts: page.posts,
        count,
        total: page.total,
        total_pages: page.total_pages,
    };
    let response = CliResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION"),
        data: Some(output),
        error: None,
    };
    println!("{}", serde_json::to_string(&response).unwrap());
}

/// Prints an error envelope to stderr and exits with code 1, so shell
/// scripts and CI see the failure.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", serde_json::to_string(&response).unwrap());
    std::process::exit(1);
}
