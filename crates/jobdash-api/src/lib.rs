pub mod client;
pub mod models;
pub mod traits;

pub use client::WpClient;
pub use models::PostPage;
pub use traits::PostSource;
