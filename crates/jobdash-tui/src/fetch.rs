//! Async fetch coordinator.
//!
//! Fetches run on spawned tasks and report back over a channel, so the
//! event loop never blocks on the network. Every request carries a
//! monotonically increasing sequence number; the controller uses it to
//! discard results that were overtaken by a newer request.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use jobdash_api::{PostPage, PostSource};
use jobdash_core::JobdashResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Replace the result list (new query, refresh).
    Reset,
    /// Extend the result list ("load more").
    Append,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub mode: FetchMode,
    pub page: u32,
    pub result: JobdashResult<PostPage>,
}

pub struct Fetcher {
    source: Arc<dyn PostSource>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    next_seq: u64,
}

impl Fetcher {
    pub fn new(source: Arc<dyn PostSource>) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = Self {
            source,
            tx,
            next_seq: 0,
        };
        (fetcher, rx)
    }

    /// Spawn a fetch; the outcome arrives on the receiver returned by
    /// [`Fetcher::new`]. Returns the request's sequence number.
    pub fn request(&mut self, query: &str, page: u32, mode: FetchMode) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let query = query.to_string();

        debug!("fetch #{}: query={:?} page={} mode={:?}", seq, query, page, mode);

        tokio::spawn(async move {
            let result = source.fetch_page(&query, page).await;
            // The receiver going away just means the app is shutting down.
            let _ = tx.send(FetchOutcome {
                seq,
                mode,
                page,
                result,
            });
        });

        seq
    }
}
