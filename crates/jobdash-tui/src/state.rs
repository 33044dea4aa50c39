//! Pure dashboard state: the accumulated result list, pagination cursor,
//! multi-selection set, and the rules for applying fetch outcomes.
//!
//! No channels or terminals here; `App` owns the async plumbing and feeds
//! outcomes in, which keeps every rule in this module unit-testable.

use std::collections::HashSet;

use jobdash_core::{JobdashResult, SelectionState};
use jobdash_domain::{compose, Post, PostId};

use crate::fetch::{FetchMode, FetchOutcome};

pub struct DashboardState {
    pub posts: Vec<Post>,
    pub cursor: SelectionState,
    pub selected: HashSet<PostId>,
    pub next_page: u32,
    pub loading: bool,
    pub exhausted: bool,
    latest_seq: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            cursor: SelectionState::new(),
            selected: HashSet::new(),
            next_page: 1,
            loading: false,
            exhausted: false,
            latest_seq: 0,
        }
    }

    /// Note a request that was just issued so older in-flight results can
    /// be recognized as stale.
    pub fn begin_request(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.loading = true;
    }

    pub fn can_load_more(&self) -> bool {
        !self.loading && !self.exhausted
    }

    /// Apply a fetch outcome. Stale outcomes (overtaken by a newer request)
    /// are dropped without touching the list.
    pub fn apply(&mut self, outcome: FetchOutcome) -> JobdashResult<()> {
        if outcome.seq < self.latest_seq {
            return Ok(());
        }
        self.loading = false;

        let page = outcome.result?;
        let more = page.has_more(outcome.page);

        match outcome.mode {
            FetchMode::Reset => {
                self.posts = page.posts;
                self.next_page = 2;
                self.exhausted = !more;

                let ids: HashSet<PostId> = self.posts.iter().map(|post| post.id).collect();
                self.selected.retain(|id| ids.contains(id));

                self.cursor.clamp(self.posts.len());
                if self.cursor.get().is_none() && !self.posts.is_empty() {
                    self.cursor.set(Some(0));
                }
            }
            FetchMode::Append => {
                let known: HashSet<PostId> = self.posts.iter().map(|post| post.id).collect();
                let fresh: Vec<Post> = page
                    .posts
                    .into_iter()
                    .filter(|post| !known.contains(&post.id))
                    .collect();

                if fresh.is_empty() {
                    self.exhausted = true;
                } else {
                    self.posts.extend(fresh);
                    self.next_page = outcome.page + 1;
                }
                if !more {
                    self.exhausted = true;
                }
            }
        }

        Ok(())
    }

    /// Toggle membership of the post under the cursor in the selection set.
    pub fn toggle_selected(&mut self) {
        let Some(post) = self.cursor.get().and_then(|idx| self.posts.get(idx)) else {
            return;
        };
        let id = post.id;
        if self.selected.contains(&id) {
            self.selected.remove(&id);
        } else {
            self.selected.insert(id);
        }
    }

    pub fn is_post_selected(&self, id: PostId) -> bool {
        self.selected.contains(&id)
    }

    /// Combine the selected posts, in list order, into the shareable block.
    pub fn combine_selected(&self) -> String {
        let chosen: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| self.selected.contains(&post.id))
            .collect();
        compose::combine(&chosen)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
