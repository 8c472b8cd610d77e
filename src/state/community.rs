//! Community slice: the shared post feed.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use super::phase::Phase;
use crate::net::types::CommunityPost;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommunityState {
    pub posts: Vec<CommunityPost>,
    pub fetch: Phase,
    pub post_submit: Phase,
}

#[derive(Clone, Debug)]
pub enum CommunityEvent {
    FeedPending,
    FeedFulfilled(Vec<CommunityPost>),
    FeedRejected(String),

    PostPending,
    PostFulfilled(CommunityPost),
    PostRejected(String),
}

/// Total reducer over the community slice. A published post is prepended
/// so the author sees it immediately; the next feed fetch replaces the
/// list wholesale.
#[must_use]
pub fn reduce(mut state: CommunityState, event: CommunityEvent) -> CommunityState {
    match event {
        CommunityEvent::FeedPending => state.fetch = Phase::Pending,
        CommunityEvent::FeedFulfilled(posts) => {
            state.posts = posts;
            state.fetch = Phase::Succeeded;
        }
        CommunityEvent::FeedRejected(message) => state.fetch = Phase::Failed(message),

        CommunityEvent::PostPending => state.post_submit = Phase::Pending,
        CommunityEvent::PostFulfilled(post) => {
            state.posts.insert(0, post);
            state.post_submit = Phase::Succeeded;
        }
        CommunityEvent::PostRejected(message) => state.post_submit = Phase::Failed(message),
    }
    state
}
