//! Profile slice: the current user's editable profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::phase::Phase;
use crate::net::types::UserProfile;

/// Profile data plus separate fetch and update phases, so saving does not
/// blank out the form while a refetch runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub fetch: Phase,
    pub update: Phase,
}

#[derive(Clone, Debug)]
pub enum ProfileEvent {
    FetchPending,
    FetchFulfilled(UserProfile),
    FetchRejected(String),
    UpdatePending,
    UpdateFulfilled(UserProfile),
    UpdateRejected(String),
}

/// Total reducer over the profile slice. Both fulfilled events replace
/// the record wholesale.
#[must_use]
pub fn reduce(mut state: ProfileState, event: ProfileEvent) -> ProfileState {
    match event {
        ProfileEvent::FetchPending => state.fetch = Phase::Pending,
        ProfileEvent::FetchFulfilled(profile) => {
            state.profile = Some(profile);
            state.fetch = Phase::Succeeded;
        }
        ProfileEvent::FetchRejected(message) => state.fetch = Phase::Failed(message),

        ProfileEvent::UpdatePending => state.update = Phase::Pending,
        ProfileEvent::UpdateFulfilled(profile) => {
            state.profile = Some(profile);
            state.update = Phase::Succeeded;
        }
        ProfileEvent::UpdateRejected(message) => state.update = Phase::Failed(message),
    }
    state
}
