//! Lifecycle phase of one asynchronous operation.

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

/// Where a single remote operation currently stands.
///
/// Each slice tracks one `Phase` per operation (list fetch, detail fetch,
/// submit, ...) so loading and error state stay operation-scoped instead
/// of being shared across a whole slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl Phase {
    /// True while the operation is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    /// The failure message, if the last run of this operation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
