//! Opportunities slice: job/course/project listings, the opened detail
//! record, and the user's submitted applications.
//!
//! Each kind keeps its own list state so loading one tab never disturbs
//! another. List fetches replace the page wholesale; there is no
//! incremental merge.

#[cfg(test)]
#[path = "opportunities_test.rs"]
mod opportunities_test;

use std::str::FromStr;

use super::phase::Phase;
use crate::net::types::{Application, Opportunity, OpportunityPage};

/// The three kinds of opportunity the platform lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpportunityKind {
    Job,
    Course,
    Project,
}

impl OpportunityKind {
    /// The kind's wire name, used in URLs and stored records.
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityKind::Job => "job",
            OpportunityKind::Course => "course",
            OpportunityKind::Project => "project",
        }
    }
}

impl FromStr for OpportunityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job" => Ok(OpportunityKind::Job),
            "course" => Ok(OpportunityKind::Course),
            "project" => Ok(OpportunityKind::Project),
            _ => Err(()),
        }
    }
}

/// One kind's paginated list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub items: Vec<Opportunity>,
    pub page: u32,
    pub total_pages: u32,
    pub phase: Phase,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            phase: Phase::Idle,
        }
    }
}

/// State for all opportunity listings and the current user's
/// applications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpportunitiesState {
    pub jobs: ListState,
    pub courses: ListState,
    pub projects: ListState,

    pub current: Option<Opportunity>,
    pub detail: Phase,

    pub submit: Phase,

    pub applications: Vec<Application>,
    pub applications_phase: Phase,
}

impl OpportunitiesState {
    pub fn list(&self, kind: OpportunityKind) -> &ListState {
        match kind {
            OpportunityKind::Job => &self.jobs,
            OpportunityKind::Course => &self.courses,
            OpportunityKind::Project => &self.projects,
        }
    }

    fn list_mut(&mut self, kind: OpportunityKind) -> &mut ListState {
        match kind {
            OpportunityKind::Job => &mut self.jobs,
            OpportunityKind::Course => &mut self.courses,
            OpportunityKind::Project => &mut self.projects,
        }
    }

    /// Whether the currently opened opportunity has been applied to.
    /// Derived from the loaded detail record, never tracked separately.
    pub fn has_applied(&self) -> bool {
        self.current.as_ref().is_some_and(|o| o.has_applied)
    }
}

/// Every transition the opportunities slice can make.
#[derive(Clone, Debug)]
pub enum OpportunitiesEvent {
    ListPending(OpportunityKind),
    ListFulfilled {
        kind: OpportunityKind,
        page: OpportunityPage,
    },
    ListRejected {
        kind: OpportunityKind,
        message: String,
    },

    DetailPending,
    DetailFulfilled(Opportunity),
    DetailRejected(String),

    SubmitPending,
    SubmitFulfilled,
    SubmitRejected(String),
    ClearSubmitError,

    ApplicationsPending,
    ApplicationsFulfilled(Vec<Application>),
    ApplicationsRejected(String),
}

/// Total reducer over the opportunities slice.
#[must_use]
pub fn reduce(mut state: OpportunitiesState, event: OpportunitiesEvent) -> OpportunitiesState {
    match event {
        OpportunitiesEvent::ListPending(kind) => {
            state.list_mut(kind).phase = Phase::Pending;
        }
        OpportunitiesEvent::ListFulfilled { kind, page } => {
            let list = state.list_mut(kind);
            list.items = page.items;
            list.page = page.page;
            list.total_pages = page.total_pages;
            list.phase = Phase::Succeeded;
        }
        OpportunitiesEvent::ListRejected { kind, message } => {
            state.list_mut(kind).phase = Phase::Failed(message);
        }

        OpportunitiesEvent::DetailPending => state.detail = Phase::Pending,
        OpportunitiesEvent::DetailFulfilled(opportunity) => {
            state.current = Some(opportunity);
            state.detail = Phase::Succeeded;
        }
        OpportunitiesEvent::DetailRejected(message) => state.detail = Phase::Failed(message),

        OpportunitiesEvent::SubmitPending => state.submit = Phase::Pending,
        OpportunitiesEvent::SubmitFulfilled => state.submit = Phase::Succeeded,
        OpportunitiesEvent::SubmitRejected(message) => state.submit = Phase::Failed(message),
        OpportunitiesEvent::ClearSubmitError => {
            if matches!(state.submit, Phase::Failed(_)) {
                state.submit = Phase::Idle;
            }
        }

        OpportunitiesEvent::ApplicationsPending => state.applications_phase = Phase::Pending,
        OpportunitiesEvent::ApplicationsFulfilled(applications) => {
            state.applications = applications;
            state.applications_phase = Phase::Succeeded;
        }
        OpportunitiesEvent::ApplicationsRejected(message) => {
            state.applications_phase = Phase::Failed(message);
        }
    }
    state
}
