//! Opportunity application flow.
//!
//! Submitting an application is a strictly ordered sequence: the
//! kind-specific submit call, then a refetch of the single opportunity
//! (so `has_applied` reflects the new state), then a forced refetch of
//! the first list page. Submit failure aborts the sequence and re-raises
//! the normalized error; refresh failures are logged and do not block the
//! success dialog.
//!
//! The network seam is the [`OpportunityGateway`] trait so the sequence
//! can be exercised with a recording double; [`ApiGateway`] is the
//! production implementation over [`crate::net::api`].

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use serde_json::{Value, json};

use crate::net::api;
use crate::net::types::{Opportunity, OpportunityPage};
use crate::state::opportunities::OpportunityKind;

/// Fixed message for an unrecognized opportunity type. Returned before
/// any network call is made.
pub const INVALID_OPPORTUNITY_TYPE: &str = "Invalid opportunity type";

/// The three remote calls the flow sequences.
pub trait OpportunityGateway {
    async fn submit(
        &self,
        kind: OpportunityKind,
        id: &str,
        form: &Value,
    ) -> Result<Value, String>;

    async fn fetch_detail(&self, kind: OpportunityKind, id: &str) -> Result<Opportunity, String>;

    async fn fetch_list_page(
        &self,
        kind: OpportunityKind,
        page: u32,
    ) -> Result<OpportunityPage, String>;
}

/// Production gateway: dispatches to the kind-specific REST endpoint.
pub struct ApiGateway {
    pub token: String,
}

impl OpportunityGateway for ApiGateway {
    async fn submit(
        &self,
        kind: OpportunityKind,
        id: &str,
        form: &Value,
    ) -> Result<Value, String> {
        match kind {
            OpportunityKind::Job => api::apply_for_job(&self.token, id, form).await,
            OpportunityKind::Course => api::enroll_in_course(&self.token, id, form).await,
            OpportunityKind::Project => api::join_project(&self.token, id, form).await,
        }
    }

    async fn fetch_detail(&self, kind: OpportunityKind, id: &str) -> Result<Opportunity, String> {
        api::fetch_opportunity(&self.token, kind.as_str(), id).await
    }

    async fn fetch_list_page(
        &self,
        kind: OpportunityKind,
        page: u32,
    ) -> Result<OpportunityPage, String> {
        api::fetch_opportunities(&self.token, kind.as_str(), page).await
    }
}

/// What the user typed into the application dialog, plus the submission
/// timestamp. Ephemeral: lives only for one submit cycle.
#[derive(Clone, Debug, Default)]
pub struct ApplicationForm {
    pub cover_letter: String,
    pub applied_at: String,
}

impl ApplicationForm {
    /// Wire payload for the submit endpoint.
    pub fn payload(&self, kind: OpportunityKind, opportunity_id: &str) -> Value {
        json!({
            "coverLetter": self.cover_letter,
            "opportunityId": opportunity_id,
            "opportunityType": kind.as_str(),
            "appliedAt": self.applied_at,
        })
    }
}

/// Result of a successful submit cycle. The refreshed detail and list
/// page are `None` when the corresponding best-effort refetch failed.
#[derive(Clone, Debug)]
pub struct ApplicationOutcome {
    pub response: Value,
    pub detail: Option<Opportunity>,
    pub list_page: Option<OpportunityPage>,
}

/// Run the full submit sequence. `kind` arrives as the raw route/page
/// string; an unrecognized value fails before any network call.
pub async fn submit_application<G: OpportunityGateway>(
    gateway: &G,
    kind: &str,
    opportunity_id: &str,
    form: &ApplicationForm,
) -> Result<ApplicationOutcome, String> {
    let kind: OpportunityKind = kind
        .parse()
        .map_err(|()| INVALID_OPPORTUNITY_TYPE.to_owned())?;

    let payload = form.payload(kind, opportunity_id);
    let response = gateway.submit(kind, opportunity_id, &payload).await?;

    let detail = match gateway.fetch_detail(kind, opportunity_id).await {
        Ok(detail) => Some(detail),
        Err(e) => {
            leptos::logging::warn!("opportunity refetch after submit failed: {e}");
            None
        }
    };

    let list_page = match gateway.fetch_list_page(kind, 1).await {
        Ok(page) => Some(page),
        Err(e) => {
            leptos::logging::warn!("list refetch after submit failed: {e}");
            None
        }
    };

    Ok(ApplicationOutcome {
        response,
        detail,
        list_page,
    })
}

/// Dialog state for the application flow. The input and success dialogs
/// are never open at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFlow {
    pub is_application_dialog_open: bool,
    pub is_success_dialog_open: bool,
    pub error: Option<String>,
}

impl ApplicationFlow {
    pub fn open_dialog(&mut self) {
        self.is_application_dialog_open = true;
        self.error = None;
    }

    pub fn close_dialog(&mut self) {
        self.is_application_dialog_open = false;
        self.error = None;
    }

    /// Submit succeeded: swap the input dialog for the success dialog.
    pub fn complete(&mut self) {
        self.is_application_dialog_open = false;
        self.is_success_dialog_open = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn close_success(&mut self) {
        self.is_success_dialog_open = false;
    }
}

/// Label for the apply/enroll/join button. Unknown kinds fall back to the
/// generic application wording.
pub fn button_text(kind: &str, has_applied: bool) -> &'static str {
    match (kind.parse::<OpportunityKind>(), has_applied) {
        (Ok(OpportunityKind::Job), false) => "Apply",
        (Ok(OpportunityKind::Job), true) => "Applied",
        (Ok(OpportunityKind::Course), false) => "Enroll",
        (Ok(OpportunityKind::Course), true) => "Enrolled",
        (Ok(OpportunityKind::Project), false) => "Join Project",
        (Ok(OpportunityKind::Project), true) => "Joined",
        (Err(()), false) => "Apply",
        (Err(()), true) => "Applied",
    }
}

/// Message shown in the success dialog after a completed submit.
pub fn success_message(kind: &str) -> &'static str {
    match kind.parse::<OpportunityKind>() {
        Ok(OpportunityKind::Job) => {
            "Your application has been submitted. The employer will get back to you after review."
        }
        Ok(OpportunityKind::Course) => {
            "You are now enrolled. The course content is available right away."
        }
        Ok(OpportunityKind::Project) => {
            "Your request to join has been sent. The project lead will review it shortly."
        }
        Err(()) => "Your application has been received.",
    }
}
