use super::*;
use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::json;

/// Records every call in order; individual steps can be made to fail.
#[derive(Default)]
struct RecordingGateway {
    calls: RefCell<Vec<String>>,
    fail_submit: bool,
    fail_detail: bool,
    fail_list: bool,
}

impl RecordingGateway {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl OpportunityGateway for RecordingGateway {
    async fn submit(
        &self,
        kind: OpportunityKind,
        id: &str,
        _form: &Value,
    ) -> Result<Value, String> {
        self.calls.borrow_mut().push(format!("submit:{}:{id}", kind.as_str()));
        if self.fail_submit {
            return Err("submission rejected".to_owned());
        }
        Ok(json!({ "status": "ok" }))
    }

    async fn fetch_detail(&self, kind: OpportunityKind, id: &str) -> Result<Opportunity, String> {
        self.calls.borrow_mut().push(format!("detail:{}:{id}", kind.as_str()));
        if self.fail_detail {
            return Err("detail unavailable".to_owned());
        }
        Ok(Opportunity {
            id: id.to_owned(),
            kind: kind.as_str().to_owned(),
            title: "Backend Engineer".to_owned(),
            organization: "Acme".to_owned(),
            location: None,
            description: String::new(),
            tags: Vec::new(),
            has_applied: true,
        })
    }

    async fn fetch_list_page(
        &self,
        kind: OpportunityKind,
        page: u32,
    ) -> Result<OpportunityPage, String> {
        self.calls.borrow_mut().push(format!("list:{}:{page}", kind.as_str()));
        if self.fail_list {
            return Err("list unavailable".to_owned());
        }
        Ok(OpportunityPage::default())
    }
}

fn form() -> ApplicationForm {
    ApplicationForm {
        cover_letter: "Hello".to_owned(),
        applied_at: "2025-07-01T12:00:00Z".to_owned(),
    }
}

// =============================================================
// Ordering and call counts
// =============================================================

#[test]
fn successful_submit_runs_exactly_three_calls_in_order() {
    let gateway = RecordingGateway::default();
    let outcome = block_on(submit_application(&gateway, "job", "j1", &form())).unwrap();

    assert_eq!(gateway.calls(), ["submit:job:j1", "detail:job:j1", "list:job:1"]);
    assert!(outcome.detail.as_ref().is_some_and(|d| d.has_applied));
    assert!(outcome.list_page.is_some());
}

#[test]
fn unknown_kind_makes_zero_calls() {
    let gateway = RecordingGateway::default();
    let err = block_on(submit_application(&gateway, "bogus", "x1", &form())).unwrap_err();

    assert_eq!(err, INVALID_OPPORTUNITY_TYPE);
    assert!(gateway.calls().is_empty());
}

#[test]
fn submit_failure_aborts_before_any_refetch() {
    let gateway = RecordingGateway {
        fail_submit: true,
        ..RecordingGateway::default()
    };
    let err = block_on(submit_application(&gateway, "course", "c1", &form())).unwrap_err();

    assert_eq!(err, "submission rejected");
    assert_eq!(gateway.calls(), ["submit:course:c1"]);
}

#[test]
fn refresh_failures_do_not_block_success() {
    let gateway = RecordingGateway {
        fail_detail: true,
        fail_list: true,
        ..RecordingGateway::default()
    };
    let outcome = block_on(submit_application(&gateway, "project", "p1", &form())).unwrap();

    assert_eq!(outcome.detail, None);
    assert_eq!(outcome.list_page, None);
    // Both refetches were still attempted, in order.
    assert_eq!(
        gateway.calls(),
        ["submit:project:p1", "detail:project:p1", "list:project:1"]
    );
}

// =============================================================
// Form payload
// =============================================================

#[test]
fn payload_carries_kind_id_and_timestamp() {
    let payload = form().payload(OpportunityKind::Job, "j7");
    assert_eq!(payload["opportunityId"], "j7");
    assert_eq!(payload["opportunityType"], "job");
    assert_eq!(payload["appliedAt"], "2025-07-01T12:00:00Z");
    assert_eq!(payload["coverLetter"], "Hello");
}

// =============================================================
// Dialog state machine
// =============================================================

#[test]
fn dialogs_are_mutually_exclusive() {
    let mut flow = ApplicationFlow::default();
    flow.open_dialog();
    assert!(flow.is_application_dialog_open);

    flow.complete();
    assert!(!flow.is_application_dialog_open);
    assert!(flow.is_success_dialog_open);
    assert_eq!(flow.error, None);
}

#[test]
fn failing_keeps_the_dialog_open_with_an_error() {
    let mut flow = ApplicationFlow::default();
    flow.open_dialog();
    flow.fail("submission rejected".to_owned());

    assert!(flow.is_application_dialog_open);
    assert!(!flow.is_success_dialog_open);
    assert_eq!(flow.error.as_deref(), Some("submission rejected"));
}

#[test]
fn reopening_clears_a_previous_error() {
    let mut flow = ApplicationFlow::default();
    flow.open_dialog();
    flow.fail("nope".to_owned());
    flow.close_dialog();
    flow.open_dialog();
    assert_eq!(flow.error, None);
}

// =============================================================
// Presentation text
// =============================================================

#[test]
fn button_text_table() {
    assert_eq!(button_text("job", false), "Apply");
    assert_eq!(button_text("job", true), "Applied");
    assert_eq!(button_text("course", false), "Enroll");
    assert_eq!(button_text("course", true), "Enrolled");
    assert_eq!(button_text("project", false), "Join Project");
    assert_eq!(button_text("project", true), "Joined");
    assert_eq!(button_text("bogus", false), "Apply");
    assert_eq!(button_text("bogus", true), "Applied");
}

#[test]
fn success_message_varies_by_kind() {
    assert!(success_message("job").contains("application"));
    assert!(success_message("course").contains("enrolled"));
    assert!(success_message("project").contains("join"));
    assert_eq!(success_message("bogus"), "Your application has been received.");
}
