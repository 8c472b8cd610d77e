use super::*;

fn opportunity(id: &str, kind: &str, has_applied: bool) -> Opportunity {
    Opportunity {
        id: id.to_owned(),
        kind: kind.to_owned(),
        title: format!("Opportunity {id}"),
        organization: "Acme".to_owned(),
        location: None,
        description: String::new(),
        tags: Vec::new(),
        has_applied,
    }
}

fn page(kind: &str, ids: &[&str], page_no: u32) -> OpportunityPage {
    OpportunityPage {
        items: ids.iter().map(|id| opportunity(id, kind, false)).collect(),
        page: page_no,
        total_pages: 3,
        total_items: 30,
    }
}

// =============================================================
// Kind parsing
// =============================================================

#[test]
fn kind_parses_wire_names() {
    assert_eq!("job".parse(), Ok(OpportunityKind::Job));
    assert_eq!("course".parse(), Ok(OpportunityKind::Course));
    assert_eq!("project".parse(), Ok(OpportunityKind::Project));
    assert_eq!("bogus".parse::<OpportunityKind>(), Err(()));
}

#[test]
fn kind_round_trips_through_as_str() {
    for kind in [
        OpportunityKind::Job,
        OpportunityKind::Course,
        OpportunityKind::Project,
    ] {
        assert_eq!(kind.as_str().parse(), Ok(kind));
    }
}

// =============================================================
// List lifecycle
// =============================================================

#[test]
fn list_fetch_is_scoped_to_its_kind() {
    let state = reduce(
        OpportunitiesState::default(),
        OpportunitiesEvent::ListPending(OpportunityKind::Job),
    );
    assert!(state.jobs.phase.is_loading());
    assert!(!state.courses.phase.is_loading());
    assert!(!state.projects.phase.is_loading());
}

#[test]
fn list_fulfilled_replaces_items_wholesale() {
    let mut state = reduce(
        OpportunitiesState::default(),
        OpportunitiesEvent::ListFulfilled {
            kind: OpportunityKind::Course,
            page: page("course", &["a", "b"], 1),
        },
    );
    state = reduce(
        state,
        OpportunitiesEvent::ListFulfilled {
            kind: OpportunityKind::Course,
            page: page("course", &["c"], 2),
        },
    );

    let ids: Vec<_> = state.courses.items.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["c"]);
    assert_eq!(state.courses.page, 2);
    assert_eq!(state.courses.total_pages, 3);
}

#[test]
fn list_rejected_stores_error_for_that_kind_only() {
    let state = reduce(
        OpportunitiesState::default(),
        OpportunitiesEvent::ListRejected {
            kind: OpportunityKind::Project,
            message: "feed down".to_owned(),
        },
    );
    assert_eq!(state.projects.phase.error(), Some("feed down"));
    assert_eq!(state.jobs.phase.error(), None);
}

// =============================================================
// Detail and submit
// =============================================================

#[test]
fn detail_fulfilled_drives_has_applied() {
    let state = reduce(
        OpportunitiesState::default(),
        OpportunitiesEvent::DetailFulfilled(opportunity("j1", "job", true)),
    );
    assert!(state.has_applied());

    let state = reduce(
        state,
        OpportunitiesEvent::DetailFulfilled(opportunity("j2", "job", false)),
    );
    assert!(!state.has_applied());
}

#[test]
fn has_applied_is_false_without_a_loaded_detail() {
    assert!(!OpportunitiesState::default().has_applied());
}

#[test]
fn submit_lifecycle_and_clear_error() {
    let mut state = reduce(OpportunitiesState::default(), OpportunitiesEvent::SubmitPending);
    assert!(state.submit.is_loading());

    state = reduce(state, OpportunitiesEvent::SubmitRejected("quota full".to_owned()));
    assert_eq!(state.submit.error(), Some("quota full"));

    state = reduce(state, OpportunitiesEvent::ClearSubmitError);
    assert_eq!(state.submit, Phase::Idle);
}

#[test]
fn clear_submit_error_leaves_success_alone() {
    let state = reduce(OpportunitiesState::default(), OpportunitiesEvent::SubmitFulfilled);
    let state = reduce(state, OpportunitiesEvent::ClearSubmitError);
    assert_eq!(state.submit, Phase::Succeeded);
}

// =============================================================
// Applications list
// =============================================================

#[test]
fn applications_fulfilled_replaces_list() {
    let apps = vec![Application {
        id: "a1".to_owned(),
        opportunity_id: "j1".to_owned(),
        opportunity_type: "job".to_owned(),
        status: "pending".to_owned(),
        applied_at: "2025-03-01T00:00:00Z".to_owned(),
    }];
    let state = reduce(
        OpportunitiesState::default(),
        OpportunitiesEvent::ApplicationsFulfilled(apps),
    );
    assert_eq!(state.applications.len(), 1);
    assert_eq!(state.applications_phase, Phase::Succeeded);
}
