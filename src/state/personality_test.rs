use super::*;

fn question(id: &str, section: u32) -> Question {
    Question {
        id: id.to_owned(),
        section,
        text: format!("Question {id}"),
        choices: vec!["Agree".to_owned(), "Disagree".to_owned()],
    }
}

fn result(kind: &str) -> TestResult {
    TestResult {
        personality_type: kind.to_owned(),
        summary: "summary".to_owned(),
        scores: Vec::new(),
        completed_at: "2025-04-01T00:00:00Z".to_owned(),
    }
}

fn loaded() -> PersonalityState {
    reduce(
        PersonalityState::default(),
        PersonalityEvent::QuestionsFulfilled(vec![
            question("q1", 0),
            question("q2", 0),
            question("q3", 1),
        ]),
    )
}

#[test]
fn questions_fulfilled_replaces_set() {
    let state = loaded();
    assert_eq!(state.questions.len(), 3);
    assert_eq!(state.fetch, Phase::Succeeded);
    assert_eq!(state.last_section(), 1);
}

#[test]
fn section_completion_tracks_answers() {
    let mut state = loaded();
    assert!(!state.section_complete());

    state = reduce(
        state,
        PersonalityEvent::SetAnswer {
            question_id: "q1".to_owned(),
            choice: 0,
        },
    );
    assert!(!state.section_complete());

    state = reduce(
        state,
        PersonalityEvent::SetAnswer {
            question_id: "q2".to_owned(),
            choice: 1,
        },
    );
    assert!(state.section_complete());
}

#[test]
fn re_answering_overwrites_choice() {
    let mut state = loaded();
    for choice in [0, 1] {
        state = reduce(
            state,
            PersonalityEvent::SetAnswer {
                question_id: "q1".to_owned(),
                choice,
            },
        );
    }
    assert_eq!(state.answers.get("q1"), Some(&1));
    assert_eq!(state.answers.len(), 1);
}

#[test]
fn section_navigation_is_clamped() {
    let mut state = loaded();
    state = reduce(state, PersonalityEvent::PrevSection);
    assert_eq!(state.active_section, 0);

    state = reduce(state, PersonalityEvent::NextSection);
    assert_eq!(state.active_section, 1);

    state = reduce(state, PersonalityEvent::NextSection);
    assert_eq!(state.active_section, 1);
}

#[test]
fn submit_fulfilled_completes_the_test() {
    let state = reduce(loaded(), PersonalityEvent::SubmitPending);
    assert!(state.submit.is_loading());

    let state = reduce(state, PersonalityEvent::SubmitFulfilled(result("Explorer")));
    assert!(state.test_completed);
    assert_eq!(
        state.result.as_ref().map(|r| r.personality_type.as_str()),
        Some("Explorer")
    );
}

#[test]
fn submit_rejected_keeps_answers_for_retry() {
    let mut state = loaded();
    state = reduce(
        state,
        PersonalityEvent::SetAnswer {
            question_id: "q1".to_owned(),
            choice: 0,
        },
    );
    state = reduce(state, PersonalityEvent::SubmitRejected("timeout".to_owned()));

    assert_eq!(state.submit.error(), Some("timeout"));
    assert!(!state.test_completed);
    assert_eq!(state.answers.len(), 1);
}

#[test]
fn reset_clears_answers_but_keeps_questions() {
    let mut state = loaded();
    state = reduce(
        state,
        PersonalityEvent::SetAnswer {
            question_id: "q1".to_owned(),
            choice: 0,
        },
    );
    state = reduce(state, PersonalityEvent::SubmitFulfilled(result("Explorer")));
    state = reduce(state, PersonalityEvent::Reset);

    assert!(state.answers.is_empty());
    assert!(!state.test_completed);
    assert_eq!(state.result, None);
    assert_eq!(state.questions.len(), 3);
    assert_eq!(state.fetch, Phase::Succeeded);
}
