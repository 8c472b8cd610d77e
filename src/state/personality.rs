//! Personality test slice: questions, the user's in-progress answers,
//! and the computed result.
//!
//! Answers are keyed by question id and live only in memory; abandoning
//! the test discards them. Sections gate navigation so the user answers
//! one block at a time.

#[cfg(test)]
#[path = "personality_test.rs"]
mod personality_test;

use std::collections::BTreeMap;

use super::phase::Phase;
use crate::net::types::{Question, TestResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalityState {
    pub questions: Vec<Question>,
    /// Chosen choice index per question id.
    pub answers: BTreeMap<String, u32>,
    pub active_section: u32,
    pub result: Option<TestResult>,
    pub test_completed: bool,
    pub fetch: Phase,
    pub submit: Phase,
    pub results_fetch: Phase,
}

impl PersonalityState {
    /// Highest section number present in the loaded question set.
    pub fn last_section(&self) -> u32 {
        self.questions.iter().map(|q| q.section).max().unwrap_or(0)
    }

    /// True when every question in the active section has an answer.
    pub fn section_complete(&self) -> bool {
        self.questions
            .iter()
            .filter(|q| q.section == self.active_section)
            .all(|q| self.answers.contains_key(&q.id))
    }
}

#[derive(Clone, Debug)]
pub enum PersonalityEvent {
    QuestionsPending,
    QuestionsFulfilled(Vec<Question>),
    QuestionsRejected(String),

    SubmitPending,
    SubmitFulfilled(TestResult),
    SubmitRejected(String),

    ResultsPending,
    ResultsFulfilled(TestResult),
    ResultsRejected(String),

    SetAnswer { question_id: String, choice: u32 },
    NextSection,
    PrevSection,
    Reset,
}

/// Total reducer over the personality test slice.
#[must_use]
pub fn reduce(mut state: PersonalityState, event: PersonalityEvent) -> PersonalityState {
    match event {
        PersonalityEvent::QuestionsPending => state.fetch = Phase::Pending,
        PersonalityEvent::QuestionsFulfilled(questions) => {
            state.questions = questions;
            state.fetch = Phase::Succeeded;
        }
        PersonalityEvent::QuestionsRejected(message) => state.fetch = Phase::Failed(message),

        PersonalityEvent::SubmitPending => state.submit = Phase::Pending,
        PersonalityEvent::SubmitFulfilled(result) => {
            state.result = Some(result);
            state.test_completed = true;
            state.submit = Phase::Succeeded;
        }
        PersonalityEvent::SubmitRejected(message) => state.submit = Phase::Failed(message),

        PersonalityEvent::ResultsPending => state.results_fetch = Phase::Pending,
        PersonalityEvent::ResultsFulfilled(result) => {
            state.result = Some(result);
            state.test_completed = true;
            state.results_fetch = Phase::Succeeded;
        }
        PersonalityEvent::ResultsRejected(message) => state.results_fetch = Phase::Failed(message),

        PersonalityEvent::SetAnswer { question_id, choice } => {
            state.answers.insert(question_id, choice);
        }
        PersonalityEvent::NextSection => {
            if state.active_section < state.last_section() {
                state.active_section += 1;
            }
        }
        PersonalityEvent::PrevSection => {
            state.active_section = state.active_section.saturating_sub(1);
        }
        PersonalityEvent::Reset => {
            let questions = state.questions.clone();
            let fetch = state.fetch.clone();
            state = PersonalityState::default();
            state.questions = questions;
            state.fetch = fetch;
        }
    }
    state
}
