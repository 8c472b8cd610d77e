use super::*;

fn session(id: &str) -> ChatSession {
    ChatSession {
        id: id.to_owned(),
        title: format!("Session {id}"),
        created_at: "2025-05-01T00:00:00Z".to_owned(),
    }
}

fn message(id: &str, sender: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        session_id: "s1".to_owned(),
        sender: sender.to_owned(),
        content: format!("message {id}"),
        created_at: "2025-05-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn sessions_fulfilled_replaces_list() {
    let state = reduce(ChatState::default(), ChatEvent::SessionsPending);
    assert!(state.is_loading);

    let state = reduce(
        state,
        ChatEvent::SessionsFulfilled(vec![session("s1"), session("s2")]),
    );
    assert_eq!(state.sessions.len(), 2);
    assert!(!state.is_loading);
}

#[test]
fn create_session_selects_it_and_clears_history() {
    let mut state = reduce(
        ChatState::default(),
        ChatEvent::MessagesFulfilled(vec![message("m1", "user")]),
    );
    state = reduce(state, ChatEvent::CreateSessionFulfilled(session("s9")));

    assert_eq!(state.current_session.as_ref().map(|s| s.id.as_str()), Some("s9"));
    assert_eq!(state.sessions.first().map(|s| s.id.as_str()), Some("s9"));
    assert!(state.messages.is_empty());
}

#[test]
fn send_appends_outgoing_then_reply() {
    let mut state = reduce(ChatState::default(), ChatEvent::SendPending(message("m1", "user")));
    assert!(state.is_sending);
    assert_eq!(state.messages.len(), 1);

    state = reduce(state, ChatEvent::SendFulfilled(message("m2", "assistant")));
    assert!(!state.is_sending);
    let senders: Vec<_> = state.messages.iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, ["user", "assistant"]);
}

#[test]
fn send_failure_surfaces_error_and_stops_sending() {
    let state = reduce(ChatState::default(), ChatEvent::SendPending(message("m1", "user")));
    let state = reduce(state, ChatEvent::SendRejected("rate limited".to_owned()));

    assert!(!state.is_sending);
    assert_eq!(state.error.as_deref(), Some("rate limited"));
    // The optimistic message stays; retry is user-initiated.
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn selecting_a_session_clears_messages() {
    let state = reduce(
        ChatState::default(),
        ChatEvent::MessagesFulfilled(vec![message("m1", "user")]),
    );
    let state = reduce(state, ChatEvent::SelectSession(session("s2")));
    assert!(state.messages.is_empty());
    assert_eq!(state.current_session.as_ref().map(|s| s.id.as_str()), Some("s2"));
}
