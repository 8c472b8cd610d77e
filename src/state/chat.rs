//! Chat slice: sessions and the open session's message history.
//!
//! Loading the history and sending a message are tracked separately
//! (`is_loading` vs `is_sending`) so the composer stays usable while
//! history loads. A sent message and its reply are both appended by the
//! send lifecycle; history fetches replace the message list wholesale.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, ChatSession};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub sessions: Vec<ChatSession>,
    pub current_session: Option<ChatSession>,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub is_sending: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub enum ChatEvent {
    SessionsPending,
    SessionsFulfilled(Vec<ChatSession>),
    SessionsRejected(String),

    CreateSessionPending,
    CreateSessionFulfilled(ChatSession),
    CreateSessionRejected(String),

    MessagesPending,
    MessagesFulfilled(Vec<ChatMessage>),
    MessagesRejected(String),

    SendPending(ChatMessage),
    SendFulfilled(ChatMessage),
    SendRejected(String),

    SelectSession(ChatSession),
    ClearError,
}

/// Total reducer over the chat slice.
#[must_use]
pub fn reduce(mut state: ChatState, event: ChatEvent) -> ChatState {
    match event {
        ChatEvent::SessionsPending | ChatEvent::MessagesPending => {
            state.is_loading = true;
            state.error = None;
        }
        ChatEvent::SessionsFulfilled(sessions) => {
            state.sessions = sessions;
            state.is_loading = false;
        }
        ChatEvent::MessagesFulfilled(messages) => {
            state.messages = messages;
            state.is_loading = false;
        }
        ChatEvent::SessionsRejected(message) | ChatEvent::MessagesRejected(message) => {
            state.is_loading = false;
            state.error = Some(message);
        }

        ChatEvent::CreateSessionPending => {
            state.is_loading = true;
            state.error = None;
        }
        ChatEvent::CreateSessionFulfilled(session) => {
            state.sessions.insert(0, session.clone());
            state.current_session = Some(session);
            state.messages.clear();
            state.is_loading = false;
        }
        ChatEvent::CreateSessionRejected(message) => {
            state.is_loading = false;
            state.error = Some(message);
        }

        // The outgoing message is shown optimistically while the reply is
        // in flight.
        ChatEvent::SendPending(outgoing) => {
            state.messages.push(outgoing);
            state.is_sending = true;
            state.error = None;
        }
        ChatEvent::SendFulfilled(reply) => {
            state.messages.push(reply);
            state.is_sending = false;
        }
        ChatEvent::SendRejected(message) => {
            state.is_sending = false;
            state.error = Some(message);
        }

        ChatEvent::SelectSession(session) => {
            state.current_session = Some(session);
            state.messages.clear();
        }
        ChatEvent::ClearError => state.error = None,
    }
    state
}
