//! Async action helpers: the glue between the REST client and the slice
//! reducers.
//!
//! Each helper emits the pending event, awaits the network call, then
//! emits fulfilled or rejected. State transitions all happen on the one
//! browser thread; overlapping dispatches of the same operation are
//! independent cycles and the last completion to arrive wins. There is no
//! cancellation and no automatic retry.
//!
//! Session transitions are the only ones with a side effect: after every
//! reduction the durable envelope is written (or removed) through
//! [`super::persist`], the single persistence path for the token.

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use super::chat::{ChatEvent, ChatState, reduce as reduce_chat};
use super::community::{CommunityEvent, CommunityState, reduce as reduce_community};
use super::opportunities::{
    OpportunitiesEvent, OpportunitiesState, OpportunityKind, reduce as reduce_opportunities,
};
use super::persist;
use super::personality::{PersonalityEvent, PersonalityState, reduce as reduce_personality};
use super::profile::{ProfileEvent, ProfileState, reduce as reduce_profile};
use super::session::{SessionEvent, SessionState, reduce as reduce_session};
use crate::net::api;
use crate::net::types::{ChatMessage, ChatSession, LoginRequest, RegisterRequest, UserProfile};
use crate::util::time::now_iso;

// =============================================================
// Session
// =============================================================

/// Reduce the session and mirror the result to durable storage.
pub fn dispatch_session(session: RwSignal<SessionState>, event: SessionEvent) {
    let next = reduce_session(session.get_untracked(), event);
    if next.token.is_some() {
        persist::save(&next);
    } else {
        persist::clear();
    }
    session.set(next);
}

/// Log in; returns true when the session is now authenticated.
pub async fn login(session: RwSignal<SessionState>, credentials: LoginRequest) -> bool {
    dispatch_session(session, SessionEvent::LoginPending);
    match api::login(&credentials).await {
        Ok(auth) => {
            dispatch_session(
                session,
                SessionEvent::LoginFulfilled {
                    user: auth.user,
                    token: auth.token,
                },
            );
            true
        }
        Err(e) => {
            dispatch_session(session, SessionEvent::LoginRejected(e));
            false
        }
    }
}

/// Register a new account; returns true on success. Never authenticates;
/// the caller redirects to the login page.
pub async fn register(session: RwSignal<SessionState>, payload: RegisterRequest) -> bool {
    dispatch_session(session, SessionEvent::RegisterPending);
    match api::register(&payload).await {
        Ok(_) => {
            dispatch_session(session, SessionEvent::RegisterFulfilled);
            true
        }
        Err(e) => {
            dispatch_session(session, SessionEvent::RegisterRejected(e));
            false
        }
    }
}

/// Confirm the rehydrated token against the backend. A rejection is
/// treated as being logged out and clears the persisted envelope.
pub async fn fetch_current_user(session: RwSignal<SessionState>) {
    let Some(token) = session.get_untracked().token else {
        return;
    };
    dispatch_session(session, SessionEvent::CurrentUserPending);
    match api::current_user(&token).await {
        Ok(user) => dispatch_session(session, SessionEvent::CurrentUserFulfilled(user)),
        Err(e) => dispatch_session(session, SessionEvent::CurrentUserRejected(e)),
    }
}

pub fn logout(session: RwSignal<SessionState>) {
    dispatch_session(session, SessionEvent::Logout);
}

pub fn clear_session_error(session: RwSignal<SessionState>) {
    dispatch_session(session, SessionEvent::ClearError);
}

// =============================================================
// Opportunities
// =============================================================

pub fn dispatch_opportunities(
    opportunities: RwSignal<OpportunitiesState>,
    event: OpportunitiesEvent,
) {
    opportunities.update(|state| *state = reduce_opportunities(state.clone(), event));
}

/// Fetch one page of listings for a kind.
pub async fn fetch_opportunities(
    opportunities: RwSignal<OpportunitiesState>,
    token: String,
    kind: OpportunityKind,
    page: u32,
) {
    dispatch_opportunities(opportunities, OpportunitiesEvent::ListPending(kind));
    match api::fetch_opportunities(&token, kind.as_str(), page).await {
        Ok(page) => dispatch_opportunities(
            opportunities,
            OpportunitiesEvent::ListFulfilled { kind, page },
        ),
        Err(message) => dispatch_opportunities(
            opportunities,
            OpportunitiesEvent::ListRejected { kind, message },
        ),
    }
}

/// Fetch a single opportunity into the detail slot.
pub async fn fetch_opportunity(
    opportunities: RwSignal<OpportunitiesState>,
    token: String,
    kind: OpportunityKind,
    id: String,
) {
    dispatch_opportunities(opportunities, OpportunitiesEvent::DetailPending);
    match api::fetch_opportunity(&token, kind.as_str(), &id).await {
        Ok(detail) => {
            dispatch_opportunities(opportunities, OpportunitiesEvent::DetailFulfilled(detail));
        }
        Err(e) => dispatch_opportunities(opportunities, OpportunitiesEvent::DetailRejected(e)),
    }
}

/// Fetch the current user's submitted applications.
pub async fn fetch_applications(opportunities: RwSignal<OpportunitiesState>, token: String) {
    dispatch_opportunities(opportunities, OpportunitiesEvent::ApplicationsPending);
    match api::fetch_applications(&token).await {
        Ok(apps) => {
            dispatch_opportunities(opportunities, OpportunitiesEvent::ApplicationsFulfilled(apps));
        }
        Err(e) => {
            dispatch_opportunities(opportunities, OpportunitiesEvent::ApplicationsRejected(e));
        }
    }
}

// =============================================================
// Profile
// =============================================================

pub fn dispatch_profile(profile: RwSignal<ProfileState>, event: ProfileEvent) {
    profile.update(|state| *state = reduce_profile(state.clone(), event));
}

pub async fn fetch_profile(profile: RwSignal<ProfileState>, token: String) {
    dispatch_profile(profile, ProfileEvent::FetchPending);
    match api::fetch_profile(&token).await {
        Ok(p) => dispatch_profile(profile, ProfileEvent::FetchFulfilled(p)),
        Err(e) => dispatch_profile(profile, ProfileEvent::FetchRejected(e)),
    }
}

pub async fn update_profile(profile: RwSignal<ProfileState>, token: String, draft: UserProfile) {
    dispatch_profile(profile, ProfileEvent::UpdatePending);
    match api::update_profile(&token, &draft).await {
        Ok(p) => dispatch_profile(profile, ProfileEvent::UpdateFulfilled(p)),
        Err(e) => dispatch_profile(profile, ProfileEvent::UpdateRejected(e)),
    }
}

// =============================================================
// Personality test
// =============================================================

pub fn dispatch_personality(personality: RwSignal<PersonalityState>, event: PersonalityEvent) {
    personality.update(|state| *state = reduce_personality(state.clone(), event));
}

pub async fn fetch_questions(personality: RwSignal<PersonalityState>, token: String) {
    dispatch_personality(personality, PersonalityEvent::QuestionsPending);
    match api::fetch_questions(&token).await {
        Ok(questions) => {
            dispatch_personality(personality, PersonalityEvent::QuestionsFulfilled(questions));
        }
        Err(e) => dispatch_personality(personality, PersonalityEvent::QuestionsRejected(e)),
    }
}

/// Submit the collected answers and store the computed result.
pub async fn submit_answers(personality: RwSignal<PersonalityState>, token: String) {
    let answers = serde_json::json!({
        "answers": personality.get_untracked().answers,
    });
    dispatch_personality(personality, PersonalityEvent::SubmitPending);
    match api::submit_answers(&token, &answers).await {
        Ok(result) => dispatch_personality(personality, PersonalityEvent::SubmitFulfilled(result)),
        Err(e) => dispatch_personality(personality, PersonalityEvent::SubmitRejected(e)),
    }
}

pub async fn fetch_results(personality: RwSignal<PersonalityState>, token: String) {
    dispatch_personality(personality, PersonalityEvent::ResultsPending);
    match api::fetch_results(&token).await {
        Ok(result) => {
            dispatch_personality(personality, PersonalityEvent::ResultsFulfilled(result));
        }
        Err(e) => dispatch_personality(personality, PersonalityEvent::ResultsRejected(e)),
    }
}

// =============================================================
// Chat
// =============================================================

pub fn dispatch_chat(chat: RwSignal<ChatState>, event: ChatEvent) {
    chat.update(|state| *state = reduce_chat(state.clone(), event));
}

pub async fn fetch_chat_sessions(chat: RwSignal<ChatState>, token: String) {
    dispatch_chat(chat, ChatEvent::SessionsPending);
    match api::fetch_chat_sessions(&token).await {
        Ok(sessions) => dispatch_chat(chat, ChatEvent::SessionsFulfilled(sessions)),
        Err(e) => dispatch_chat(chat, ChatEvent::SessionsRejected(e)),
    }
}

pub async fn create_chat_session(chat: RwSignal<ChatState>, token: String) {
    dispatch_chat(chat, ChatEvent::CreateSessionPending);
    match api::create_chat_session(&token).await {
        Ok(session) => dispatch_chat(chat, ChatEvent::CreateSessionFulfilled(session)),
        Err(e) => dispatch_chat(chat, ChatEvent::CreateSessionRejected(e)),
    }
}

pub async fn fetch_session_messages(chat: RwSignal<ChatState>, token: String, session: ChatSession) {
    dispatch_chat(chat, ChatEvent::SelectSession(session.clone()));
    dispatch_chat(chat, ChatEvent::MessagesPending);
    match api::fetch_session_messages(&token, &session.id).await {
        Ok(messages) => dispatch_chat(chat, ChatEvent::MessagesFulfilled(messages)),
        Err(e) => dispatch_chat(chat, ChatEvent::MessagesRejected(e)),
    }
}

/// Send a message: the outgoing text is shown immediately, the backend's
/// reply is appended when it arrives.
pub async fn send_chat_message(chat: RwSignal<ChatState>, token: String, content: String) {
    let Some(session) = chat.get_untracked().current_session else {
        return;
    };
    let outgoing = ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        session_id: session.id.clone(),
        sender: "user".to_owned(),
        content: content.clone(),
        created_at: now_iso(),
    };
    dispatch_chat(chat, ChatEvent::SendPending(outgoing));
    match api::send_chat_message(&token, &session.id, &content).await {
        Ok(reply) => dispatch_chat(chat, ChatEvent::SendFulfilled(reply)),
        Err(e) => dispatch_chat(chat, ChatEvent::SendRejected(e)),
    }
}

// =============================================================
// Community
// =============================================================

pub fn dispatch_community(community: RwSignal<CommunityState>, event: CommunityEvent) {
    community.update(|state| *state = reduce_community(state.clone(), event));
}

pub async fn fetch_community_posts(community: RwSignal<CommunityState>, token: String) {
    dispatch_community(community, CommunityEvent::FeedPending);
    match api::fetch_community_posts(&token).await {
        Ok(posts) => dispatch_community(community, CommunityEvent::FeedFulfilled(posts)),
        Err(e) => dispatch_community(community, CommunityEvent::FeedRejected(e)),
    }
}

pub async fn create_community_post(community: RwSignal<CommunityState>, token: String, content: String) {
    dispatch_community(community, CommunityEvent::PostPending);
    match api::create_community_post(&token, &content).await {
        Ok(post) => dispatch_community(community, CommunityEvent::PostFulfilled(post)),
        Err(e) => dispatch_community(community, CommunityEvent::PostRejected(e)),
    }
}
