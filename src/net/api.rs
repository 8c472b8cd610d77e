//! REST API helpers for the platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, String>` where the error string has
//! already passed through the error normalizer, so callers can store it
//! directly in a slice's `error` field. The bearer token is always an
//! explicit parameter; there is no ambient global.

#![allow(clippy::unused_async)]

use serde_json::Value;

use super::types::{
    Application, AuthResponse, ChatMessage, ChatSession, CommunityPost, LoginRequest, Opportunity,
    OpportunityPage, Question, RegisterRequest, TestResult, User, UserProfile,
};

/// Base path for all backend endpoints.
pub const API_BASE: &str = "/api/v1";

#[cfg(not(feature = "hydrate"))]
const SSR_UNAVAILABLE: &str = "not available on server";

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::util::error_message::error_message_from_text;

    fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
            None => builder,
        }
    }

    /// Decode a response, mapping non-2xx bodies through the normalizer.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            if body.is_empty() {
                return Err(format!("request failed: {}", resp.status()));
            }
            return Err(error_message_from_text(&body));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }

    pub async fn get<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, String> {
        let resp = with_auth(Request::get(url), token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, String> {
        let resp = with_auth(Request::post(url), token)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, String> {
        let resp = with_auth(Request::put(url), token)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
}

// =============================================================
// Auth
// =============================================================

/// Log in with email and password via `POST /auth/login`.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&format!("{API_BASE}/auth/login"), None, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Create an account via `POST /auth/register`. The response body is the
/// created user record; registration never returns a token.
pub async fn register(payload: &RegisterRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&format!("{API_BASE}/auth/register"), None, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch the currently authenticated user from `GET /auth/me`.
pub async fn current_user(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/auth/me"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

// =============================================================
// Opportunities
// =============================================================

/// Fetch one page of opportunities of a given kind.
pub async fn fetch_opportunities(
    token: &str,
    kind: &str,
    page: u32,
) -> Result<OpportunityPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/opportunities?type={kind}&page={page}");
        http::get(&url, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, kind, page);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch a single opportunity by kind and id.
pub async fn fetch_opportunity(token: &str, kind: &str, id: &str) -> Result<Opportunity, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/opportunities/{kind}/{id}");
        http::get(&url, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, kind, id);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Apply for a job via `POST /opportunities/jobs/{id}/apply`.
pub async fn apply_for_job(token: &str, job_id: &str, form: &Value) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/opportunities/jobs/{job_id}/apply");
        http::post(&url, Some(token), form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, job_id, form);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Enroll in a course via `POST /opportunities/courses/{id}/enroll`.
pub async fn enroll_in_course(token: &str, course_id: &str, form: &Value) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/opportunities/courses/{course_id}/enroll");
        http::post(&url, Some(token), form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, course_id, form);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Ask to join a project via `POST /opportunities/projects/{id}/join`.
pub async fn join_project(token: &str, project_id: &str, form: &Value) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/opportunities/projects/{project_id}/join");
        http::post(&url, Some(token), form).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, project_id, form);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch the current user's applications/enrollments/joins.
pub async fn fetch_applications(token: &str) -> Result<Vec<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/opportunities/applications"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

// =============================================================
// Profile
// =============================================================

/// Fetch the current user's profile.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/profile/me"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Replace the current user's profile via `PUT /profile/me`.
pub async fn update_profile(token: &str, profile: &UserProfile) -> Result<UserProfile, String> {
    #[cfg(feature = "hydrate")]
    {
        http::put(&format!("{API_BASE}/profile/me"), Some(token), profile).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

// =============================================================
// Personality test
// =============================================================

/// Fetch the personality test question set.
pub async fn fetch_questions(token: &str) -> Result<Vec<Question>, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/personality-test/questions"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Submit answers and receive the computed result.
pub async fn submit_answers(token: &str, answers: &Value) -> Result<TestResult, String> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&format!("{API_BASE}/personality-test/submit"), Some(token), answers).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, answers);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch the stored result of a previously completed test.
pub async fn fetch_results(token: &str) -> Result<TestResult, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/personality-test/results"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

// =============================================================
// Chat
// =============================================================

/// List the current user's chat sessions.
pub async fn fetch_chat_sessions(token: &str) -> Result<Vec<ChatSession>, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/chat/sessions"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Create a new chat session.
pub async fn create_chat_session(token: &str) -> Result<ChatSession, String> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&format!("{API_BASE}/chat/sessions"), Some(token), &serde_json::json!({}))
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch the message history of one session.
pub async fn fetch_session_messages(
    token: &str,
    session_id: &str,
) -> Result<Vec<ChatMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/chat/sessions/{session_id}/messages");
        http::get(&url, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, session_id);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Send a message; the response is the reply message appended by the
/// backend.
pub async fn send_chat_message(
    token: &str,
    session_id: &str,
    content: &str,
) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/chat/sessions/{session_id}/messages");
        http::post(&url, Some(token), &serde_json::json!({ "content": content })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, session_id, content);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

// =============================================================
// Community
// =============================================================

/// Fetch the community feed.
pub async fn fetch_community_posts(token: &str) -> Result<Vec<CommunityPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&format!("{API_BASE}/community/posts"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Publish a post to the community feed.
pub async fn create_community_post(token: &str, content: &str) -> Result<CommunityPost, String> {
    #[cfg(feature = "hydrate")]
    {
        http::post(
            &format!("{API_BASE}/community/posts"),
            Some(token),
            &serde_json::json!({ "content": content }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, content);
        Err(SSR_UNAVAILABLE.to_owned())
    }
}
