//! Wire types shared between the REST client and the state layer.
//!
//! Field names follow the backend's camelCase JSON. Records are replaced
//! wholesale on each successful fetch; nothing here is mutated in place.

use serde::{Deserialize, Serialize};

/// Role assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The authenticated user's identity record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Optional profile attached to a user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Successful login response: the user plus a bearer token.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// A job, course, or project listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the current user has already applied/enrolled/joined.
    #[serde(default)]
    pub has_applied: bool,
}

/// One page of an opportunity list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPage {
    #[serde(default)]
    pub items: Vec<Opportunity>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u32,
}

fn default_page() -> u32 {
    1
}

/// A submitted application/enrollment/join record for the current user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub opportunity_id: String,
    pub opportunity_type: String,
    pub status: String,
    pub applied_at: String,
}

/// One personality test question with its answer choices.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub section: u32,
    pub text: String,
    pub choices: Vec<String>,
}

/// Computed personality test result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub personality_type: String,
    pub summary: String,
    #[serde(default)]
    pub scores: Vec<TraitScore>,
    pub completed_at: String,
}

/// Score for one personality trait.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScore {
    pub trait_name: String,
    pub score: f64,
}

/// A community chat session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

/// A single chat message within a session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub sender: String,
    pub content: String,
    pub created_at: String,
}

/// A post on the community feed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub like_count: u32,
}
