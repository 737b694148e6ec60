//! Wire types for the ScholarQuest HTTP API.
//!
//! Field names are part of the public contract: user-shaped payloads use
//! snake_case, application payloads use camelCase (`userId`, `xpEarned`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod scholarship {
    use super::*;

    /// A scholarship row with its criteria document decoded.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScholarshipView {
        pub id: i32,
        pub name: String,
        pub description: String,
        /// Structured eligibility predicate; stored but never evaluated.
        pub criteria: serde_json::Value,
        pub reward: i64,
    }
}

pub mod user {
    use super::*;

    /// Request body for creating or updating a profile.
    ///
    /// Every field is optional at the wire level; the engine decides what
    /// counts as missing (absent and falsy are both rejected).
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ProfileUpsert {
        pub name: Option<String>,
        pub age: Option<i32>,
        pub major: Option<String>,
        pub gender: Option<String>,
        pub leadership: Option<bool>,
        pub community: Option<bool>,
    }

    /// Response body for a profile submission.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProfileSaved {
        pub id: i32,
        pub name: String,
        pub age: i32,
        pub major: String,
        pub gender: String,
        pub leadership: bool,
        pub community: bool,
        pub total_xp: i64,
        pub level: String,
        pub message: String,
    }

    /// A user row with its level derived from XP at serialization time.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub name: String,
        pub age: i32,
        pub major: String,
        pub gender: String,
        pub leadership: bool,
        pub community: bool,
        pub total_xp: i64,
        pub level: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    /// Leaderboard row: a user plus how many applications they submitted.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct LeaderboardEntry {
        pub id: i32,
        pub name: String,
        pub age: i32,
        pub major: String,
        pub gender: String,
        pub leadership: bool,
        pub community: bool,
        pub total_xp: i64,
        pub level: String,
        pub applications_count: i64,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod application {
    use super::*;

    /// Request body for submitting an application.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ApplicationNew {
        pub user_id: Option<i32>,
        pub scholarship_id: Option<i32>,
        pub scholarship_name: Option<String>,
        pub xp_earned: Option<i64>,
    }

    /// Response body for a submitted application.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ApplicationCreated {
        pub application_id: i32,
        pub message: String,
        pub xp_earned: i64,
    }

    /// A stored application row, raw shape (no level annotation).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ApplicationView {
        pub id: i32,
        pub user_id: i32,
        pub scholarship_id: i32,
        pub scholarship_name: String,
        pub xp_earned: i64,
        pub applied_at: DateTime<Utc>,
    }
}

pub mod health {
    use super::*;

    /// Constant health-check payload.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
        pub message: String,
    }
}
