//! User domain model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::timestamp::deserialize_optional_timestamp;

/// Identifier used when no external (TownPass) identity is available
pub const DEFAULT_USER_ID: &str = "1";

/// A user as returned by the API
///
/// Only `id` is guaranteed; it equals the external identifier the user was
/// created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub pet: Option<Pet>,
}

/// Body of `POST /users/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    /// External identifier (TownPass ID)
    pub user_id: String,
    pub pet_name: String,
}

impl CreateUserRequest {
    pub fn new(external_id: impl Into<String>, pet_name: impl Into<String>) -> Self {
        Self {
            user_id: external_id.into(),
            pet_name: pet_name.into(),
        }
    }
}
