//! Travel (breakthrough) and leaderboard models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::timestamp::deserialize_optional_timestamp;

/// A travel destination that can unlock a breakthrough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Body of `POST /users/{id}/travel/checkins`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelCheckinRequest {
    pub quest_id: String,
    pub lat: f64,
    pub lng: f64,
}

impl TravelCheckinRequest {
    pub fn new(quest_id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            quest_id: quest_id.into(),
            lat,
            lng,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.quest_id.trim().is_empty() {
            return Err("quest id cannot be empty");
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err("latitude must be between -90 and 90");
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err("longitude must be between -180 and 180");
        }
        Ok(())
    }
}

/// A completed location check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelCheckin {
    pub id: i64,
    pub user_id: String,
    pub quest_id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Reply to a check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinOutcome {
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub checkin: Option<TravelCheckin>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Reply to `POST /users/{id}/travel/breakthrough`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakthroughOutcome {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pet: Option<Pet>,
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub value: i64,
}
