//! Daily quest models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::timestamp::deserialize_timestamp;

/// Static quest definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reward_strength: i64,
    #[serde(default)]
    pub reward_stamina: i64,
    #[serde(default)]
    pub reward_mood: i64,
}

/// A quest assigned to a user for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuest {
    pub id: i64,
    pub quest_id: i64,
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub is_completed: bool,
    pub quest: Quest,
}

/// Reply to `POST /users/{id}/quests/{user_quest_id}/complete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompletion {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pet: Option<Pet>,
}
