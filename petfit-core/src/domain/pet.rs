//! Pet domain model
//!
//! Every user owns exactly one pet, a chicken that starts as an egg and
//! grows with exercise. Stats are bounded server-side; the bounds are
//! mirrored here so invalid updates can be rejected before a request is made.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp::deserialize_optional_timestamp;

/// Strength resets after each level up once it reaches this value
pub const MAX_STRENGTH: i64 = 120;
pub const MAX_STAMINA: i64 = 100;
pub const MAX_MOOD: i64 = 100;
/// A breakthrough is required at every multiple of this level
pub const BREAKTHROUGH_INTERVAL: i64 = 5;

/// Growth stage, serialized as its integer code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PetStage {
    #[default]
    Egg,
    Chick,
    Chicken,
    BigChicken,
    BuffChicken,
}

impl PetStage {
    pub fn label(&self) -> &'static str {
        match self {
            PetStage::Egg => "Egg",
            PetStage::Chick => "Chick",
            PetStage::Chicken => "Chicken",
            PetStage::BigChicken => "Big Chicken",
            PetStage::BuffChicken => "Buff Chicken",
        }
    }
}

impl TryFrom<u8> for PetStage {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PetStage::Egg),
            1 => Ok(PetStage::Chick),
            2 => Ok(PetStage::Chicken),
            3 => Ok(PetStage::BigChicken),
            4 => Ok(PetStage::BuffChicken),
            other => Err(format!("unknown pet stage: {}", other)),
        }
    }
}

impl From<PetStage> for u8 {
    fn from(stage: PetStage) -> Self {
        stage as u8
    }
}

impl fmt::Display for PetStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_stamina() -> i64 {
    MAX_STAMINA
}

fn default_level() -> i64 {
    1
}

/// A user's pet as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    /// External identifier of the owning user
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub strength: i64,
    #[serde(default = "default_stamina")]
    pub stamina: i64,
    #[serde(default)]
    pub mood: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub stage: PetStage,
    #[serde(default)]
    pub breakthrough_completed: bool,
    #[serde(default)]
    pub daily_exercise_seconds: i64,
    #[serde(default)]
    pub daily_steps: i64,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_daily_check: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_reset_date: Option<NaiveDateTime>,
}

impl Pet {
    /// Whether strength gains are blocked until a travel breakthrough
    pub fn needs_breakthrough(&self) -> bool {
        self.level >= BREAKTHROUGH_INTERVAL
            && self.level % BREAKTHROUGH_INTERVAL == 0
            && !self.breakthrough_completed
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

/// Partial update for `PATCH /users/{id}/pet`
///
/// Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamina: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<PetStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakthrough_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_exercise_seconds: Option<i64>,
}

impl PetUpdate {
    /// Update that only renames the pet
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validate against the server-side stat bounds
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_empty() {
            return Err("pet update has no fields");
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err("pet name cannot be empty");
        }
        if matches!(self.strength, Some(v) if !(0..=MAX_STRENGTH).contains(&v)) {
            return Err("strength must be between 0 and 120");
        }
        if matches!(self.stamina, Some(v) if !(0..=MAX_STAMINA).contains(&v)) {
            return Err("stamina must be between 0 and 100");
        }
        if matches!(self.mood, Some(v) if !(0..=MAX_MOOD).contains(&v)) {
            return Err("mood must be between 0 and 100");
        }
        if matches!(self.level, Some(v) if v < 1) {
            return Err("level must be at least 1");
        }
        if matches!(self.daily_exercise_seconds, Some(v) if v < 0) {
            return Err("daily exercise seconds cannot be negative");
        }
        Ok(())
    }
}
