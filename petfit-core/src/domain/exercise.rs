//! Exercise and daily check models

use serde::{Deserialize, Serialize};

use super::pet::Pet;

/// Body of `POST /users/{id}/exercise`
///
/// The server converts duration into strength (10 seconds = 1 point) and
/// applies stamina and mood changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_type: String,
    pub duration_seconds: i64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<i64>,
}

impl ExerciseLog {
    pub fn new(exercise_type: impl Into<String>, duration_seconds: i64, volume: f64) -> Self {
        Self {
            exercise_type: exercise_type.into(),
            duration_seconds,
            volume,
            steps: None,
        }
    }

    pub fn with_steps(mut self, steps: i64) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.exercise_type.trim().is_empty() {
            return Err("exercise type cannot be empty");
        }
        if self.duration_seconds < 0 {
            return Err("duration cannot be negative");
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err("volume must be a non-negative number");
        }
        if matches!(self.steps, Some(s) if s < 0) {
            return Err("steps cannot be negative");
        }
        Ok(())
    }
}

/// Reply to an exercise log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOutcome {
    pub pet: Pet,
    /// Set when the pet sits at a breakthrough level and strength gains are blocked
    #[serde(default)]
    pub breakthrough_required: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to `POST /users/{id}/daily-check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCheckOutcome {
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub already_checked: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_omitted_when_unset() {
        let body = serde_json::to_value(ExerciseLog::new("Running", 300, 5.0)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"exercise_type": "Running", "duration_seconds": 300, "volume": 5.0})
        );

        let body = serde_json::to_value(ExerciseLog::new("Walking", 60, 1.0).with_steps(100)).unwrap();
        assert_eq!(body["steps"], 100);
    }

    #[test]
    fn test_validation() {
        assert!(ExerciseLog::new("Running", 0, 0.0).validate().is_ok());
        assert!(ExerciseLog::new(" ", 60, 1.0).validate().is_err());
        assert!(ExerciseLog::new("Running", -1, 1.0).validate().is_err());
        assert!(ExerciseLog::new("Running", 60, f64::NAN).validate().is_err());
        assert!(ExerciseLog::new("Running", 60, -2.0).validate().is_err());
        assert!(ExerciseLog::new("Running", 60, 1.0).with_steps(-5).validate().is_err());
    }

    #[test]
    fn test_exercise_outcome() {
        let json = r#"{
            "pet": {"id": 1, "owner_id": "tp-1", "strength": 30, "mood": 5},
            "breakthrough_required": true
        }"#;
        let outcome: ExerciseOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.pet.strength, 30);
        assert!(outcome.breakthrough_required);
        assert!(outcome.message.is_none());
    }

    #[test]
    fn test_daily_check_outcome_defaults() {
        let outcome: DailyCheckOutcome = serde_json::from_str("{}").unwrap();
        assert!(outcome.pet.is_none());
        assert!(!outcome.already_checked);
    }
}
