//! Onboarding service - establish who the user is
//!
//! Chooses between the external (TownPass) identity and the default
//! identifier, creates the user on the backend when an external identity is
//! present, then records the identifier and moves to the home route.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::DEFAULT_USER_ID;
use crate::ports::{EventLog, PetApi, Session, HOME_ROUTE};
use crate::services::LogEvent;

/// What the create-user handler ended up doing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OnboardingOutcome {
    /// No external identity; the default identifier was recorded without a
    /// backend call
    DefaultIdentity { user_id: String },
    /// The backend created (or returned) the user
    Created { user_id: String },
    /// Something failed; one error event was logged and nothing changed
    Failed { error: String },
}

impl OnboardingOutcome {
    /// Identifier recorded in the session, if any
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::DefaultIdentity { user_id } | Self::Created { user_id } => Some(user_id.as_str()),
            Self::Failed { .. } => None,
        }
    }
}

/// Onboarding service
pub struct OnboardingService {
    api: Arc<dyn PetApi>,
    event_log: Arc<dyn EventLog>,
}

impl OnboardingService {
    pub fn new(api: Arc<dyn PetApi>, event_log: Arc<dyn EventLog>) -> Self {
        Self { api, event_log }
    }

    /// Handle a create-user request
    ///
    /// An absent or empty `external_id` falls back to the default identifier
    /// without touching the network. Otherwise the user is created with the
    /// trimmed pet name. Any failure is written to the event log exactly once
    /// and leaves the session untouched; it is not returned to the caller.
    pub fn handle_create_user(
        &self,
        external_id: Option<&str>,
        pet_name: &str,
        session: &dyn Session,
    ) -> OnboardingOutcome {
        let external_id = external_id.filter(|id| !id.is_empty());

        let result = match external_id {
            None => Self::enter(session, DEFAULT_USER_ID)
                .map(|user_id| OnboardingOutcome::DefaultIdentity { user_id }),
            Some(id) => self
                .api
                .create_user(pet_name.trim(), id)
                .and_then(|user| Self::enter(session, &user.id))
                .map(|user_id| OnboardingOutcome::Created { user_id }),
        };

        result.unwrap_or_else(|e| {
            let mut event = LogEvent::new("create_user_failed")
                .with_error(e.to_string())
                .with_error_details(format!("{:?}", e));
            if let Some(id) = external_id {
                event = event.with_user(id);
            }
            // Logging must never break onboarding
            let _ = self.event_log.log(event);

            OnboardingOutcome::Failed {
                error: e.to_string(),
            }
        })
    }

    /// Record the identifier, then navigate home
    ///
    /// If navigation fails the previous identifier is put back, so a failed
    /// onboarding never leaves a new identifier behind.
    fn enter(session: &dyn Session, user_id: &str) -> Result<String> {
        let previous = session.user_id()?;
        session.set_user_id(user_id)?;

        if let Err(e) = session.navigate(HOME_ROUTE) {
            // The navigation error is the one reported
            let _ = match previous.as_deref() {
                Some(id) => session.set_user_id(id),
                None => session.clear_user_id(),
            };
            return Err(e);
        }

        Ok(user_id.to_string())
    }
}
