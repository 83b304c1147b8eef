//! PetFit Core - client logic for the Pet Fitness API
//!
//! This crate implements the core client logic following hexagonal architecture:
//!
//! - **domain**: Wire entities (User, Pet, Quest, Attraction, etc.)
//! - **ports**: Trait definitions for external dependencies (PetApi, Session, EventLog)
//! - **services**: Onboarding, pet operations and event logging
//! - **adapters**: Concrete implementations (reqwest client, file-backed session)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::file_session::FileSession;
use adapters::http::PetApiClient;
use config::Config;

// Re-export commonly used types at crate root
pub use domain::{
    Attraction, BreakthroughOutcome, CheckinOutcome, DailyCheckOutcome, ExerciseLog,
    ExerciseOutcome, LeaderboardEntry, Pet, PetStage, PetUpdate, QuestCompletion,
    TravelCheckin, TravelCheckinRequest, User, UserQuest, DEFAULT_USER_ID,
};
pub use domain::result::{Error, OperationResult};
pub use services::{
    EntryPoint, LogEntry, LogEvent, LoggingService, OnboardingOutcome, OnboardingService,
    PetService,
};

/// Main context for PetFit operations
///
/// Wires the HTTP client, the session file and the event log under one app
/// directory.
pub struct PetfitContext {
    pub config: Config,
    pub api: Arc<PetApiClient>,
    pub session: Arc<FileSession>,
    pub logging_service: Arc<LoggingService>,
    pub onboarding_service: OnboardingService,
    pub pet_service: PetService,
}

impl PetfitContext {
    /// Create a new PetFit context
    pub fn new(app_dir: &Path, entry_point: EntryPoint, app_version: &str) -> Result<Self> {
        std::fs::create_dir_all(app_dir)
            .with_context(|| format!("Failed to create app directory: {:?}", app_dir))?;

        let config = Config::load(app_dir)?;
        let api = Arc::new(PetApiClient::with_timeout(config.base_url(), config.timeout())?);
        let session = Arc::new(FileSession::open(app_dir)?);
        let logging_service = Arc::new(LoggingService::new(app_dir, entry_point, app_version)?);

        let onboarding_service = OnboardingService::new(api.clone(), logging_service.clone());
        let pet_service = PetService::new(api.clone(), session.clone());

        Ok(Self {
            config,
            api,
            session,
            logging_service,
            onboarding_service,
            pet_service,
        })
    }

    /// Run onboarding against this context's session
    pub fn sign_up(&self, external_id: Option<&str>, pet_name: &str) -> OnboardingOutcome {
        self.onboarding_service
            .handle_create_user(external_id, pet_name, self.session.as_ref())
    }
}
