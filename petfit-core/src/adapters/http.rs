//! Pet Fitness API client
//!
//! Blocking reqwest client for the Pet Fitness backend. Every non-success
//! status becomes `Error::RequestFailed`; nothing is retried.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{
    Attraction, BreakthroughOutcome, CheckinOutcome, CreateUserRequest, DailyCheckOutcome,
    ExerciseLog, ExerciseOutcome, LeaderboardEntry, Pet, PetUpdate, QuestCompletion,
    TravelCheckin, TravelCheckinRequest, User, UserQuest,
};
use crate::ports::PetApi;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pet Fitness API client
#[derive(Debug)]
pub struct PetApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

/// Parse and normalise an API base URL
///
/// Only http and https are accepted. Query, fragment and trailing slashes
/// are dropped.
pub fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
    let mut parsed = Url::parse(base_url.trim())
        .with_context(|| format!("Invalid API base URL: {}", base_url))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("API base URL must use http or https, got {}", parsed.scheme());
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        anyhow::bail!("API base URL must include a host");
    }

    parsed.set_query(None);
    parsed.set_fragment(None);
    let trimmed = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&trimmed);

    Ok(parsed)
}

impl PetApiClient {
    /// Create a new client with the default timeout
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Base URL the client talks to
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL from path segments
    ///
    /// Segments are percent-encoded, so user identifiers cannot escape their
    /// path position. A trailing empty segment yields a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode a JSON reply
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, context: &str) -> Result<T> {
        let response = request.send().map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request_failed(context, status.as_u16()));
        }

        response
            .json::<T>()
            .map_err(|e| Error::Decode(format!("{}: {}", context, e)))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Transport(format!("Request timed out after {:?}", self.timeout))
        } else if error.is_connect() {
            Error::Transport(format!("Unable to connect to {}", self.base_url()))
        } else {
            Error::Transport(format!("Request failed: {}", error))
        }
    }
}

impl PetApi for PetApiClient {
    fn create_user(&self, pet_name: &str, external_id: &str) -> Result<User> {
        let url = self.endpoint(&["users", ""])?;
        let body = CreateUserRequest::new(external_id, pet_name);
        self.send(self.client.post(url).json(&body), "Failed to create user")
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        let url = self.endpoint(&["users", user_id])?;
        self.send(self.client.get(url), "Failed to fetch user")
    }

    fn get_pet(&self, user_id: &str) -> Result<Pet> {
        let url = self.endpoint(&["users", user_id, "pet"])?;
        self.send(self.client.get(url), "Failed to fetch pet")
    }

    fn update_pet(&self, user_id: &str, update: &PetUpdate) -> Result<Pet> {
        let url = self.endpoint(&["users", user_id, "pet"])?;
        self.send(self.client.patch(url).json(update), "Failed to update pet")
    }

    fn log_exercise(&self, user_id: &str, log: &ExerciseLog) -> Result<ExerciseOutcome> {
        let url = self.endpoint(&["users", user_id, "exercise"])?;
        self.send(self.client.post(url).json(log), "Failed to log exercise")
    }

    fn daily_check(&self, user_id: &str) -> Result<DailyCheckOutcome> {
        let url = self.endpoint(&["users", user_id, "daily-check"])?;
        self.send(self.client.post(url), "Failed to run daily check")
    }

    fn daily_quests(&self, user_id: &str) -> Result<Vec<UserQuest>> {
        let url = self.endpoint(&["users", user_id, "quests"])?;
        self.send(self.client.get(url), "Failed to fetch quests")
    }

    fn complete_quest(&self, user_id: &str, user_quest_id: i64) -> Result<QuestCompletion> {
        let quest_id = user_quest_id.to_string();
        let url = self.endpoint(&["users", user_id, "quests", &quest_id, "complete"])?;
        self.send(self.client.post(url), "Failed to complete quest")
    }

    fn attractions(&self) -> Result<Vec<Attraction>> {
        let url = self.endpoint(&["travel", "attractions"])?;
        self.send(self.client.get(url), "Failed to fetch attractions")
    }

    fn travel_checkins(&self, user_id: &str) -> Result<Vec<TravelCheckin>> {
        let url = self.endpoint(&["users", user_id, "travel", "checkins"])?;
        self.send(self.client.get(url), "Failed to fetch travel check-ins")
    }

    fn create_travel_checkin(
        &self,
        user_id: &str,
        checkin: &TravelCheckinRequest,
    ) -> Result<CheckinOutcome> {
        let url = self.endpoint(&["users", user_id, "travel", "checkins"])?;
        self.send(self.client.post(url).json(checkin), "Failed to check in")
    }

    fn start_travel(&self, user_id: &str) -> Result<Attraction> {
        let url = self.endpoint(&["users", user_id, "travel", "start"])?;
        self.send(self.client.post(url), "Failed to start travel")
    }

    fn complete_breakthrough(&self, user_id: &str) -> Result<BreakthroughOutcome> {
        let url = self.endpoint(&["users", user_id, "travel", "breakthrough"])?;
        self.send(self.client.post(url), "Failed to complete breakthrough")
    }

    fn level_leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut url = self.endpoint(&["leaderboard", "level"])?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        self.send(self.client.get(url), "Failed to fetch leaderboard")
    }
}
