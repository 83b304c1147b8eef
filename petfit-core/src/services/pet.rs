//! Pet service - everything a signed-up user does with their pet
//!
//! Resolves the identifier recorded by onboarding and keys every API call by
//! it. Inputs are validated locally so invalid requests never reach the
//! backend.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{
    Attraction, BreakthroughOutcome, CheckinOutcome, DailyCheckOutcome, ExerciseLog,
    ExerciseOutcome, LeaderboardEntry, Pet, PetUpdate, QuestCompletion, TravelCheckin,
    TravelCheckinRequest, User, UserQuest,
};
use crate::ports::{PetApi, Session};

pub struct PetService {
    api: Arc<dyn PetApi>,
    session: Arc<dyn Session>,
}

impl PetService {
    pub fn new(api: Arc<dyn PetApi>, session: Arc<dyn Session>) -> Self {
        Self { api, session }
    }

    /// Identifier of the signed-up user
    pub fn current_user_id(&self) -> Result<String> {
        self.session
            .user_id()?
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::not_found("No user signed up yet. Run signup first."))
    }

    pub fn user(&self) -> Result<User> {
        self.api.get_user(&self.current_user_id()?)
    }

    pub fn pet(&self) -> Result<Pet> {
        self.api.get_pet(&self.current_user_id()?)
    }

    pub fn rename(&self, name: &str) -> Result<Pet> {
        self.update(&PetUpdate::rename(name.trim()))
    }

    pub fn update(&self, update: &PetUpdate) -> Result<Pet> {
        update.validate().map_err(Error::validation)?;
        self.api.update_pet(&self.current_user_id()?, update)
    }

    pub fn log_exercise(&self, log: &ExerciseLog) -> Result<ExerciseOutcome> {
        log.validate().map_err(Error::validation)?;
        self.api.log_exercise(&self.current_user_id()?, log)
    }

    pub fn daily_check(&self) -> Result<DailyCheckOutcome> {
        self.api.daily_check(&self.current_user_id()?)
    }

    pub fn quests(&self) -> Result<Vec<UserQuest>> {
        self.api.daily_quests(&self.current_user_id()?)
    }

    pub fn complete_quest(&self, user_quest_id: i64) -> Result<QuestCompletion> {
        self.api.complete_quest(&self.current_user_id()?, user_quest_id)
    }

    /// Attractions are global; no sign-up needed
    pub fn attractions(&self) -> Result<Vec<Attraction>> {
        self.api.attractions()
    }

    pub fn checkins(&self) -> Result<Vec<TravelCheckin>> {
        self.api.travel_checkins(&self.current_user_id()?)
    }

    pub fn check_in(&self, checkin: &TravelCheckinRequest) -> Result<CheckinOutcome> {
        checkin.validate().map_err(Error::validation)?;
        self.api.create_travel_checkin(&self.current_user_id()?, checkin)
    }

    pub fn start_travel(&self) -> Result<Attraction> {
        self.api.start_travel(&self.current_user_id()?)
    }

    pub fn complete_breakthrough(&self) -> Result<BreakthroughOutcome> {
        self.api.complete_breakthrough(&self.current_user_id()?)
    }

    pub fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        if limit == 0 {
            return Err(Error::validation("leaderboard limit must be at least 1"));
        }
        self.api.level_leaderboard(limit)
    }
}
