//! Pet Fitness API port
//!
//! Defines the interface to the backend. The services depend on this trait,
//! not on the HTTP client, so handlers can be exercised without a network.

use crate::domain::result::Result;
use crate::domain::{
    Attraction, BreakthroughOutcome, CheckinOutcome, DailyCheckOutcome, ExerciseLog,
    ExerciseOutcome, LeaderboardEntry, Pet, PetUpdate, QuestCompletion, TravelCheckin,
    TravelCheckinRequest, User, UserQuest,
};

/// Pet Fitness backend
///
/// Every operation except `create_user`, `attractions` and
/// `level_leaderboard` is keyed by the string user identifier returned from
/// `create_user` (or the default identifier).
pub trait PetApi: Send + Sync {
    /// Create the user (and its egg) or return the existing one
    ///
    /// # Arguments
    /// * `pet_name` - Name for the new pet, passed through as given
    /// * `external_id` - External (TownPass) identifier, passed through as given
    fn create_user(&self, pet_name: &str, external_id: &str) -> Result<User>;

    /// Fetch a user with its pet
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Fetch the pet, resetting its daily stats server-side on a new day
    fn get_pet(&self, user_id: &str) -> Result<Pet>;

    fn update_pet(&self, user_id: &str, update: &PetUpdate) -> Result<Pet>;

    fn log_exercise(&self, user_id: &str, log: &ExerciseLog) -> Result<ExerciseOutcome>;

    /// Apply yesterday's exercise check (mood/strength decay)
    fn daily_check(&self, user_id: &str) -> Result<DailyCheckOutcome>;

    /// Today's quests, generated on first request of the day
    fn daily_quests(&self, user_id: &str) -> Result<Vec<UserQuest>>;

    fn complete_quest(&self, user_id: &str, user_quest_id: i64) -> Result<QuestCompletion>;

    fn attractions(&self) -> Result<Vec<Attraction>>;

    fn travel_checkins(&self, user_id: &str) -> Result<Vec<TravelCheckin>>;

    fn create_travel_checkin(
        &self,
        user_id: &str,
        checkin: &TravelCheckinRequest,
    ) -> Result<CheckinOutcome>;

    /// Pick a random attraction for the pending breakthrough
    fn start_travel(&self, user_id: &str) -> Result<Attraction>;

    fn complete_breakthrough(&self, user_id: &str) -> Result<BreakthroughOutcome>;

    fn level_leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>>;
}
