//! Core domain entities
//!
//! Wire-level data structures of the Pet Fitness API with their local
//! validation rules. No I/O.

mod exercise;
pub mod pet;
mod quest;
pub mod result;
pub mod timestamp;
mod travel;
mod user;

pub use exercise::{DailyCheckOutcome, ExerciseLog, ExerciseOutcome};
pub use pet::{Pet, PetStage, PetUpdate};
pub use quest::{Quest, QuestCompletion, UserQuest};
pub use travel::{
    Attraction, BreakthroughOutcome, CheckinOutcome, LeaderboardEntry, TravelCheckin,
    TravelCheckinRequest,
};
pub use user::{CreateUserRequest, User, DEFAULT_USER_ID};
