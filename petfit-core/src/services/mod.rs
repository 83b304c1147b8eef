//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod logging;
mod onboarding;
mod pet;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use onboarding::{OnboardingOutcome, OnboardingService};
pub use pet::PetService;
