//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The services
//! depend only on these traits, not on concrete implementations.

mod event_log;
mod pet_api;
mod session;

pub use event_log::EventLog;
pub use pet_api::PetApi;
pub use session::{Session, HOME_ROUTE};
