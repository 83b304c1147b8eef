//! Session port - identifier state and navigation
//!
//! Plays the part of the UI state setter and router of a front end: the
//! onboarding handler records who the user is and where to go next.

use crate::domain::result::Result;

/// Route shown after a user has been identified
pub const HOME_ROUTE: &str = "/";

pub trait Session: Send + Sync {
    /// Record the identifier used by every later API call
    fn set_user_id(&self, user_id: &str) -> Result<()>;

    /// Move to a route
    fn navigate(&self, route: &str) -> Result<()>;

    /// Forget the recorded identifier
    fn clear_user_id(&self) -> Result<()>;

    /// Currently recorded identifier, if any
    fn user_id(&self) -> Result<Option<String>>;
}
