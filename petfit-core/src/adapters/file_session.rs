//! File-backed session
//!
//! Persists the current user identifier and route to `session.json` in the
//! app directory so later CLI invocations act as the same user.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::ports::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    route: Option<String>,
}

/// Session stored as JSON on disk
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    state: Mutex<SessionFile>,
}

impl FileSession {
    /// Open the session in `app_dir`, starting empty if none exists
    ///
    /// An unreadable session file is treated as signed out.
    pub fn open(app_dir: &Path) -> Result<Self> {
        let path = app_dir.join("session.json");

        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SessionFile::default()
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last route navigated to
    pub fn route(&self) -> Result<Option<String>> {
        Ok(self.lock()?.route.clone())
    }

    /// Forget the user (sign out)
    pub fn clear(&self) -> Result<()> {
        let mut state = self.lock()?;
        *state = SessionFile::default();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SessionFile>> {
        self.state
            .lock()
            .map_err(|e| Error::Other(format!("Session lock poisoned: {}", e)))
    }

    /// Apply a change and write the file; memory is only updated once the
    /// write succeeded
    fn update(&self, change: impl FnOnce(&mut SessionFile)) -> Result<()> {
        let mut state = self.lock()?;
        let mut next = state.clone();
        change(&mut next);

        let content = serde_json::to_string_pretty(&next)?;
        std::fs::write(&self.path, content)?;

        *state = next;
        Ok(())
    }
}

impl Session for FileSession {
    fn set_user_id(&self, user_id: &str) -> Result<()> {
        self.update(|s| s.user_id = Some(user_id.to_string()))
    }

    fn navigate(&self, route: &str) -> Result<()> {
        self.update(|s| s.route = Some(route.to_string()))
    }

    fn clear_user_id(&self) -> Result<()> {
        self.update(|s| s.user_id = None)
    }

    fn user_id(&self) -> Result<Option<String>> {
        Ok(self.lock()?.user_id.clone())
    }
}
