//! Shared state handed to every handler.

use std::path::PathBuf;

use crate::config::AppMode;
use crate::users::SharedUsers;

/// Dependencies resolved at boot and shared across requests.
pub struct AppState {
    pub(crate) mode: AppMode,
    pub(crate) users: SharedUsers,
    pub(crate) web_dist: PathBuf,
}

impl AppState {
    /// Bundle the resolved dependencies.
    #[must_use]
    pub fn new(mode: AppMode, users: SharedUsers, web_dist: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            users,
            web_dist: web_dist.into(),
        }
    }
}
