//! Application state passed to all handlers.

use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    /// Base path for application data (user records live under users/)
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory holding one JSON record per user
    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.join("users")
    }
}
