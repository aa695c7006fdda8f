//! In-memory storage for active quiz runs.
//!
//! Runs are keyed by user id + quiz mode so a user can have one active run
//! per mode. Entries auto-expire after a configurable duration of inactivity.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use crate::config;
use crate::quiz::{QuizMode, QuizRun};

/// Run entry with last access time for expiration
struct RunEntry {
  run: QuizRun,
  last_access: DateTime<Utc>,
}

/// Global run store
static RUNS: LazyLock<Mutex<HashMap<String, RunEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

fn key(uid: &str, mode: QuizMode) -> String {
  format!("{}:{}", uid, mode.as_str())
}

/// Get the user's active run for a mode, if any
pub fn get_run(uid: &str, mode: QuizMode) -> Option<QuizRun> {
  let mut runs = RUNS.lock().expect("Run store lock poisoned");

  // Clean up expired runs occasionally (~10% chance)
  if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut runs);
  }

  runs.get_mut(&key(uid, mode)).map(|entry| {
    entry.last_access = Utc::now();
    entry.run.clone()
  })
}

/// Store or replace a run
pub fn put_run(uid: &str, run: QuizRun) {
  let mut runs = RUNS.lock().expect("Run store lock poisoned");
  runs.insert(
    key(uid, run.mode),
    RunEntry {
      run,
      last_access: Utc::now(),
    },
  );
}

/// Drop a run (exam stop, or cleanup after a finished run was shown)
pub fn remove_run(uid: &str, mode: QuizMode) {
  let mut runs = RUNS.lock().expect("Run store lock poisoned");
  runs.remove(&key(uid, mode));
}

/// Clean up expired runs
fn cleanup_expired(runs: &mut HashMap<String, RunEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  runs.retain(|_, entry| entry.last_access > expiry);
}
