//! Per-user progress record persisted as a small JSON blob.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifetime answer counters. Counts are non-negative by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
  pub correct: u32,
  pub total: u32,
}

impl Stats {
  /// Accuracy as a fraction in 0..=1; zero before any answers
  pub fn accuracy(&self) -> f64 {
    if self.total > 0 {
      self.correct as f64 / self.total as f64
    } else {
      0.0
    }
  }
}

/// One previously missed question, replayed in review mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
  /// Question prompt as shown to the user
  pub q: String,
  /// What the user typed
  pub user: String,
  /// Expected answer, possibly a " / " join of alternatives
  pub correct: String,
  /// Unix timestamp of the miss
  pub ts: i64,
}

/// Whole per-user record. New fields default so older exports still import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
  pub stats: Stats,
  #[serde(default)]
  pub wrongs: Vec<WrongAnswer>,
  #[serde(default)]
  pub streak: u32,
  #[serde(default)]
  pub last_day: Option<NaiveDate>,
}

/// Envelope for progress export/import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
  pub uid: String,
  pub exported_at: i64,
  pub data: UserRecord,
}
