pub mod exam;
pub mod nerves;
pub mod quiz;
pub mod review;
pub mod stats;

use askama::Template;
use axum::{extract::State, response::Html};
use chrono::Utc;

use crate::domain::BoneCategory;
use crate::filters;
use crate::quiz::QuizRun;
use crate::state::AppState;
use crate::store::{self, LogOnError};
use crate::user::UserId;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub correct: u32,
  pub total: u32,
  pub accuracy: u32,
  pub streak: u32,
  pub wrong_count: usize,
  pub uid: String,
}

pub async fn index(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  let rec = store::load_record(&state.users_dir(), &uid);

  let template = IndexTemplate {
    correct: rec.stats.correct,
    total: rec.stats.total,
    accuracy: (rec.stats.accuracy() * 100.0).round() as u32,
    streak: rec.streak,
    wrong_count: rec.wrongs.len(),
    uid,
  };

  Html(template.render().unwrap_or_default())
}

/// Feedback about the previously submitted answer, rendered on the next page
#[derive(Debug, Clone, Default)]
pub struct Feedback {
  pub shown: bool,
  pub was_correct: bool,
  pub expected: String,
}

impl Feedback {
  fn answered(was_correct: bool, expected: &str) -> Self {
    Self {
      shown: true,
      was_correct,
      expected: expected.to_string(),
    }
  }
}

/// Parse the category select value; "hepsi" (all) maps to no filter
pub(crate) fn parse_focus(focus: &str) -> Option<BoneCategory> {
  BoneCategory::parse(focus)
}

/// Record stats and bump the streak exactly once when a run completes
pub(crate) fn complete_run_if_due(state: &AppState, uid: &str, run: &mut QuizRun) {
  if let Some(summary) = run.finish() {
    let users_dir = state.users_dir();
    store::add_stats(&users_dir, uid, summary.correct, summary.total)
      .log_warn("Failed to record run stats");
    store::bump_streak(&users_dir, uid, Utc::now().date_naive())
      .log_warn("Failed to bump streak");
  }
}

pub use exam::{exam_answer, exam_page, exam_start, exam_stop};
pub use nerves::{nerves_answer, nerves_page, nerves_skip, nerves_start};
pub use quiz::{quiz_answer, quiz_page, quiz_skip, quiz_start};
pub use review::{review_answer, review_clear, review_page, review_skip, review_start};
pub use stats::{export_progress, import_progress, stats_page, stats_reset};
