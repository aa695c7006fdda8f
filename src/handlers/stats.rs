//! Stats page, reset, and progress export/import.

use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::filters;
use crate::state::AppState;
use crate::store::{self, LogOnError, StoreError};
use crate::user::{self, UserId};

#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
  pub correct: u32,
  pub total: u32,
  pub accuracy: u32,
  pub streak: u32,
  pub uid: String,
  pub personal_link: String,
  pub has_message: bool,
  pub message_is_error: bool,
  pub message: String,
}

#[derive(Deserialize)]
pub struct ImportForm {
  #[serde(default)]
  pub payload: String,
}

fn render(state: &AppState, uid: &str, message: Option<Result<&str, String>>) -> Html<String> {
  let rec = store::load_record(&state.users_dir(), uid);

  let (has_message, message_is_error, message) = match message {
    Some(Ok(msg)) => (true, false, msg.to_string()),
    Some(Err(msg)) => (true, true, msg),
    None => (false, false, String::new()),
  };

  let template = StatsTemplate {
    correct: rec.stats.correct,
    total: rec.stats.total,
    accuracy: (rec.stats.accuracy() * 100.0).round() as u32,
    streak: rec.streak,
    uid: uid.to_string(),
    personal_link: user::personal_link(uid),
    has_message,
    message_is_error,
    message,
  };

  Html(template.render().unwrap_or_default())
}

pub async fn stats_page(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  render(&state, &uid, None)
}

pub async fn stats_reset(State(state): State<AppState>, UserId(uid): UserId) -> Redirect {
  store::reset_stats(&state.users_dir(), &uid).log_warn("Failed to reset stats");
  Redirect::to("/stats")
}

/// Download the user's record as a JSON attachment
pub async fn export_progress(
  State(state): State<AppState>,
  UserId(uid): UserId,
) -> impl IntoResponse {
  match store::export_progress(&state.users_dir(), &uid) {
    Ok(json) => (
      StatusCode::OK,
      [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
          header::CONTENT_DISPOSITION,
          "attachment; filename=\"skull_trainer_progress.json\"".to_string(),
        ),
      ],
      json,
    ),
    Err(e) => {
      tracing::warn!("Export failed for {}: {}", uid, e);
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        [
          (header::CONTENT_TYPE, "text/plain".to_string()),
          (header::CONTENT_DISPOSITION, "inline".to_string()),
        ],
        "Export failed".to_string(),
      )
    }
  }
}

/// Import a pasted export payload, replacing the user's record
pub async fn import_progress(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<ImportForm>,
) -> Html<String> {
  if form.payload.trim().is_empty() {
    return render(&state, &uid, Some(Err("Önce JSON yapıştır".to_string())));
  }

  let message = match store::import_progress(&state.users_dir(), &uid, &form.payload) {
    Ok(()) => Ok("Import tamam"),
    Err(StoreError::Invalid(msg)) => Err(msg.to_string()),
    Err(e) => {
      tracing::warn!("Import failed for {}: {}", uid, e);
      Err("Import sırasında beklenmeyen hata oldu.".to_string())
    }
  };

  render(&state, &uid, Some(message))
}
