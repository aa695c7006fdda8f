//! Review mode: list missed questions and replay them.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::config;
use crate::filters;
use crate::quiz::{check_answer, QuizMode, QuizRun};
use crate::session;
use crate::state::AppState;
use crate::store::{self, LogOnError};
use crate::user::UserId;

use super::{complete_run_if_due, Feedback};

/// One listed miss
pub struct WrongView {
  pub q: String,
  pub user: String,
  pub correct: String,
}

#[derive(Template)]
#[template(path = "review.html")]
pub struct ReviewTemplate {
  pub wrongs: Vec<WrongView>,
  pub wrong_count: usize,
  pub replaying: bool,
  pub finished: bool,
  pub prompt: String,
  pub number: usize,
  pub total: usize,
  pub correct: usize,
  pub feedback: Feedback,
}

#[derive(Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub answer: String,
}

fn render(state: &AppState, uid: &str, feedback: Feedback) -> Html<String> {
  let all_wrongs = store::get_wrongs(&state.users_dir(), uid);

  // Latest misses first, capped for display
  let wrongs: Vec<WrongView> = all_wrongs
    .iter()
    .rev()
    .take(config::REVIEW_DISPLAY_LIMIT)
    .map(|w| WrongView {
      q: w.q.clone(),
      user: w.user.clone(),
      correct: w.correct.clone(),
    })
    .collect();

  let mut template = ReviewTemplate {
    wrong_count: all_wrongs.len(),
    wrongs,
    replaying: false,
    finished: false,
    prompt: String::new(),
    number: 0,
    total: 0,
    correct: 0,
    feedback,
  };

  if let Some(mut run) = session::get_run(uid, QuizMode::Review) {
    if run.is_complete() {
      complete_run_if_due(state, uid, &mut run);
      session::put_run(uid, run.clone());
      template.finished = true;
    } else {
      run.ensure_current(&[], &mut rand::rng());
      session::put_run(uid, run.clone());
      template.replaying = true;
      template.prompt = run
        .current
        .as_ref()
        .map(|q| q.prompt.clone())
        .unwrap_or_default();
      template.number = run.answered + 1;
    }
    template.total = run.total;
    template.correct = run.correct;
  }

  Html(template.render().unwrap_or_default())
}

pub async fn review_page(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  render(&state, &uid, Feedback::default())
}

/// Start a replay run over the whole wrong-answer log. An empty log starts
/// nothing, so no 0/0 session is ever recorded.
pub async fn review_start(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  let wrongs = store::get_wrongs(&state.users_dir(), &uid);
  if !wrongs.is_empty() {
    session::put_run(&uid, QuizRun::review(wrongs));
  }
  render(&state, &uid, Feedback::default())
}

pub async fn review_answer(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<AnswerForm>,
) -> Html<String> {
  let Some(mut run) = session::get_run(&uid, QuizMode::Review) else {
    return render(&state, &uid, Feedback::default());
  };

  let mut feedback = Feedback::default();
  if let Some(question) = run.current.clone() {
    let ok = check_answer(&question, &form.answer);
    if ok {
      // A correctly replayed miss leaves the log
      if let Some(entry) = run.current_replay_entry().cloned() {
        store::remove_wrong(&state.users_dir(), &uid, entry.ts, &entry.q)
          .log_warn("Failed to remove reviewed wrong answer");
      }
    }
    run.record_answer(ok);
    feedback = Feedback::answered(ok, &question.answer);
  }

  complete_run_if_due(&state, &uid, &mut run);
  session::put_run(&uid, run);
  render(&state, &uid, feedback)
}

pub async fn review_skip(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  if let Some(mut run) = session::get_run(&uid, QuizMode::Review) {
    if run.current.is_some() {
      run.skip();
    }
    complete_run_if_due(&state, &uid, &mut run);
    session::put_run(&uid, run);
  }
  render(&state, &uid, Feedback::default())
}

pub async fn review_clear(State(state): State<AppState>, UserId(uid): UserId) -> Redirect {
  store::clear_wrongs(&state.users_dir(), &uid).log_warn("Failed to clear wrong answers");
  session::remove_run(&uid, QuizMode::Review);
  Redirect::to("/review")
}
