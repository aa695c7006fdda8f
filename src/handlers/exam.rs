//! Timed exam mode handlers.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::config;
use crate::content;
use crate::filters;
use crate::quiz::{check_answer, QuizMode, QuizRun};
use crate::session;
use crate::state::AppState;
use crate::store::{self, LogOnError};
use crate::user::UserId;

use super::{complete_run_if_due, parse_focus, Feedback};

#[derive(Template)]
#[template(path = "exam.html")]
pub struct ExamTemplate {
  pub running: bool,
  pub finished: bool,
  pub prompt: String,
  pub number: usize,
  pub total: usize,
  pub correct: usize,
  pub seconds_left: i64,
  pub time_left: String,
  pub feedback: Feedback,
}

#[derive(Deserialize)]
pub struct StartExamForm {
  pub count: usize,
  pub minutes: i64,
  #[serde(default)]
  pub focus: String,
}

#[derive(Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub answer: String,
}

fn format_mm_ss(seconds: i64) -> String {
  format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn render(state: &AppState, uid: &str, feedback: Feedback) -> Html<String> {
  let mut template = ExamTemplate {
    running: false,
    finished: false,
    prompt: String::new(),
    number: 0,
    total: 0,
    correct: 0,
    seconds_left: 0,
    time_left: String::new(),
    feedback,
  };

  if let Some(mut run) = session::get_run(uid, QuizMode::Exam) {
    if run.is_complete() {
      complete_run_if_due(state, uid, &mut run);
      session::put_run(uid, run.clone());
      template.finished = true;
    } else {
      let wrongs = store::get_wrongs(&state.users_dir(), uid);
      run.ensure_current(&wrongs, &mut rand::rng());
      session::put_run(uid, run.clone());
      template.running = true;
      template.prompt = run
        .current
        .as_ref()
        .map(|q| q.prompt.clone())
        .unwrap_or_default();
      template.number = run.answered + 1;
      let left = run.seconds_left().unwrap_or(0);
      template.seconds_left = left;
      template.time_left = format_mm_ss(left);
    }
    template.total = run.total;
    template.correct = run.correct;
  }

  Html(template.render().unwrap_or_default())
}

pub async fn exam_page(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  render(&state, &uid, Feedback::default())
}

pub async fn exam_start(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<StartExamForm>,
) -> Html<String> {
  let count = form
    .count
    .clamp(config::EXAM_MIN_QUESTIONS, config::EXAM_MAX_QUESTIONS);
  let minutes = form
    .minutes
    .clamp(config::EXAM_MIN_MINUTES, config::EXAM_MAX_MINUTES);
  let pool = content::bones_in(parse_focus(&form.focus));

  session::put_run(&uid, QuizRun::exam(pool, count, minutes));
  render(&state, &uid, Feedback::default())
}

pub async fn exam_answer(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<AnswerForm>,
) -> Html<String> {
  let Some(mut run) = session::get_run(&uid, QuizMode::Exam) else {
    return render(&state, &uid, Feedback::default());
  };

  let mut feedback = Feedback::default();
  // Answers that race the deadline are discarded; the run is already complete
  if !run.is_complete() {
    if let Some(question) = run.current.clone() {
      let ok = check_answer(&question, &form.answer);
      if !ok {
        store::log_wrong(
          &state.users_dir(),
          &uid,
          &question.prompt,
          &form.answer,
          &question.answer,
        )
        .log_warn("Failed to log wrong answer");
      }
      run.record_answer(ok);
      feedback = Feedback::answered(ok, &question.answer);
    }
  }

  complete_run_if_due(&state, &uid, &mut run);
  session::put_run(&uid, run);
  render(&state, &uid, feedback)
}

/// Abort the exam. Nothing is recorded.
pub async fn exam_stop(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  session::remove_run(&uid, QuizMode::Exam);
  render(&state, &uid, Feedback::default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_mm_ss() {
    assert_eq!(format_mm_ss(0), "00:00");
    assert_eq!(format_mm_ss(59), "00:59");
    assert_eq!(format_mm_ss(272), "04:32");
    assert_eq!(format_mm_ss(3600), "60:00");
  }
}
