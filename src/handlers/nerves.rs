//! Cranial nerve drill handlers.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::filters;
use crate::quiz::{check_answer, QuizMode, QuizRun};
use crate::session;
use crate::state::AppState;
use crate::store::{self, LogOnError};
use crate::user::UserId;

use super::{complete_run_if_due, Feedback};

#[derive(Template)]
#[template(path = "nerves.html")]
pub struct NervesTemplate {
  pub running: bool,
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
  let mut template = NervesTemplate {
    running: false,
    finished: false,
    prompt: String::new(),
    number: 0,
    total: 0,
    correct: 0,
    feedback,
  };

  if let Some(mut run) = session::get_run(uid, QuizMode::NerveDrill) {
    if run.is_complete() {
      complete_run_if_due(state, uid, &mut run);
      session::put_run(uid, run.clone());
      template.finished = true;
    } else {
      run.ensure_current(&[], &mut rand::rng());
      session::put_run(uid, run.clone());
      template.running = true;
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

pub async fn nerves_page(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  render(&state, &uid, Feedback::default())
}

pub async fn nerves_start(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  session::put_run(&uid, QuizRun::nerve_drill());
  render(&state, &uid, Feedback::default())
}

pub async fn nerves_answer(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<AnswerForm>,
) -> Html<String> {
  let Some(mut run) = session::get_run(&uid, QuizMode::NerveDrill) else {
    return render(&state, &uid, Feedback::default());
  };

  let mut feedback = Feedback::default();
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

  complete_run_if_due(&state, &uid, &mut run);
  session::put_run(&uid, run);
  render(&state, &uid, feedback)
}

pub async fn nerves_skip(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  if let Some(mut run) = session::get_run(&uid, QuizMode::NerveDrill) {
    if run.current.is_some() {
      run.skip();
    }
    complete_run_if_due(&state, &uid, &mut run);
    session::put_run(&uid, run);
  }
  render(&state, &uid, Feedback::default())
}
