//! Practice quiz handlers (learner mode).

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
#[template(path = "quiz.html")]
pub struct QuizTemplate {
  pub running: bool,
  pub finished: bool,
  pub prompt: String,
  pub number: usize,
  pub total: usize,
  pub correct: usize,
  pub xp: u32,
  pub accuracy: u32,
  pub progress: u32,
  pub feedback: Feedback,
}

#[derive(Deserialize)]
pub struct StartQuizForm {
  pub count: usize,
  #[serde(default)]
  pub focus: String,
}

#[derive(Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub answer: String,
}

fn render(state: &AppState, uid: &str, feedback: Feedback) -> Html<String> {
  let mut template = QuizTemplate {
    running: false,
    finished: false,
    prompt: String::new(),
    number: 0,
    total: 0,
    correct: 0,
    xp: 0,
    accuracy: 0,
    progress: 0,
    feedback,
  };

  if let Some(mut run) = session::get_run(uid, QuizMode::Practice) {
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
      template.progress = run.progress_percent();
    }
    template.total = run.total;
    template.correct = run.correct;
    template.xp = run.xp();
    template.accuracy = run.accuracy_percent();
  }

  Html(template.render().unwrap_or_default())
}

pub async fn quiz_page(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  render(&state, &uid, Feedback::default())
}

pub async fn quiz_start(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<StartQuizForm>,
) -> Html<String> {
  let count = form
    .count
    .clamp(config::PRACTICE_MIN_QUESTIONS, config::PRACTICE_MAX_QUESTIONS);
  let pool = content::bones_in(parse_focus(&form.focus));

  session::put_run(&uid, QuizRun::practice(pool, count));
  render(&state, &uid, Feedback::default())
}

pub async fn quiz_answer(
  State(state): State<AppState>,
  UserId(uid): UserId,
  Form(form): Form<AnswerForm>,
) -> Html<String> {
  let Some(mut run) = session::get_run(&uid, QuizMode::Practice) else {
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

pub async fn quiz_skip(State(state): State<AppState>, UserId(uid): UserId) -> Html<String> {
  if let Some(mut run) = session::get_run(&uid, QuizMode::Practice) {
    if run.current.is_some() {
      run.skip();
    }
    complete_run_if_due(&state, &uid, &mut run);
    session::put_run(&uid, run);
  }
  render(&state, &uid, Feedback::default())
}
