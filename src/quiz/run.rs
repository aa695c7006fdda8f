//! Per-mode quiz run state machine.
//!
//! A run advances not-started → running → finished: "not started" is the
//! absence of a run in the session store, a stored run is running until its
//! question budget (or exam deadline) is exhausted, and `finish` fires
//! exactly once so completion stats are recorded exactly once.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config;
use crate::domain::{Bone, WrongAnswer};

use super::question::{make_bone_question, make_nerve_question, make_review_question, Question};
use super::sampler::pick_weighted;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizMode {
  Practice,
  Exam,
  NerveDrill,
  Review,
}

impl QuizMode {
  /// Stable key fragment for the session store
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Practice => "practice",
      Self::Exam => "exam",
      Self::NerveDrill => "nerves",
      Self::Review => "review",
    }
  }
}

/// Where a run draws its questions from
#[derive(Debug, Clone)]
enum QuestionPool {
  Bones(Vec<&'static Bone>),
  Nerves,
  Replay(Vec<WrongAnswer>),
}

/// Final score of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  pub correct: u32,
  pub total: u32,
}

#[derive(Debug, Clone)]
pub struct QuizRun {
  pub mode: QuizMode,
  pool: QuestionPool,
  pub answered: usize,
  pub correct: usize,
  pub total: usize,
  pub current: Option<Question>,
  deadline: Option<DateTime<Utc>>,
  finished: bool,
}

impl QuizRun {
  pub fn practice(pool: Vec<&'static Bone>, total: usize) -> Self {
    Self::new(QuizMode::Practice, QuestionPool::Bones(pool), total, None)
  }

  pub fn exam(pool: Vec<&'static Bone>, total: usize, minutes: i64) -> Self {
    let deadline = Utc::now() + Duration::minutes(minutes);
    Self::new(QuizMode::Exam, QuestionPool::Bones(pool), total, Some(deadline))
  }

  pub fn nerve_drill() -> Self {
    Self::new(
      QuizMode::NerveDrill,
      QuestionPool::Nerves,
      config::NERVE_DRILL_QUESTIONS,
      None,
    )
  }

  pub fn review(wrongs: Vec<WrongAnswer>) -> Self {
    let total = wrongs.len();
    Self::new(QuizMode::Review, QuestionPool::Replay(wrongs), total, None)
  }

  fn new(
    mode: QuizMode,
    pool: QuestionPool,
    total: usize,
    deadline: Option<DateTime<Utc>>,
  ) -> Self {
    Self {
      mode,
      pool,
      answered: 0,
      correct: 0,
      total,
      current: None,
      deadline,
      finished: false,
    }
  }

  /// Generate the next question if none is pending. The wrong-answer log
  /// feeds the adaptive sampler for bone pools.
  pub fn ensure_current<R: Rng + ?Sized>(&mut self, wrongs: &[WrongAnswer], rng: &mut R) {
    if self.current.is_some() || self.is_complete() {
      return;
    }
    self.current = match &self.pool {
      QuestionPool::Bones(pool) => {
        pick_weighted(pool, wrongs, rng).map(|bone| make_bone_question(bone, rng))
      }
      QuestionPool::Nerves => Some(make_nerve_question(rng)),
      QuestionPool::Replay(entries) => entries.get(self.answered).map(make_review_question),
    };
  }

  /// The wrong-answer entry behind the pending replay question, if any
  pub fn current_replay_entry(&self) -> Option<&WrongAnswer> {
    match &self.pool {
      QuestionPool::Replay(entries) if self.current.is_some() => entries.get(self.answered),
      _ => None,
    }
  }

  /// Record a submitted answer and advance
  pub fn record_answer(&mut self, is_correct: bool) {
    if is_correct {
      self.correct += 1;
    }
    self.answered += 1;
    self.current = None;
  }

  /// Advance without answering
  pub fn skip(&mut self) {
    self.answered += 1;
    self.current = None;
  }

  /// Seconds remaining before the exam deadline, if this run has one
  pub fn seconds_left(&self) -> Option<i64> {
    self
      .deadline
      .map(|d| (d - Utc::now()).num_seconds().max(0))
  }

  fn out_of_time(&self) -> bool {
    self.seconds_left() == Some(0)
  }

  /// All questions answered, or the deadline passed
  pub fn is_complete(&self) -> bool {
    self.finished || self.answered >= self.total || self.out_of_time()
  }

  /// Transition to finished. Returns the summary the first time only, so the
  /// caller records stats exactly once.
  pub fn finish(&mut self) -> Option<RunSummary> {
    if self.finished || !self.is_complete() {
      return None;
    }
    self.finished = true;
    Some(RunSummary {
      correct: self.correct as u32,
      total: self.total as u32,
    })
  }

  /// Running accuracy over answered questions, in percent
  pub fn accuracy_percent(&self) -> u32 {
    if self.answered == 0 {
      return 0;
    }
    (self.correct * 100 / self.answered) as u32
  }

  /// Display-only XP counter
  pub fn xp(&self) -> u32 {
    self.correct as u32 * config::XP_PER_CORRECT
  }

  /// Progress through the run in percent, counting the pending question
  pub fn progress_percent(&self) -> u32 {
    if self.total == 0 {
      return 100;
    }
    (((self.answered + 1).min(self.total)) * 100 / self.total) as u32
  }
}
