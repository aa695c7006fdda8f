//! Question templates for bones, nerves, and review replay.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::content::CN_FORAMINA;
use crate::domain::{Bone, WrongAnswer};

/// How a submitted answer is compared against the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
  /// Normalized equality with the expected answer
  Exact,
  /// Any single one of the alternatives is accepted
  AnyOf(Vec<String>),
  /// Accept a normalized substring of the expected answer, spaces optional.
  /// Used for foramen→nerve so "cn x" or "vagus" both pass for "CN X (Vagus)".
  Contains,
  /// Any alternative, or the whole displayed answer. Used for replayed misses
  /// whose stored answer may be a " / " join of alternatives.
  AnyOfOrWhole(Vec<String>),
}

/// One generated question: prompt shown, displayed expected answer, check rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
  pub prompt: String,
  pub answer: String,
  pub check: CheckKind,
}

/// Pick one of the three bone templates uniformly and build the question
pub fn make_bone_question<R: Rng + ?Sized>(bone: &Bone, rng: &mut R) -> Question {
  match rng.random_range(0..3) {
    0 => Question {
      prompt: format!("{} kemiğinin Latin adı nedir?", bone.name),
      answer: bone.latin.to_string(),
      check: CheckKind::Exact,
    },
    1 => Question {
      prompt: format!(
        "{} hangi kategori? (neurocranium / viscerocranium)",
        bone.name
      ),
      answer: bone.category.as_str().to_string(),
      check: CheckKind::Exact,
    },
    _ => {
      // Content guarantees a non-empty landmark list
      let example = bone.landmarks.choose(rng).copied().unwrap_or_default();
      Question {
        prompt: format!("{} ile ilişkili landmark yaz (örn: {})", bone.name, example),
        answer: bone.landmarks.join(" / "),
        check: CheckKind::AnyOf(bone.landmarks.iter().map(|s| s.to_string()).collect()),
      }
    }
  }
}

/// Pick a nerve/foramen pair and a direction uniformly
pub fn make_nerve_question<R: Rng + ?Sized>(rng: &mut R) -> Question {
  let item = CN_FORAMINA
    .choose(rng)
    .expect("cranial nerve table is non-empty");

  if rng.random_bool(0.5) {
    Question {
      prompt: format!("{} ({}) hangi yapıdan geçer?", item.cn, item.name),
      answer: item.foramen.to_string(),
      check: CheckKind::Exact,
    }
  } else {
    Question {
      prompt: format!("{} içinden geçen sinir hangisi?", item.foramen),
      answer: item.full_name(),
      check: CheckKind::Contains,
    }
  }
}

/// Replay a previously missed question. The stored expected answer may be a
/// " / " join of alternatives (landmark questions), so any part is accepted.
pub fn make_review_question(entry: &WrongAnswer) -> Question {
  Question {
    prompt: entry.q.clone(),
    answer: entry.correct.clone(),
    check: CheckKind::AnyOfOrWhole(entry.correct.split(" / ").map(|s| s.to_string()).collect()),
  }
}
