//! Answer normalization and checking.

use unicode_normalization::UnicodeNormalization;

use super::question::{CheckKind, Question};

/// Canonical form used for all comparisons: trimmed, NFC, lowercase
pub fn normalize(s: &str) -> String {
  s.trim().nfc().collect::<String>().to_lowercase()
}

/// Check a submitted answer against a question.
/// Empty or whitespace-only input is always rejected.
pub fn check_answer(question: &Question, input: &str) -> bool {
  let u = normalize(input);
  if u.is_empty() {
    return false;
  }

  match &question.check {
    CheckKind::Exact => u == normalize(&question.answer),
    CheckKind::AnyOf(alternatives) => alternatives.iter().any(|a| normalize(a) == u),
    CheckKind::Contains => {
      let expected = normalize(&question.answer);
      expected.contains(&u) || expected.replace(' ', "").contains(&u.replace(' ', ""))
    }
    CheckKind::AnyOfOrWhole(alternatives) => {
      alternatives.iter().any(|a| normalize(a) == u) || u == normalize(&question.answer)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::BONES;

  fn exact(answer: &str) -> Question {
    Question {
      prompt: String::new(),
      answer: answer.to_string(),
      check: CheckKind::Exact,
    }
  }

  #[test]
  fn test_exact_ignores_case_and_whitespace() {
    let q = exact("Os frontale");
    assert!(check_answer(&q, "os frontale"));
    assert!(check_answer(&q, "  OS FRONTALE  "));
    assert!(!check_answer(&q, "os parietale"));
  }

  #[test]
  fn test_empty_input_rejected() {
    let q = exact("neurocranium");
    assert!(!check_answer(&q, ""));
    assert!(!check_answer(&q, "   "));
    assert!(!check_answer(&q, "\t\n"));
  }

  #[test]
  fn test_category_check_all_bones() {
    for bone in BONES {
      let q = exact(bone.category.as_str());
      assert!(check_answer(&q, bone.category.as_str()));
      assert!(check_answer(&q, &format!("  {}  ", bone.category.as_str().to_uppercase())));
    }
  }

  #[test]
  fn test_landmark_membership_all_bones() {
    for bone in BONES {
      let q = Question {
        prompt: String::new(),
        answer: bone.landmarks.join(" / "),
        check: CheckKind::AnyOf(bone.landmarks.iter().map(|s| s.to_string()).collect()),
      };
      for lm in bone.landmarks {
        assert!(check_answer(&q, &lm.to_lowercase()), "{} not accepted", lm);
        assert!(check_answer(&q, &format!(" {} ", lm)));
      }
      assert!(!check_answer(&q, "not a landmark"));
    }
  }

  #[test]
  fn test_landmark_rejects_joined_display_answer() {
    // The " / " join is display only; it is not itself a landmark
    let q = Question {
      prompt: String::new(),
      answer: "Supraorbital foramen / Glabella / Frontal sinus".into(),
      check: CheckKind::AnyOf(vec![
        "Supraorbital foramen".into(),
        "Glabella".into(),
        "Frontal sinus".into(),
      ]),
    };
    assert!(!check_answer(&q, "supraorbital foramen / glabella / frontal sinus"));
    assert!(check_answer(&q, "glabella"));
  }

  #[test]
  fn test_replay_accepts_full_joined_answer() {
    let q = Question {
      prompt: String::new(),
      answer: "Cribriform plate / Crista galli".into(),
      check: CheckKind::AnyOfOrWhole(vec!["Cribriform plate".into(), "Crista galli".into()]),
    };
    assert!(check_answer(&q, "cribriform plate / crista galli"));
    assert!(check_answer(&q, "crista galli"));
    assert!(!check_answer(&q, "sella turcica"));
  }

  #[test]
  fn test_contains_accepts_partial_nerve_answer() {
    let q = Question {
      prompt: String::new(),
      answer: "CN X (Vagus)".into(),
      check: CheckKind::Contains,
    };
    assert!(check_answer(&q, "cn x"));
    assert!(check_answer(&q, "vagus"));
    assert!(check_answer(&q, "CNX")); // space-insensitive
    assert!(!check_answer(&q, "cn ix"));
  }

  #[test]
  fn test_normalize_applies_nfc() {
    // Combining acute ("é" as e + U+0301) must match the precomposed form
    let q = exact("caf\u{e9}");
    assert!(check_answer(&q, "cafe\u{301}"));
  }
}
