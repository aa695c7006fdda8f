//! Cranial nerve / foramen pairs.

/// One cranial nerve and the skull opening it passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NerveForamen {
  /// Roman-numeral designation, e.g. "CN V2"
  pub cn: &'static str,
  pub name: &'static str,
  pub foramen: &'static str,
}

impl NerveForamen {
  /// Display form used as the expected answer in foramen→nerve questions
  pub fn full_name(&self) -> String {
    format!("{} ({})", self.cn, self.name)
  }
}
