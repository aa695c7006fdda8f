//! Skull bone records.

use serde::{Deserialize, Serialize};

/// Which part of the skull a bone belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoneCategory {
  Neurocranium,
  Viscerocranium,
}

impl BoneCategory {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Neurocranium => "neurocranium",
      Self::Viscerocranium => "viscerocranium",
    }
  }

  /// Parse a category filter value; `None` for anything unrecognized
  /// (the UI sends "hepsi" for "all")
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "neurocranium" => Some(Self::Neurocranium),
      "viscerocranium" => Some(Self::Viscerocranium),
      _ => None,
    }
  }
}

impl std::fmt::Display for BoneCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Static entry describing one skull bone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
  pub name: &'static str,
  pub latin: &'static str,
  pub category: BoneCategory,
  pub landmarks: &'static [&'static str],
}
