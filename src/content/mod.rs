//! Static question content: skull bones and cranial nerve foramina.

mod bones;
mod nerves;

pub use bones::BONES;
pub use nerves::CN_FORAMINA;

use crate::domain::{Bone, BoneCategory};

/// Bones matching a category filter; `None` means all
pub fn bones_in(category: Option<BoneCategory>) -> Vec<&'static Bone> {
  BONES
    .iter()
    .filter(|b| category.is_none_or(|c| b.category == c))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_bone_table_size() {
    assert_eq!(BONES.len(), 10);
  }

  #[test]
  fn test_bone_names_unique() {
    let names: HashSet<_> = BONES.iter().map(|b| b.name).collect();
    assert_eq!(names.len(), BONES.len());
  }

  #[test]
  fn test_every_bone_has_landmarks() {
    for bone in BONES {
      assert!(!bone.landmarks.is_empty(), "{} has no landmarks", bone.name);
    }
  }

  #[test]
  fn test_category_filter() {
    let neuro = bones_in(Some(BoneCategory::Neurocranium));
    let viscero = bones_in(Some(BoneCategory::Viscerocranium));
    assert_eq!(neuro.len(), 6);
    assert_eq!(viscero.len(), 4);
    assert_eq!(bones_in(None).len(), BONES.len());
  }

  #[test]
  fn test_foramina_table_size() {
    assert_eq!(CN_FORAMINA.len(), 15);
  }

  #[test]
  fn test_foramina_designations_unique() {
    let cns: HashSet<_> = CN_FORAMINA.iter().map(|n| n.cn).collect();
    assert_eq!(cns.len(), CN_FORAMINA.len());
  }
}
