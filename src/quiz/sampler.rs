//! Adaptive weighted bone selection.
//!
//! Bones named in prior wrong-answer question strings get a weight bonus so
//! the sampler revisits what the user keeps missing.

use rand::Rng;

use crate::config;
use crate::domain::{Bone, WrongAnswer};

/// A pool entry with its calculated selection weight
#[derive(Debug, Clone)]
pub struct BoneWeight {
  pub index: usize,
  pub weight: u32,
}

/// Calculate weights for a bone pool: `1 + bonus * N` where N is the number
/// of wrong-answer entries whose question text mentions the bone's name
/// (case-insensitive)
pub fn wrong_weights(pool: &[&'static Bone], wrongs: &[WrongAnswer]) -> Vec<BoneWeight> {
  let mut weights: Vec<BoneWeight> = pool
    .iter()
    .enumerate()
    .map(|(index, _)| BoneWeight { index, weight: 1 })
    .collect();

  for item in wrongs {
    let q = item.q.to_lowercase();
    for (i, bone) in pool.iter().enumerate() {
      if q.contains(&bone.name.to_lowercase()) {
        weights[i].weight += config::WRONG_ANSWER_BONUS;
      }
    }
  }

  weights
}

/// Select a pool index using weighted random selection.
/// Higher weight = more likely to be selected.
pub fn weighted_random_select<R: Rng + ?Sized>(
  weights: &[BoneWeight],
  rng: &mut R,
) -> Option<usize> {
  if weights.is_empty() {
    return None;
  }
  if weights.len() == 1 {
    return Some(weights[0].index);
  }

  let total_weight: u32 = weights.iter().map(|w| w.weight).sum();
  if total_weight == 0 {
    return Some(weights[rng.random_range(0..weights.len())].index);
  }

  let mut target = rng.random_range(0..total_weight);
  for w in weights {
    if target < w.weight {
      return Some(w.index);
    }
    target -= w.weight;
  }

  weights.last().map(|w| w.index)
}

/// Pick a bone from the pool, biased toward previously missed ones
pub fn pick_weighted<R: Rng + ?Sized>(
  pool: &[&'static Bone],
  wrongs: &[WrongAnswer],
  rng: &mut R,
) -> Option<&'static Bone> {
  let weights = wrong_weights(pool, wrongs);
  weighted_random_select(&weights, rng).map(|i| pool[i])
}
