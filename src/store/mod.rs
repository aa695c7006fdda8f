//! Per-user JSON record persistence.
//!
//! Each user owns one small JSON file under the users directory, read and
//! rewritten whole on every change. A missing or unparsable file yields a
//! fresh default record; writes propagate errors for the handlers to log.

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::domain::{ExportPayload, UserRecord, WrongAnswer};

/// Error from record persistence or import validation
#[derive(Debug)]
pub enum StoreError {
  Io(std::io::Error),
  Json(serde_json::Error),
  /// Import payload failed validation; the message is shown to the user
  Invalid(&'static str),
}

impl std::fmt::Display for StoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "storage I/O failed: {}", e),
      Self::Json(e) => write!(f, "record serialization failed: {}", e),
      Self::Invalid(msg) => f.write_str(msg),
    }
  }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

impl From<serde_json::Error> for StoreError {
  fn from(e: serde_json::Error) -> Self {
    Self::Json(e)
  }
}

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }
}

fn record_path(users_dir: &Path, uid: &str) -> PathBuf {
  users_dir.join(format!("{}.json", uid))
}

/// Load a user's record. Missing file is a fresh user; an unreadable one is
/// logged and replaced with defaults rather than surfaced as an error page.
pub fn load_record(users_dir: &Path, uid: &str) -> UserRecord {
  let path = record_path(users_dir, uid);
  if !path.exists() {
    return UserRecord::default();
  }
  match std::fs::read_to_string(&path) {
    Ok(contents) => serde_json::from_str(&contents)
      .log_warn(&format!("Unparsable record at {}", path.display()))
      .unwrap_or_default(),
    Err(e) => {
      tracing::warn!("Could not read record at {}: {}", path.display(), e);
      UserRecord::default()
    }
  }
}

/// Overwrite a user's record whole
pub fn save_record(users_dir: &Path, uid: &str, record: &UserRecord) -> Result<(), StoreError> {
  std::fs::create_dir_all(users_dir)?;
  let contents = serde_json::to_string_pretty(record)?;
  std::fs::write(record_path(users_dir, uid), contents)?;
  Ok(())
}

/// Add completed-run deltas to the lifetime counters
pub fn add_stats(
  users_dir: &Path,
  uid: &str,
  correct_delta: u32,
  total_delta: u32,
) -> Result<(), StoreError> {
  let mut rec = load_record(users_dir, uid);
  rec.stats.correct += correct_delta;
  rec.stats.total += total_delta;
  save_record(users_dir, uid, &rec)
}

/// Append a missed question to the wrong-answer log
pub fn log_wrong(
  users_dir: &Path,
  uid: &str,
  q: &str,
  user_answer: &str,
  correct: &str,
) -> Result<(), StoreError> {
  let mut rec = load_record(users_dir, uid);
  rec.wrongs.push(WrongAnswer {
    q: q.to_string(),
    user: user_answer.to_string(),
    correct: correct.to_string(),
    ts: Utc::now().timestamp(),
  });
  save_record(users_dir, uid, &rec)
}

pub fn get_wrongs(users_dir: &Path, uid: &str) -> Vec<WrongAnswer> {
  load_record(users_dir, uid).wrongs
}

pub fn clear_wrongs(users_dir: &Path, uid: &str) -> Result<(), StoreError> {
  let mut rec = load_record(users_dir, uid);
  rec.wrongs.clear();
  save_record(users_dir, uid, &rec)
}

/// Remove one wrong-answer entry (after a correct review replay).
/// Matched by timestamp and question text.
pub fn remove_wrong(users_dir: &Path, uid: &str, ts: i64, q: &str) -> Result<(), StoreError> {
  let mut rec = load_record(users_dir, uid);
  rec.wrongs.retain(|w| !(w.ts == ts && w.q == q));
  save_record(users_dir, uid, &rec)
}

pub fn reset_stats(users_dir: &Path, uid: &str) -> Result<(), StoreError> {
  let mut rec = load_record(users_dir, uid);
  rec.stats = Default::default();
  save_record(users_dir, uid, &rec)
}

/// Bump the daily streak: same day is a no-op, yesterday extends the streak,
/// anything older restarts it at 1
pub fn bump_streak(users_dir: &Path, uid: &str, today: NaiveDate) -> Result<u32, StoreError> {
  let mut rec = load_record(users_dir, uid);
  match rec.last_day {
    Some(last) if last == today => {}
    Some(last) if last.succ_opt() == Some(today) => {
      rec.streak += 1;
      rec.last_day = Some(today);
    }
    _ => {
      rec.streak = 1;
      rec.last_day = Some(today);
    }
  }
  save_record(users_dir, uid, &rec)?;
  Ok(rec.streak)
}

/// Serialize the user's record into a downloadable payload
pub fn export_progress(users_dir: &Path, uid: &str) -> Result<String, StoreError> {
  let payload = ExportPayload {
    uid: uid.to_string(),
    exported_at: Utc::now().timestamp(),
    data: load_record(users_dir, uid),
  };
  Ok(serde_json::to_string_pretty(&payload)?)
}

/// Validate a pasted export payload and overwrite the user's record with it
pub fn import_progress(users_dir: &Path, uid: &str, json_text: &str) -> Result<(), StoreError> {
  let payload: Value = serde_json::from_str(json_text)
    .map_err(|_| StoreError::Invalid("JSON okunamadı. (format hatalı)"))?;

  let data = payload
    .get("data")
    .ok_or(StoreError::Invalid("JSON formatı tanınmadı. (data yok)"))?;
  if !data.is_object() {
    return Err(StoreError::Invalid("JSON formatı tanınmadı. (data yok)"));
  }
  if data.get("stats").is_none_or(|v| !v.is_object())
    || data.get("wrongs").is_none_or(|v| !v.is_array())
  {
    return Err(StoreError::Invalid(
      "JSON formatı tanınmadı. (stats/wrongs eksik)",
    ));
  }

  let record: UserRecord = serde_json::from_value(data.clone())
    .map_err(|_| StoreError::Invalid("JSON formatı bozuk."))?;
  save_record(users_dir, uid, &record)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Stats;
  use tempfile::TempDir;

  fn users_dir() -> TempDir {
    TempDir::new().expect("temp dir")
  }

  #[test]
  fn test_missing_record_is_default() {
    let dir = users_dir();
    let rec = load_record(dir.path(), "nobody");
    assert_eq!(rec, UserRecord::default());
  }

  #[test]
  fn test_corrupt_record_is_default() {
    let dir = users_dir();
    std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
    let rec = load_record(dir.path(), "broken");
    assert_eq!(rec, UserRecord::default());
  }

  #[test]
  fn test_save_then_load_round_trip() {
    let dir = users_dir();
    let rec = UserRecord {
      stats: Stats { correct: 7, total: 9 },
      wrongs: vec![WrongAnswer {
        q: "Frontal kemiğinin Latin adı nedir?".into(),
        user: "os parietale".into(),
        correct: "Os frontale".into(),
        ts: 1_700_000_000,
      }],
      streak: 3,
      last_day: NaiveDate::from_ymd_opt(2026, 8, 28),
    };
    save_record(dir.path(), "abc", &rec).unwrap();
    assert_eq!(load_record(dir.path(), "abc"), rec);
  }

  #[test]
  fn test_add_stats_accumulates() {
    let dir = users_dir();
    add_stats(dir.path(), "u", 3, 5).unwrap();
    add_stats(dir.path(), "u", 2, 5).unwrap();
    let rec = load_record(dir.path(), "u");
    assert_eq!(rec.stats, Stats { correct: 5, total: 10 });
  }

  #[test]
  fn test_log_and_clear_wrongs() {
    let dir = users_dir();
    log_wrong(dir.path(), "u", "soru", "yanlış", "doğru").unwrap();
    let wrongs = get_wrongs(dir.path(), "u");
    assert_eq!(wrongs.len(), 1);
    assert_eq!(wrongs[0].q, "soru");
    assert!(wrongs[0].ts > 0);

    clear_wrongs(dir.path(), "u").unwrap();
    assert!(get_wrongs(dir.path(), "u").is_empty());
  }

  #[test]
  fn test_remove_wrong_matches_ts_and_question() {
    let dir = users_dir();
    let rec = UserRecord {
      wrongs: vec![
        WrongAnswer { q: "a".into(), user: "x".into(), correct: "y".into(), ts: 1 },
        WrongAnswer { q: "b".into(), user: "x".into(), correct: "y".into(), ts: 2 },
      ],
      ..Default::default()
    };
    save_record(dir.path(), "u", &rec).unwrap();
    remove_wrong(dir.path(), "u", 1, "a").unwrap();
    let wrongs = get_wrongs(dir.path(), "u");
    assert_eq!(wrongs.len(), 1);
    assert_eq!(wrongs[0].q, "b");
  }

  #[test]
  fn test_reset_stats_keeps_wrongs() {
    let dir = users_dir();
    add_stats(dir.path(), "u", 1, 2).unwrap();
    log_wrong(dir.path(), "u", "soru", "a", "b").unwrap();
    reset_stats(dir.path(), "u").unwrap();
    let rec = load_record(dir.path(), "u");
    assert_eq!(rec.stats, Stats::default());
    assert_eq!(rec.wrongs.len(), 1);
  }

  #[test]
  fn test_streak_first_session() {
    let dir = users_dir();
    let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    assert_eq!(bump_streak(dir.path(), "u", today).unwrap(), 1);
  }

  #[test]
  fn test_streak_same_day_unchanged() {
    let dir = users_dir();
    let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    bump_streak(dir.path(), "u", today).unwrap();
    assert_eq!(bump_streak(dir.path(), "u", today).unwrap(), 1);
  }

  #[test]
  fn test_streak_consecutive_days_extend() {
    let dir = users_dir();
    let d1 = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    bump_streak(dir.path(), "u", d1).unwrap();
    assert_eq!(bump_streak(dir.path(), "u", d2).unwrap(), 2);
  }

  #[test]
  fn test_streak_gap_resets() {
    let dir = users_dir();
    let d1 = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    bump_streak(dir.path(), "u", d1).unwrap();
    assert_eq!(bump_streak(dir.path(), "u", d2).unwrap(), 1);
  }

  #[test]
  fn test_export_import_round_trip() {
    let dir = users_dir();
    let rec = UserRecord {
      stats: Stats { correct: 4, total: 6 },
      wrongs: vec![WrongAnswer {
        q: "Parietal hangi kategori? (neurocranium / viscerocranium)".into(),
        user: "viscerocranium".into(),
        correct: "neurocranium".into(),
        ts: 1_725_000_000,
      }],
      streak: 2,
      last_day: NaiveDate::from_ymd_opt(2026, 8, 29),
    };
    save_record(dir.path(), "u", &rec).unwrap();

    let exported = export_progress(dir.path(), "u").unwrap();

    // Wipe, then import into a different user id
    import_progress(dir.path(), "other", &exported).unwrap();
    assert_eq!(load_record(dir.path(), "other"), rec);
  }

  #[test]
  fn test_import_rejects_garbage() {
    let dir = users_dir();
    let err = import_progress(dir.path(), "u", "{not json").unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
  }

  #[test]
  fn test_import_rejects_missing_data() {
    let dir = users_dir();
    let err = import_progress(dir.path(), "u", r#"{"uid":"x"}"#).unwrap_err();
    assert!(err.to_string().contains("data yok"));
  }

  #[test]
  fn test_import_rejects_missing_stats_or_wrongs() {
    let dir = users_dir();
    let err =
      import_progress(dir.path(), "u", r#"{"data":{"stats":{"correct":0,"total":0}}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("stats/wrongs eksik"));
  }

  #[test]
  fn test_import_does_not_touch_record_on_failure() {
    let dir = users_dir();
    add_stats(dir.path(), "u", 1, 1).unwrap();
    let _ = import_progress(dir.path(), "u", r#"{"data":{"stats":5,"wrongs":[]}}"#);
    assert_eq!(load_record(dir.path(), "u").stats, Stats { correct: 1, total: 1 });
  }
}
