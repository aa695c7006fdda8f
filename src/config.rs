//! Application configuration constants.
//!
//! This module centralizes all configurable values so the rest of the
//! codebase never hardcodes them.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Data Directory ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    data: Option<DataConfig>,
}

#[derive(Debug, Deserialize)]
struct DataConfig {
    dir: Option<String>,
}

/// Load data directory with priority: config.toml > .env > default
pub fn load_data_dir() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(data) = config.data {
                if let Some(dir) = data.dir {
                    tracing::info!("Using data directory from config.toml: {}", dir);
                    return PathBuf::from(dir);
                }
            }
        }
    }

    // Priority 2: .env DATA_DIR
    if let Ok(dir) = std::env::var("DATA_DIR") {
        tracing::info!("Using data directory from DATA_DIR env: {}", dir);
        return PathBuf::from(dir);
    }

    // Default
    let default = PathBuf::from("data");
    tracing::info!("Using default data directory: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

/// Public base URL used when rendering the personal share link.
/// Override with PUBLIC_URL when deployed behind a proxy.
pub fn public_base_url() -> String {
    std::env::var("PUBLIC_URL").unwrap_or_else(|_| format!("http://localhost:{}", SERVER_PORT))
}

// ==================== Session Configuration ====================

/// Quiz run expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 1;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== User Identity ====================

/// Cookie carrying the anonymous user id
pub const USER_COOKIE: &str = "skull_uid";

/// Length of generated user ids
pub const USER_ID_LEN: usize = 8;

/// Unambiguous alphabet for generated user ids (no 0/O/1/l)
pub const USER_ID_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz23456789";

// ==================== Quiz Configuration ====================

/// Weight bonus added per wrong-answer entry mentioning a bone
pub const WRONG_ANSWER_BONUS: u32 = 3;

/// XP awarded per correct answer (display only)
pub const XP_PER_CORRECT: u32 = 10;

/// Practice quiz question count bounds
pub const PRACTICE_MIN_QUESTIONS: usize = 1;
pub const PRACTICE_MAX_QUESTIONS: usize = 50;
pub const PRACTICE_DEFAULT_QUESTIONS: usize = 10;

/// Exam question count bounds
pub const EXAM_MIN_QUESTIONS: usize = 5;
pub const EXAM_MAX_QUESTIONS: usize = 60;
pub const EXAM_DEFAULT_QUESTIONS: usize = 20;

/// Exam duration bounds in minutes
pub const EXAM_MIN_MINUTES: i64 = 1;
pub const EXAM_MAX_MINUTES: i64 = 60;
pub const EXAM_DEFAULT_MINUTES: i64 = 5;

/// Fixed question count for the cranial nerve drill
pub const NERVE_DRILL_QUESTIONS: usize = 15;

/// How many wrong answers the review page lists
pub const REVIEW_DISPLAY_LIMIT: usize = 20;
