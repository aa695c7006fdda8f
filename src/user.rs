//! Anonymous user identity.
//!
//! Every visitor gets a short random id so their record stays theirs without
//! accounts. Resolution order: `?u=` query parameter (personal links), then
//! the cookie, then a freshly generated id. Middleware pins the resolved id
//! back into a cookie so later requests land on the same record.

use axum::{
  extract::Request,
  http::{request::Parts, StatusCode},
  middleware::Next,
  response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use rand::Rng;

use crate::config;

/// Resolved user id, injected into request extensions by [`assign_user`]
#[derive(Debug, Clone)]
pub struct UserId(pub String);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for UserId {
  type Rejection = StatusCode;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    parts
      .extensions
      .get::<UserId>()
      .cloned()
      .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
  }
}

/// Generate a short id from the unambiguous alphabet
pub fn generate_user_id() -> String {
  let mut rng = rand::rng();
  (0..config::USER_ID_LEN)
    .map(|_| {
      let idx = rng.random_range(0..config::USER_ID_ALPHABET.len());
      config::USER_ID_ALPHABET[idx] as char
    })
    .collect()
}

/// Accept an externally supplied id only if it is filesystem-safe:
/// 1-32 chars, ASCII alphanumeric plus '-' and '_'. Ids become file names.
fn sanitize_uid(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  let ok = !trimmed.is_empty()
    && trimmed.len() <= 32
    && trimmed
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
  ok.then(|| trimmed.to_string())
}

/// Extract `u=` from a raw query string
fn uid_from_query(query: &str) -> Option<String> {
  query.split('&').find_map(|pair| {
    let value = pair.strip_prefix("u=")?;
    let decoded = urlencoding::decode(value).ok()?;
    sanitize_uid(&decoded)
  })
}

/// Middleware: resolve the user id and make sure the cookie carries it
pub async fn assign_user(jar: CookieJar, mut req: Request, next: Next) -> (CookieJar, Response) {
  let from_query = req.uri().query().and_then(uid_from_query);
  let from_cookie = jar
    .get(config::USER_COOKIE)
    .and_then(|c| sanitize_uid(c.value()));

  let uid = from_query
    .clone()
    .or_else(|| from_cookie.clone())
    .unwrap_or_else(generate_user_id);

  req.extensions_mut().insert(UserId(uid.clone()));
  let response = next.run(req).await;

  // Refresh the cookie unless it already holds the resolved id
  let jar = if from_cookie.as_deref() == Some(uid.as_str()) {
    jar
  } else {
    jar.add(
      Cookie::build((config::USER_COOKIE, uid))
        .path("/")
        .max_age(time::Duration::days(365))
        .build(),
    )
  };

  (jar, response)
}

/// Absolute personal link carrying the user id
pub fn personal_link(uid: &str) -> String {
  format!("{}/?u={}", config::public_base_url(), urlencoding::encode(uid))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_generated_id_shape() {
    let id = generate_user_id();
    assert_eq!(id.len(), config::USER_ID_LEN);
    assert!(id.bytes().all(|b| config::USER_ID_ALPHABET.contains(&b)));
  }

  #[test]
  fn test_generated_ids_differ() {
    assert_ne!(generate_user_id(), generate_user_id());
  }

  #[test]
  fn test_sanitize_accepts_plain_ids() {
    assert_eq!(sanitize_uid(" abc123 "), Some("abc123".to_string()));
    assert_eq!(sanitize_uid("a-b_c"), Some("a-b_c".to_string()));
  }

  #[test]
  fn test_sanitize_rejects_path_tricks() {
    assert_eq!(sanitize_uid("../etc/passwd"), None);
    assert_eq!(sanitize_uid(""), None);
    assert_eq!(sanitize_uid("   "), None);
    assert_eq!(sanitize_uid(&"x".repeat(33)), None);
  }

  #[test]
  fn test_uid_from_query() {
    assert_eq!(uid_from_query("u=abcd1234"), Some("abcd1234".to_string()));
    assert_eq!(uid_from_query("x=1&u=abcd"), Some("abcd".to_string()));
    assert_eq!(uid_from_query("user=abcd"), None);
    assert_eq!(uid_from_query("u=.."), None);
  }

  #[test]
  fn test_personal_link_contains_uid() {
    let link = personal_link("abcd1234");
    assert!(link.ends_with("/?u=abcd1234"));
  }
}
