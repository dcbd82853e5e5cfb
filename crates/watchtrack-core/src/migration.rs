//! Reading persisted sessions, including records written by older releases.
//!
//! Older releases stored the users as `"me"` and `"brother"`, and the very first
//! one did not store a user at all (or stored an empty one). Those records are rewritten to the canonical
//! users while they are deserialized. Nothing is written back here; the migrated
//! form reaches disk on the next save.
//!
//! A record that still cannot be read, such as one naming an unknown user, is
//! skipped on its own so the rest of the history survives.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use watchtrack_models::{Session, User};

/// Legacy user identifiers and their canonical replacements, checked in order
pub const LEGACY_USERS: &[(&str, User)] = &[("me", User::Lior), ("brother", User::Ethan)];

/// User assigned to records that carry no user field
pub const MISSING_USER: User = User::Lior;

/// Resolve a stored user identifier to a canonical user
pub fn migrate_user(stored: Option<&str>) -> Option<User> {
    let Some(raw) = stored.filter(|s| !s.trim().is_empty()) else {
        return Some(MISSING_USER);
    };
    if let Some((_, user)) = LEGACY_USERS.iter().find(|(legacy, _)| *legacy == raw) {
        return Some(*user);
    }
    raw.parse().ok()
}

/// On-disk shape of a session, as tolerant as the historical data requires
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    id: String,
    #[serde(default, deserialize_with = "deserialize_user")]
    user: Option<User>,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    date: NaiveDate,
    #[serde(deserialize_with = "deserialize_lenient_int")]
    duration_hours: i64,
    #[serde(deserialize_with = "deserialize_lenient_int")]
    duration_minutes: i64,
    created_at: DateTime<Utc>,
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session {
            id: stored.id,
            user: stored.user.unwrap_or(MISSING_USER),
            title: stored.title,
            kind: stored.kind,
            date: stored.date,
            duration_hours: stored.duration_hours,
            duration_minutes: stored.duration_minutes,
            created_at: stored.created_at,
        }
    }
}

fn deserialize_user<'de, D>(deserializer: D) -> Result<Option<User>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    migrate_user(raw.as_deref())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("unknown user '{}'", raw.unwrap_or_default())))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientInt {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accepts `90`, `90.0` and `"90"`, truncating fractions toward zero
fn deserialize_lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match LenientInt::deserialize(deserializer)? {
        LenientInt::Int(v) => Ok(v),
        LenientInt::Float(v) => float_duration(v)
            .ok_or_else(|| de::Error::custom(format!("invalid duration {}", v))),
        LenientInt::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(float_duration))
                .ok_or_else(|| de::Error::custom(format!("invalid duration '{}'", s)))
        }
    }
}

/// Truncated value of `v`, or `None` if it is not finite or does not fit an i64
fn float_duration(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = v.trunc();
    (truncated.is_finite() && truncated >= -LIMIT && truncated < LIMIT).then_some(truncated as i64)
}

/// A stored record that could not be read and was left out of the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub id: Option<String>,
    pub reason: String,
}

/// Result of reading a blob whose top level is a valid array
#[derive(Debug, Default)]
pub struct ParsedSessions {
    pub sessions: Vec<Session>,
    pub rejected: Vec<RejectedRecord>,
}

/// Parse a persisted blob into canonical sessions.
///
/// Only a blob that is not a JSON array is an error. Records that cannot be
/// read are skipped and reported in `rejected`; the rest keep their order.
pub fn parse_sessions(blob: &str) -> serde_json::Result<ParsedSessions> {
    let records: Vec<serde_json::Value> = serde_json::from_str(blob)?;
    let mut parsed = ParsedSessions::default();

    for record in records {
        let id = match record.get("id") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        match StoredSession::deserialize(record) {
            Ok(stored) => parsed.sessions.push(Session::from(stored)),
            Err(e) => parsed.rejected.push(RejectedRecord {
                id,
                reason: e.to_string(),
            }),
        }
    }

    Ok(parsed)
}
