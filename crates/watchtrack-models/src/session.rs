use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::user::User;

/// A single watch-time entry.
///
/// Field names match the persisted JSON layout (`durationHours`, `createdAt`, ...).
/// Both duration fields carry the same sign: positive for added watch time,
/// negative for a deduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user: User,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    pub duration_hours: i64,
    pub duration_minutes: i64,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Signed minute-equivalent of this entry
    pub fn total_minutes(&self) -> i64 {
        self.duration_hours
            .saturating_mul(60)
            .saturating_add(self.duration_minutes)
    }

    pub fn is_deduction(&self) -> bool {
        self.duration_hours < 0 || self.duration_minutes < 0
    }

    /// Category with its first letter capitalized ("movie" -> "Movie")
    pub fn kind_label(&self) -> String {
        capitalize_first(&self.kind)
    }

    /// Magnitude-only duration text, e.g. `"1h 30m"`, `"45m"`, `"- 2h "`.
    ///
    /// Deductions get a `"- "` prefix. A zero duration renders as `"0m"`.
    pub fn format_duration(&self) -> String {
        format_duration(self.duration_hours, self.duration_minutes)
    }
}

pub fn format_duration(hours: i64, minutes: i64) -> String {
    let abs_hours = hours.unsigned_abs();
    let abs_minutes = minutes.unsigned_abs();

    if abs_hours == 0 && abs_minutes == 0 {
        return "0m".to_string();
    }

    let mut out = String::new();
    if hours < 0 || minutes < 0 {
        out.push_str("- ");
    }
    if abs_hours > 0 {
        out.push_str(&format!("{}h ", abs_hours));
    }
    if abs_minutes > 0 {
        out.push_str(&format!("{}m", abs_minutes));
    }
    out
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_session(hours: i64, minutes: i64) -> Session {
        Session {
            id: "1700000000000".to_string(),
            user: User::Lior,
            title: "Dune".to_string(),
            kind: "movie".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            duration_hours: hours,
            duration_minutes: minutes,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(create_session(1, 30).format_duration(), "1h 30m");
        assert_eq!(create_session(0, 45).format_duration(), "45m");
        assert_eq!(create_session(2, 0).format_duration(), "2h ");
    }

    #[test]
    fn test_format_duration_deduction() {
        assert_eq!(create_session(-1, -30).format_duration(), "- 1h 30m");
        assert_eq!(create_session(0, -30).format_duration(), "- 30m");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(create_session(0, 0).format_duration(), "0m");
    }

    #[test]
    fn test_total_minutes_and_deduction_flag() {
        assert_eq!(create_session(2, 15).total_minutes(), 135);
        assert_eq!(create_session(-2, -15).total_minutes(), -135);
        assert!(create_session(0, -1).is_deduction());
        assert!(!create_session(1, 0).is_deduction());
    }

    #[test]
    fn test_total_minutes_saturates() {
        assert_eq!(create_session(i64::MAX, 5).total_minutes(), i64::MAX);
        assert_eq!(create_session(i64::MIN, -5).total_minutes(), i64::MIN);
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(create_session(1, 0).kind_label(), "Movie");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("show"), "Show");
    }

    #[test]
    fn test_session_json_layout() {
        let json = serde_json::to_value(create_session(1, 5)).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["user"], "lior");
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["durationHours"], 1);
        assert_eq!(json["durationMinutes"], 5);
        assert!(json.get("createdAt").is_some());
    }
}
