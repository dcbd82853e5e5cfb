use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::session::Session;
use crate::user::User;

/// Whether an entry adds watch time or deducts it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Add,
    Subtract,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please enter a title")]
    EmptyTitle,
    #[error("Please enter a duration")]
    ZeroDuration,
}

/// User input collected before a session is created.
///
/// Durations are magnitudes; the sign is derived from `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub title: String,
    pub user: User,
    pub kind: String,
    pub date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
    pub action: Action,
}

impl SessionDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.hours == 0 && self.minutes == 0 {
            return Err(DraftError::ZeroDuration);
        }
        Ok(())
    }

    /// Signed (hours, minutes) pair for this draft
    pub fn signed_duration(&self) -> (i64, i64) {
        let hours = i64::from(self.hours);
        let minutes = i64::from(self.minutes);
        match self.action {
            Action::Subtract => (-hours, -minutes),
            Action::Add => (hours, minutes),
        }
    }

    /// Build the session record. Validation is expected to have run already.
    pub fn into_session(self, id: String, created_at: DateTime<Utc>) -> Session {
        let (duration_hours, duration_minutes) = self.signed_duration();
        Session {
            id,
            user: self.user,
            title: self.title,
            kind: self.kind,
            date: self.date,
            duration_hours,
            duration_minutes,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_draft(hours: u32, minutes: u32, action: Action) -> SessionDraft {
        SessionDraft {
            title: "Severance".to_string(),
            user: User::Ethan,
            kind: "show".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            hours,
            minutes,
            action,
        }
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let draft = create_draft(0, 0, Action::Add);
        assert_eq!(draft.validate(), Err(DraftError::ZeroDuration));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut draft = create_draft(1, 0, Action::Add);
        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn test_subtract_negates_both_fields() {
        let session = create_draft(1, 20, Action::Subtract)
            .into_session("1".to_string(), Utc::now());
        assert_eq!(session.duration_hours, -1);
        assert_eq!(session.duration_minutes, -20);
        assert!(session.is_deduction());
    }

    #[test]
    fn test_add_keeps_positive() {
        let session = create_draft(0, 50, Action::Add)
            .into_session("2".to_string(), Utc::now());
        assert_eq!(session.duration_hours, 0);
        assert_eq!(session.duration_minutes, 50);
        assert_eq!(session.user, User::Ethan);
        assert_eq!(session.kind, "show");
    }
}
