use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The people whose watch time is tracked.
///
/// The serialized form is the lowercase identifier (`"lior"`, `"ethan"`),
/// which is also what the persisted blob stores in each record's `user` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum User {
    #[default]
    Lior,
    Ethan,
}

impl User {
    /// All canonical users, in summary display order
    pub const ALL: [User; 2] = [User::Lior, User::Ethan];

    pub fn id(&self) -> &'static str {
        match self {
            User::Lior => "lior",
            User::Ethan => "ethan",
        }
    }

    /// Uppercase label shown next to history rows
    pub fn badge(&self) -> &'static str {
        match self {
            User::Lior => "LIOR",
            User::Ethan => "ETHAN",
        }
    }

    /// Capitalized name for summary headings
    pub fn display_name(&self) -> &'static str {
        match self {
            User::Lior => "Lior",
            User::Ethan => "Ethan",
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown user '{0}'. Use 'lior' or 'ethan'")]
pub struct UnknownUser(pub String);

impl FromStr for User {
    type Err = UnknownUser;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lior" => Ok(User::Lior),
            "ethan" => Ok(User::Ethan),
            other => Err(UnknownUser(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&User::Lior).unwrap(), "\"lior\"");
        assert_eq!(serde_json::to_string(&User::Ethan).unwrap(), "\"ethan\"");
    }

    #[test]
    fn test_user_from_str() {
        assert_eq!("lior".parse::<User>().unwrap(), User::Lior);
        assert_eq!(" Ethan ".parse::<User>().unwrap(), User::Ethan);
        assert!("brother".parse::<User>().is_err());
    }
}
