//! Domain primitives shared by the storage, service and HTTP layers.
//!
//! Identifiers are newtypes so that a user id can never be passed where an
//! assessment id is expected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a user row.
///
/// # Examples
///
/// ```rust
/// use scl90::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        debug_assert!(id >= 0, "UserId should be non-negative");
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Unique identifier of a stored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(i32);

impl AssessmentId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        debug_assert!(id >= 0, "AssessmentId should be non-negative");
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AssessmentId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl From<AssessmentId> for i32 {
    fn from(id: AssessmentId) -> Self {
        id.0
    }
}

/// Access level of a user. Only admins may ingest analytics summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Granularity of a pre-aggregated analytics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Checks that `date` is a bucket label of this granularity:
    /// `2026-02-11` for daily, `2026-W06` for weekly, `2026-02` for monthly.
    pub fn validate_date(&self, date: &str) -> Result<(), String> {
        let valid = match self {
            Self::Daily => {
                date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
            }
            Self::Weekly => date
                .split_once("-W")
                .filter(|(year, week)| year.len() == 4 && week.len() == 2)
                .and_then(|(year, week)| Some((year.parse::<i32>().ok()?, week.parse::<u32>().ok()?)))
                .is_some_and(|(year, week)| {
                    NaiveDate::from_isoywd_opt(year, week, chrono::Weekday::Mon).is_some()
                }),
            Self::Monthly => {
                date.len() == 7
                    && NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d").is_ok()
            }
        };

        if valid {
            Ok(())
        } else {
            Err(format!("Invalid {self} period date: '{date}'"))
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!("Invalid period: '{s}'. Expected one of daily, weekly, monthly")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_conversions() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(UserId::from(42), id);
    }

    #[test]
    fn assessment_id_serializes_as_number() {
        let id = AssessmentId::new(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
        let back: AssessmentId = serde_json::from_str("9").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert!("root".parse::<Role>().is_err());
        assert!(Role::Admin.is_admin());
        assert!(!Role::default().is_admin());
    }

    #[test]
    fn period_parsing() {
        assert_eq!("daily".parse::<Period>().unwrap(), Period::Daily);
        assert_eq!("weekly".parse::<Period>().unwrap(), Period::Weekly);
        assert_eq!("monthly".parse::<Period>().unwrap(), Period::Monthly);
        assert!("invalid".parse::<Period>().is_err());
        assert!("Daily".parse::<Period>().is_err());
    }

    #[test]
    fn period_date_labels() {
        assert!(Period::Daily.validate_date("2026-02-11").is_ok());
        assert!(Period::Daily.validate_date("2026-02-30").is_err());
        assert!(Period::Daily.validate_date("2026-2-1").is_err());
        assert!(Period::Weekly.validate_date("2026-W06").is_ok());
        assert!(Period::Weekly.validate_date("2026-W54").is_err());
        assert!(Period::Weekly.validate_date("2026-06").is_err());
        assert!(Period::Monthly.validate_date("2026-02").is_ok());
        assert!(Period::Monthly.validate_date("2026-13").is_err());
        assert!(Period::Monthly.validate_date("2026-02-11").is_err());
    }
}
