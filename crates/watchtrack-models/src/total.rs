use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
}

/// A user's net watch time decomposed into days, hours and minutes.
///
/// The units are magnitudes; `is_negative` records the sign of the net total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WatchTotal {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub is_negative: bool,
}

impl WatchTotal {
    pub fn from_minutes(total: i64) -> Self {
        let abs = total.unsigned_abs();
        Self {
            days: abs / MINUTES_PER_DAY,
            hours: (abs % MINUTES_PER_DAY) / MINUTES_PER_HOUR,
            minutes: abs % MINUTES_PER_HOUR,
            is_negative: total < 0,
        }
    }

    /// Signed minute count this total represents
    pub fn total_minutes(&self) -> i64 {
        let abs = self.days * MINUTES_PER_DAY + self.hours * MINUTES_PER_HOUR + self.minutes;
        if self.is_negative {
            0i64.checked_sub_unsigned(abs).unwrap_or(i64::MIN)
        } else {
            i64::try_from(abs).unwrap_or(i64::MAX)
        }
    }

    /// The unit that carries the minus sign: the most significant non-zero one.
    ///
    /// Returns `None` for non-negative totals.
    pub fn signed_unit(&self) -> Option<TimeUnit> {
        if !self.is_negative {
            return None;
        }
        if self.days > 0 {
            Some(TimeUnit::Days)
        } else if self.hours > 0 {
            Some(TimeUnit::Hours)
        } else {
            Some(TimeUnit::Minutes)
        }
    }

    pub fn value(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
        }
    }

    /// Display text for one unit, with `-` attached if it carries the sign
    pub fn display_unit(&self, unit: TimeUnit) -> String {
        let value = self.value(unit);
        if self.signed_unit() == Some(unit) {
            format!("-{}", value)
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minutes_decomposes_units() {
        let total = WatchTotal::from_minutes(1440 + 3 * 60 + 7);
        assert_eq!(total, WatchTotal { days: 1, hours: 3, minutes: 7, is_negative: false });
    }

    #[test]
    fn test_negative_ninety_minutes_signs_hours() {
        let total = WatchTotal::from_minutes(-90);
        assert_eq!(total, WatchTotal { days: 0, hours: 1, minutes: 30, is_negative: true });
        assert_eq!(total.signed_unit(), Some(TimeUnit::Hours));
        assert_eq!(total.display_unit(TimeUnit::Hours), "-1");
        assert_eq!(total.display_unit(TimeUnit::Minutes), "30");
        assert_eq!(total.display_unit(TimeUnit::Days), "0");
    }

    #[test]
    fn test_sign_on_days_when_present() {
        let total = WatchTotal::from_minutes(-(2 * 1440 + 5));
        assert_eq!(total.signed_unit(), Some(TimeUnit::Days));
        assert_eq!(total.display_unit(TimeUnit::Days), "-2");
        assert_eq!(total.display_unit(TimeUnit::Minutes), "5");
    }

    #[test]
    fn test_sign_on_minutes_only() {
        let total = WatchTotal::from_minutes(-30);
        assert_eq!(total.signed_unit(), Some(TimeUnit::Minutes));
        assert_eq!(total.display_unit(TimeUnit::Minutes), "-30");
    }

    #[test]
    fn test_zero_is_never_negative() {
        let total = WatchTotal::from_minutes(0);
        assert_eq!(total, WatchTotal::default());
        assert_eq!(total.signed_unit(), None);
        assert_eq!(total.display_unit(TimeUnit::Minutes), "0");
    }

    #[test]
    fn test_total_minutes_restores_sign() {
        assert_eq!(WatchTotal::from_minutes(-1500).total_minutes(), -1500);
        assert_eq!(WatchTotal::from_minutes(61).total_minutes(), 61);
        assert_eq!(WatchTotal::from_minutes(i64::MIN).total_minutes(), i64::MIN);
        assert_eq!(WatchTotal::from_minutes(i64::MAX).total_minutes(), i64::MAX);
    }
}
