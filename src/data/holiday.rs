use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A hand-authored table entry. `date` is in "Mon D" form, e.g. "Jul 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolidayDefinition {
    pub id: u32,
    pub name: &'static str,
    pub date: &'static str,
}

impl HolidayDefinition {
    pub const fn new(id: u32, name: &'static str, date: &'static str) -> Self {
        HolidayDefinition { id, name, date }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HolidayStatus {
    Passed { days_passed: u32 },
    /// `days_until == 0` means the holiday is today.
    Upcoming { days_until: u32 },
}

/// A holiday resolved against a year and annotated relative to "today".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holiday {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub calendar_date: NaiveDate,
    pub status: HolidayStatus,
}

impl Holiday {
    pub fn passed(&self) -> bool {
        matches!(self.status, HolidayStatus::Passed { .. })
    }

    pub fn days_passed(&self) -> Option<u32> {
        match self.status {
            HolidayStatus::Passed { days_passed } => Some(days_passed),
            HolidayStatus::Upcoming { .. } => None,
        }
    }

    pub fn days_until(&self) -> Option<u32> {
        match self.status {
            HolidayStatus::Upcoming { days_until } => Some(days_until),
            HolidayStatus::Passed { .. } => None,
        }
    }

    pub fn is_today(&self) -> bool {
        self.days_until() == Some(0)
    }

    /// Human-readable status, as shown in listings and the board detail panel.
    pub fn status_label(&self) -> String {
        match self.status {
            HolidayStatus::Passed { days_passed: 1 } => "Passed (1 day ago)".to_string(),
            HolidayStatus::Passed { days_passed } => format!("Passed ({days_passed} days ago)"),
            HolidayStatus::Upcoming { days_until: 0 } => "Today".to_string(),
            HolidayStatus::Upcoming { days_until: 1 } => "Coming Up (in 1 day)".to_string(),
            HolidayStatus::Upcoming { days_until } => format!("Coming Up (in {days_until} days)"),
        }
    }
}

/// Serializes to the flat shape consumers expect:
/// `{"id", "name", "date", "passed", "daysPassed" | "daysUntil"}`.
impl Serialize for Holiday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Holiday", 5)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("passed", &self.passed())?;
        if let Some(days) = self.days_passed() {
            s.serialize_field("daysPassed", &days)?;
        }
        if let Some(days) = self.days_until() {
            s.serialize_field("daysUntil", &days)?;
        }
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(status: HolidayStatus) -> Holiday {
        Holiday {
            id: 13,
            name: "Canada Day".to_string(),
            date: "Jul 1".to_string(),
            calendar_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            status,
        }
    }

    #[test]
    fn test_passed_holiday_exposes_only_days_passed() {
        let h = make(HolidayStatus::Passed { days_passed: 4 });
        assert!(h.passed());
        assert_eq!(h.days_passed(), Some(4));
        assert_eq!(h.days_until(), None);
        assert!(!h.is_today());
    }

    #[test]
    fn test_upcoming_holiday_exposes_only_days_until() {
        let h = make(HolidayStatus::Upcoming { days_until: 30 });
        assert!(!h.passed());
        assert_eq!(h.days_until(), Some(30));
        assert_eq!(h.days_passed(), None);
    }

    #[test]
    fn test_zero_days_until_is_today() {
        let h = make(HolidayStatus::Upcoming { days_until: 0 });
        assert!(h.is_today());
        assert_eq!(h.status_label(), "Today");
    }

    #[test]
    fn test_status_label_singular_and_plural() {
        assert_eq!(
            make(HolidayStatus::Passed { days_passed: 1 }).status_label(),
            "Passed (1 day ago)"
        );
        assert_eq!(
            make(HolidayStatus::Passed { days_passed: 151 }).status_label(),
            "Passed (151 days ago)"
        );
        assert_eq!(
            make(HolidayStatus::Upcoming { days_until: 1 }).status_label(),
            "Coming Up (in 1 day)"
        );
        assert_eq!(
            make(HolidayStatus::Upcoming { days_until: 30 }).status_label(),
            "Coming Up (in 30 days)"
        );
    }

    #[test]
    fn test_serialize_upcoming_shape() {
        let h = make(HolidayStatus::Upcoming { days_until: 30 });
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["id"], 13);
        assert_eq!(v["name"], "Canada Day");
        assert_eq!(v["date"], "Jul 1");
        assert_eq!(v["passed"], false);
        assert_eq!(v["daysUntil"], 30);
        assert!(v.get("daysPassed").is_none());
        assert!(v.get("calendar_date").is_none());
    }

    #[test]
    fn test_serialize_passed_shape() {
        let h = make(HolidayStatus::Passed { days_passed: 151 });
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["passed"], true);
        assert_eq!(v["daysPassed"], 151);
        assert!(v.get("daysUntil").is_none());
    }
}
