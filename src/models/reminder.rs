use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub garden_id: Option<String>,
    pub plant_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub snoozed_until: Option<NaiveDate>,
}

impl Reminder {
    /// Incomplete, due on or before `today`, and not snoozed past it.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        !self.completed
            && self.due_date <= today
            && self.snoozed_until.map_or(true, |until| until <= today)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Reminder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(due: NaiveDate) -> Reminder {
        Reminder {
            id: "r1".into(),
            title: "Water seedlings".into(),
            due_date: due,
            garden_id: None,
            plant_id: None,
            completed: false,
            snoozed_until: None,
        }
    }

    #[test]
    fn test_reminder_due_today() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert!(reminder(today).is_due(today));
    }

    #[test]
    fn test_snoozed_reminder_not_due_until_snooze_ends() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut r = reminder(today);
        r.snoozed_until = NaiveDate::from_ymd_opt(2025, 5, 3);
        assert!(!r.is_due(today));
        assert!(r.is_due(NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()));
    }

    #[test]
    fn test_completed_reminder_never_due() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut r = reminder(today);
        r.completed = true;
        assert!(!r.is_due(today));
    }
}
