use crate::models::Role;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A static notification shown in the navbar panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

fn mock(id: u32, title: &str, body: &str, minutes_ago: i64, read: bool, now: DateTime<Utc>) -> Notification {
    Notification {
        id,
        title: title.to_string(),
        body: body.to_string(),
        created_at: now - Duration::minutes(minutes_ago),
        read,
    }
}

/// Mock notifications for a role, newest first, timestamped relative to
/// `now`.
pub fn mock_notifications(role: Role, now: DateTime<Utc>) -> Vec<Notification> {
    let mut items = match role {
        Role::Admin => vec![
            mock(1, "New business signup", "Acme Corp registered and awaits review.", 5, false, now),
            mock(2, "Report ready", "The monthly usage report has been generated.", 90, false, now),
            mock(3, "User flagged", "A freelancer profile was reported for spam.", 60 * 26, true, now),
        ],
        Role::Business => vec![
            mock(1, "Proposal received", "A freelancer applied to \"Landing page redesign\".", 12, false, now),
            mock(2, "Payment processed", "Invoice #1042 was paid successfully.", 60 * 5, true, now),
        ],
        Role::Freelancer => vec![
            mock(1, "Proposal accepted", "Your proposal for \"Mobile app MVP\" was accepted.", 3, false, now),
            mock(2, "New message", "The client left feedback on milestone 2.", 45, false, now),
            mock(3, "Payout sent", "Your weekly earnings are on their way.", 60 * 24 * 3, true, now),
        ],
        Role::Employee => vec![
            mock(1, "Task assigned", "You were assigned \"Quarterly onboarding\".", 20, false, now),
            mock(2, "Schedule updated", "Friday's stand-up moved to 10:00.", 60 * 8, true, now),
        ],
    };
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Short relative label such as "just now", "5m ago", "3h ago", "2d ago".
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn every_role_has_notifications() {
        for role in Role::ALL {
            assert!(!mock_notifications(role, now()).is_empty());
        }
    }

    #[test]
    fn notifications_are_newest_first() {
        let items = mock_notifications(Role::Admin, now());
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn unread_count_skips_read_items() {
        let items = mock_notifications(Role::Freelancer, now());
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn time_ago_buckets() {
        let n = now();
        assert_eq!(time_ago(n - Duration::seconds(30), n), "just now");
        assert_eq!(time_ago(n - Duration::minutes(5), n), "5m ago");
        assert_eq!(time_ago(n - Duration::hours(3), n), "3h ago");
        assert_eq!(time_ago(n - Duration::days(2), n), "2d ago");
    }

    #[test]
    fn time_ago_future_is_just_now() {
        let n = now();
        assert_eq!(time_ago(n + Duration::minutes(10), n), "just now");
    }
}
