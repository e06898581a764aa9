use crate::models::ticket::Priority;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;

pub fn sla_hours(priority: Priority) -> i64 {
    match priority {
        Priority::Urgent => 1,
        Priority::High => 4,
        Priority::Medium => 8,
        Priority::Low => 24,
    }
}

/// Resolution target for a ticket created at `created_at` (unix seconds).
pub fn sla_deadline(priority: Priority, created_at: i64) -> i64 {
    created_at + sla_hours(priority) * SECONDS_PER_HOUR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaState {
    Overdue,
    Critical,
    Warning,
    OnTrack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaCountdown {
    pub state: SlaState,
    pub label: String,
    pub seconds_remaining: i64,
}

/// Time left until `deadline`, banded the way the ticket list colours it:
/// under an hour is critical, under four hours is a warning.
pub fn sla_countdown(deadline: i64, now: i64) -> SlaCountdown {
    let remaining = deadline - now;
    if remaining < 0 {
        return SlaCountdown {
            state: SlaState::Overdue,
            label: "Overdue".to_string(),
            seconds_remaining: remaining,
        };
    }

    let hours = remaining / SECONDS_PER_HOUR;
    let minutes = (remaining % SECONDS_PER_HOUR) / 60;

    let (state, label) = if hours < 1 {
        (SlaState::Critical, format!("{minutes}m"))
    } else if hours < 4 {
        (SlaState::Warning, format!("{hours}h {minutes}m"))
    } else {
        (SlaState::OnTrack, format!("{hours}h {minutes}m"))
    };

    SlaCountdown {
        state,
        label,
        seconds_remaining: remaining,
    }
}

pub fn is_breached(deadline: i64, now: i64) -> bool {
    deadline < now
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_offsets_follow_priority_table() {
        let created_at = 1_700_000_000;
        let expected = [
            (Priority::Urgent, 1),
            (Priority::High, 4),
            (Priority::Medium, 8),
            (Priority::Low, 24),
        ];
        for (priority, hours) in expected {
            assert_eq!(sla_deadline(priority, created_at) - created_at, hours * 3600);
        }
    }

    #[test]
    fn countdown_bands_remaining_time() {
        let now = 1_000_000;
        assert_eq!(sla_countdown(now - 1, now).state, SlaState::Overdue);
        assert_eq!(sla_countdown(now - 1, now).label, "Overdue");

        let critical = sla_countdown(now + 45 * 60, now);
        assert_eq!(critical.state, SlaState::Critical);
        assert_eq!(critical.label, "45m");

        let warning = sla_countdown(now + 2 * 3600 + 15 * 60, now);
        assert_eq!(warning.state, SlaState::Warning);
        assert_eq!(warning.label, "2h 15m");

        let on_track = sla_countdown(now + 20 * 3600, now);
        assert_eq!(on_track.state, SlaState::OnTrack);
        assert_eq!(on_track.label, "20h 0m");
    }

    #[test]
    fn deadline_reached_exactly_is_not_breached() {
        assert!(!is_breached(100, 100));
        assert!(is_breached(99, 100));
        assert_eq!(sla_countdown(100, 100).state, SlaState::Critical);
    }
}
