use crate::analysis::sla::is_breached;
use crate::analysis::workload::team_response_time;
use crate::models::analytics::{Analytics, AnalyticsBaseline, DashboardSummary};
use crate::models::roster::Roster;
use crate::models::ticket::{Priority, Sentiment, Ticket, TicketType};
use std::collections::BTreeMap;

/// Aggregate analytics over the current ticket list. Every priority, type and
/// sentiment is present in the breakdowns, zero-filled.
pub fn compute_analytics(
    tickets: &[Ticket],
    roster: &Roster,
    baseline: AnalyticsBaseline,
    now: i64,
) -> Analytics {
    let mut tickets_by_priority: BTreeMap<Priority, usize> =
        Priority::ALL.into_iter().map(|p| (p, 0)).collect();
    let mut tickets_by_type: BTreeMap<TicketType, usize> =
        TicketType::ALL.into_iter().map(|t| (t, 0)).collect();
    let mut sentiment_distribution: BTreeMap<Sentiment, usize> =
        Sentiment::ALL.into_iter().map(|s| (s, 0)).collect();

    let mut open_tickets = 0;
    let mut within_sla = 0;

    for ticket in tickets {
        *tickets_by_priority.entry(ticket.priority).or_insert(0) += 1;
        *tickets_by_type.entry(ticket.ticket_type).or_insert(0) += 1;
        *sentiment_distribution.entry(ticket.sentiment).or_insert(0) += 1;

        if ticket.status.is_active() {
            open_tickets += 1;
            if !is_breached(ticket.sla_deadline, now) {
                within_sla += 1;
            }
        } else {
            // closed out; counted as met
            within_sla += 1;
        }
    }

    let sla_compliance = if tickets.is_empty() {
        100.0
    } else {
        round_one_decimal(within_sla as f64 / tickets.len() as f64 * 100.0)
    };

    let response_time_by_team = roster
        .teams
        .iter()
        .filter_map(|team| {
            team_response_time(roster, team).map(|hours| (team.name.clone(), round_one_decimal(hours)))
        })
        .collect();

    Analytics {
        total_tickets: tickets.len(),
        open_tickets,
        resolved_tickets: tickets.len() - open_tickets,
        avg_resolution_time: baseline.avg_resolution_time,
        customer_satisfaction: baseline.customer_satisfaction,
        sla_compliance,
        tickets_by_priority,
        tickets_by_type,
        sentiment_distribution,
        response_time_by_team,
    }
}

pub fn dashboard_summary(
    tickets: &[Ticket],
    roster: &Roster,
    baseline: AnalyticsBaseline,
    now: i64,
    recent_limit: usize,
) -> DashboardSummary {
    DashboardSummary {
        analytics: compute_analytics(tickets, roster, baseline, now),
        recent_tickets: tickets.iter().take(recent_limit).cloned().collect(),
        urgent_tickets: tickets
            .iter()
            .filter(|t| t.priority >= Priority::High)
            .cloned()
            .collect(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::{demo_roster, demo_tickets, DEMO_BASELINE};

    #[test]
    fn empty_desk_is_fully_compliant() {
        let analytics = compute_analytics(&[], &Roster::default(), AnalyticsBaseline::default(), 0);
        assert_eq!(analytics.total_tickets, 0);
        assert_eq!(analytics.sla_compliance, 100.0);
        assert_eq!(analytics.tickets_by_priority.len(), 4);
        assert!(analytics.tickets_by_type.values().all(|count| *count == 0));
        assert!(analytics.response_time_by_team.is_empty());
    }

    #[test]
    fn counts_seed_tickets_by_dimension() {
        let now = 1_700_000_000;
        let analytics = compute_analytics(&demo_tickets(now), &demo_roster(), DEMO_BASELINE, now);

        assert_eq!(analytics.total_tickets, 5);
        assert_eq!(analytics.open_tickets, 5);
        assert_eq!(analytics.resolved_tickets, 0);
        assert_eq!(analytics.tickets_by_priority[&Priority::High], 2);
        assert_eq!(analytics.tickets_by_type[&TicketType::BugReport], 1);
        assert_eq!(analytics.sentiment_distribution[&Sentiment::Negative], 3);
        // TK-003 was opened six hours ago with a four hour target
        assert_eq!(analytics.sla_compliance, 80.0);
        assert_eq!(analytics.customer_satisfaction, 4.6);
        assert_eq!(analytics.response_time_by_team["Billing & Finance"], 0.9);
        assert_eq!(analytics.response_time_by_team.len(), 3);
    }

    #[test]
    fn breached_active_tickets_lower_compliance() {
        let now = 1_700_000_000;
        // three hours on, only the medium priority ticket is inside its window
        let later = now + 3 * 3600;
        let analytics = compute_analytics(&demo_tickets(now), &demo_roster(), DEMO_BASELINE, later);
        assert_eq!(analytics.sla_compliance, 20.0);
    }

    #[test]
    fn dashboard_lists_recent_and_high_priority_tickets() {
        let now = 1_700_000_000;
        let summary = dashboard_summary(&demo_tickets(now), &demo_roster(), DEMO_BASELINE, now, 3);
        assert_eq!(summary.recent_tickets.len(), 3);
        let urgent: Vec<&str> = summary.urgent_tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(urgent, vec!["TK-001", "TK-003", "TK-005"]);
    }
}
