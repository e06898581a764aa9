use crate::models::ticket::{Priority, Sentiment, Ticket, TicketType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub resolved_tickets: usize,
    pub avg_resolution_time: f64,
    pub customer_satisfaction: f64,
    pub sla_compliance: f64, // percent
    pub tickets_by_priority: BTreeMap<Priority, usize>,
    pub tickets_by_type: BTreeMap<TicketType, usize>,
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    pub response_time_by_team: BTreeMap<String, f64>,
}

/// Metrics with no underlying history in memory; supplied by the seed dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsBaseline {
    pub avg_resolution_time: f64,
    pub customer_satisfaction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub analytics: Analytics,
    pub recent_tickets: Vec<Ticket>,
    pub urgent_tickets: Vec<Ticket>,
}
