use crate::models::ticket::{Priority, Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Ticket list filters. `None` means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl TicketQuery {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                ticket.subject.to_lowercase().contains(&term)
                    || ticket.customer.name.to_lowercase().contains(&term)
                    || ticket.id.to_lowercase().contains(&term)
            }
            _ => true,
        };

        matches_search
            && self.status.map_or(true, |status| ticket.status == status)
            && self.priority.map_or(true, |priority| ticket.priority == priority)
    }
}

/// Keeps collection order (most recent first).
pub fn filter_tickets(tickets: &[Ticket], query: &TicketQuery) -> Vec<Ticket> {
    tickets.iter().filter(|t| query.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::demo_tickets;

    #[test]
    fn empty_query_returns_everything_in_order() {
        let tickets = demo_tickets(0);
        let result = filter_tickets(&tickets, &TicketQuery::default());
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TK-001", "TK-002", "TK-003", "TK-004", "TK-005"]);
    }

    #[test]
    fn search_covers_subject_customer_and_id() {
        let tickets = demo_tickets(0);
        let by_subject = TicketQuery {
            search: Some("INVOICE".to_string()),
            ..TicketQuery::default()
        };
        assert_eq!(filter_tickets(&tickets, &by_subject)[0].id, "TK-003");

        let by_customer = TicketQuery {
            search: Some("maria".to_string()),
            ..TicketQuery::default()
        };
        assert_eq!(filter_tickets(&tickets, &by_customer)[0].id, "TK-005");

        let by_id = TicketQuery {
            search: Some("tk-002".to_string()),
            ..TicketQuery::default()
        };
        assert_eq!(filter_tickets(&tickets, &by_id).len(), 1);
    }

    #[test]
    fn search_term_is_matched_verbatim_including_spaces() {
        let tickets = demo_tickets(0);
        let leading_space = TicketQuery {
            search: Some(" invoice".to_string()),
            ..TicketQuery::default()
        };
        assert_eq!(filter_tickets(&tickets, &leading_space)[0].id, "TK-003");

        let padded = TicketQuery {
            search: Some("invoice  ".to_string()),
            ..TicketQuery::default()
        };
        assert!(filter_tickets(&tickets, &padded).is_empty());

        let empty = TicketQuery {
            search: Some(String::new()),
            ..TicketQuery::default()
        };
        assert_eq!(filter_tickets(&tickets, &empty).len(), 5);
    }

    #[test]
    fn status_and_priority_filters_combine() {
        let tickets = demo_tickets(0);
        let query = TicketQuery {
            search: None,
            status: Some(TicketStatus::New),
            priority: Some(Priority::Urgent),
        };
        let result = filter_tickets(&tickets, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "TK-005");
    }
}
