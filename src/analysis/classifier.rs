use crate::models::ticket::{Sentiment, TicketType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub ticket_type: TicketType,
    pub team: String,
    pub sentiment: Sentiment,
    pub matched_keyword: Option<String>,
}

struct Rule {
    keyword: &'static str,
    ticket_type: TicketType,
    team: &'static str,
    sentiment: Sentiment,
}

/// Scanned top to bottom; the first keyword found decides the outcome.
const RULES: [Rule; 5] = [
    Rule {
        keyword: "login",
        ticket_type: TicketType::Technical,
        team: "Technical Support",
        sentiment: Sentiment::Negative,
    },
    Rule {
        keyword: "billing",
        ticket_type: TicketType::Billing,
        team: "Billing & Finance",
        sentiment: Sentiment::Neutral,
    },
    Rule {
        keyword: "bug",
        ticket_type: TicketType::BugReport,
        team: "Technical Support",
        sentiment: Sentiment::Negative,
    },
    Rule {
        keyword: "feature",
        ticket_type: TicketType::FeatureRequest,
        team: "General Support",
        sentiment: Sentiment::Positive,
    },
    Rule {
        keyword: "help",
        ticket_type: TicketType::General,
        team: "General Support",
        sentiment: Sentiment::Neutral,
    },
];

// Outcome used when nothing matches: the "help" rule.
const FALLBACK_RULE: usize = 4;

pub fn classify(description: &str) -> Classification {
    let text = description.to_lowercase();

    match RULES.iter().find(|rule| text.contains(rule.keyword)) {
        Some(rule) => {
            log::debug!("classifier matched keyword '{}'", rule.keyword);
            to_classification(rule, Some(rule.keyword))
        }
        None => to_classification(&RULES[FALLBACK_RULE], None),
    }
}

fn to_classification(rule: &Rule, matched: Option<&str>) -> Classification {
    Classification {
        ticket_type: rule.ticket_type,
        team: rule.team.to_string(),
        sentiment: rule.sentiment,
        matched_keyword: matched.map(str::to_string),
    }
}

/// Canned reply outline attached to a new ticket of the given type.
pub fn suggested_response(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Technical => "Technical troubleshooting steps and system diagnostics",
        TicketType::Billing => "Account review and billing inquiry resolution",
        TicketType::General => "General support and information assistance",
        TicketType::FeatureRequest => "Feature evaluation and product roadmap consideration",
        TicketType::BugReport => "Bug investigation and development team escalation",
    }
}
