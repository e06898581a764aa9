use crate::analysis::sla::sla_deadline;
use crate::models::analytics::AnalyticsBaseline;
use crate::models::roster::{Agent, AgentStatus, Roster, Team};
use crate::models::ticket::{
    AiClassification, Customer, Priority, Sentiment, Ticket, TicketStatus, TicketType,
};

pub const DEMO_BASELINE: AnalyticsBaseline = AnalyticsBaseline {
    avg_resolution_time: 4.2,
    customer_satisfaction: 4.6,
};

struct SeedTicket {
    id: &'static str,
    subject: &'static str,
    description: &'static str,
    customer: (&'static str, &'static str, &'static str),
    priority: Priority,
    status: TicketStatus,
    ticket_type: TicketType,
    sentiment: Sentiment,
    team: Option<&'static str>,
    agent: Option<&'static str>,
    created_mins_ago: i64,
    updated_mins_ago: i64,
    tags: &'static [&'static str],
    confidence: f64,
    suggested_response: &'static str,
    auto_reply: bool,
}

const SEED_TICKETS: [SeedTicket; 5] = [
    SeedTicket {
        id: "TK-001",
        subject: "Unable to login to account",
        description: "I've been trying to log in for the past hour but keep getting an error message. This is urgent as I need to access my data for a client presentation.",
        customer: ("John Smith", "john.smith@acme.com", "Acme Corp"),
        priority: Priority::High,
        status: TicketStatus::Open,
        ticket_type: TicketType::Technical,
        sentiment: Sentiment::Negative,
        team: Some("Technical Support"),
        agent: Some("Sarah Johnson"),
        created_mins_ago: 120,
        updated_mins_ago: 30,
        tags: &["login", "urgent", "authentication"],
        confidence: 0.95,
        suggested_response: "Password reset instructions and account recovery steps",
        auto_reply: true,
    },
    SeedTicket {
        id: "TK-002",
        subject: "Question about pricing plans",
        description: "Hi, I'm interested in upgrading my plan. Could you help me understand the differences between the Pro and Enterprise plans?",
        customer: ("Lisa Wong", "lisa@techstartup.io", "Tech Startup"),
        priority: Priority::Medium,
        status: TicketStatus::New,
        ticket_type: TicketType::General,
        sentiment: Sentiment::Positive,
        team: None,
        agent: None,
        created_mins_ago: 45,
        updated_mins_ago: 45,
        tags: &["pricing", "upgrade", "plans"],
        confidence: 0.88,
        suggested_response: "Pricing comparison chart and upgrade benefits",
        auto_reply: false,
    },
    SeedTicket {
        id: "TK-003",
        subject: "Billing discrepancy in latest invoice",
        description: "There seems to be an error in my latest invoice. I was charged twice for the same service. Please investigate and refund the duplicate charge.",
        customer: ("Robert Taylor", "robert@manufacturing.com", "Manufacturing Inc"),
        priority: Priority::High,
        status: TicketStatus::Pending,
        ticket_type: TicketType::Billing,
        sentiment: Sentiment::Negative,
        team: Some("Billing & Finance"),
        agent: Some("Emma Davis"),
        created_mins_ago: 360,
        updated_mins_ago: 60,
        tags: &["billing", "refund", "duplicate-charge"],
        confidence: 0.92,
        suggested_response: "Invoice review and refund process initiation",
        auto_reply: true,
    },
    SeedTicket {
        id: "TK-004",
        subject: "Feature request: Dark mode",
        description: "Would love to see a dark mode option in the application. Many users have been requesting this feature.",
        customer: ("Alex Rodriguez", "alex@designagency.com", "Design Agency"),
        priority: Priority::Low,
        status: TicketStatus::Open,
        ticket_type: TicketType::FeatureRequest,
        sentiment: Sentiment::Positive,
        team: Some("General Support"),
        agent: None,
        created_mins_ago: 1440,
        updated_mins_ago: 240,
        tags: &["feature-request", "ui", "dark-mode"],
        confidence: 0.85,
        suggested_response: "Acknowledge request and add to product roadmap",
        auto_reply: false,
    },
    SeedTicket {
        id: "TK-005",
        subject: "Application crashes when uploading files",
        description: "Every time I try to upload a file larger than 10MB, the application crashes. This is preventing me from completing my work.",
        customer: ("Maria Garcia", "maria@consulting.com", "Consulting Group"),
        priority: Priority::Urgent,
        status: TicketStatus::New,
        ticket_type: TicketType::BugReport,
        sentiment: Sentiment::Negative,
        team: None,
        agent: None,
        created_mins_ago: 15,
        updated_mins_ago: 15,
        tags: &["bug", "crash", "file-upload", "urgent"],
        confidence: 0.97,
        suggested_response: "Escalate to technical team for immediate investigation",
        auto_reply: true,
    },
];

/// Demo tickets with timestamps anchored to `now` (unix seconds).
pub fn demo_tickets(now: i64) -> Vec<Ticket> {
    SEED_TICKETS
        .iter()
        .map(|seed| {
            let created_at = now - seed.created_mins_ago * 60;
            let (name, email, company) = seed.customer;
            Ticket {
                id: seed.id.to_string(),
                subject: seed.subject.to_string(),
                description: seed.description.to_string(),
                customer: Customer {
                    name: name.to_string(),
                    email: email.to_string(),
                    company: Some(company.to_string()),
                },
                priority: seed.priority,
                status: seed.status,
                ticket_type: seed.ticket_type,
                sentiment: seed.sentiment,
                assigned_team: seed.team.map(str::to_string),
                assigned_agent: seed.agent.map(str::to_string),
                created_at,
                updated_at: now - seed.updated_mins_ago * 60,
                sla_deadline: sla_deadline(seed.priority, created_at),
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                ai_classification: AiClassification {
                    confidence: seed.confidence,
                    suggested_response: Some(seed.suggested_response.to_string()),
                    auto_reply_generated: seed.auto_reply,
                },
            }
        })
        .collect()
}

pub fn demo_roster() -> Roster {
    let agent = |id: &str, name: &str, email: &str, status, current, resolved, response| Agent {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
        status,
        current_tickets: current,
        resolved_today: resolved,
        avg_response_time: response,
    };

    let agents = vec![
        agent("1", "Sarah Johnson", "sarah@company.com", AgentStatus::Online, 8, 12, 1.2),
        agent("2", "Mike Chen", "mike@company.com", AgentStatus::Busy, 15, 8, 2.1),
        agent("3", "Emma Davis", "emma@company.com", AgentStatus::Online, 6, 15, 0.9),
        agent("4", "James Wilson", "james@company.com", AgentStatus::Offline, 0, 18, 1.5),
    ];

    let teams = vec![
        Team {
            id: "1".to_string(),
            name: "Technical Support".to_string(),
            description: "Handles technical issues, bugs, and integration problems".to_string(),
            member_ids: vec!["1".to_string(), "2".to_string()],
            specialization: vec![TicketType::Technical, TicketType::BugReport],
            current_workload: 23,
            max_capacity: 50,
        },
        Team {
            id: "2".to_string(),
            name: "Billing & Finance".to_string(),
            description: "Manages billing inquiries, payments, and account issues".to_string(),
            member_ids: vec!["3".to_string()],
            specialization: vec![TicketType::Billing],
            current_workload: 6,
            max_capacity: 25,
        },
        Team {
            id: "3".to_string(),
            name: "General Support".to_string(),
            description: "Handles general inquiries and feature requests".to_string(),
            member_ids: vec!["4".to_string()],
            specialization: vec![TicketType::General, TicketType::FeatureRequest],
            current_workload: 0,
            max_capacity: 30,
        },
    ];

    Roster { teams, agents }
}
