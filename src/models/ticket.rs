use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Still waiting on the support team.
    pub fn is_active(&self) -> bool {
        matches!(self, TicketStatus::New | TicketStatus::Open | TicketStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Technical,
    Billing,
    General,
    FeatureRequest,
    BugReport,
}

impl TicketType {
    pub const ALL: [TicketType; 5] = [
        TicketType::Technical,
        TicketType::Billing,
        TicketType::General,
        TicketType::FeatureRequest,
        TicketType::BugReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Technical => "technical",
            TicketType::Billing => "billing",
            TicketType::General => "general",
            TicketType::FeatureRequest => "feature_request",
            TicketType::BugReport => "bug_report",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiClassification {
    pub confidence: f64,
    pub suggested_response: Option<String>,
    pub auto_reply_generated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub customer: Customer,
    pub priority: Priority,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub sentiment: Sentiment,
    pub assigned_team: Option<String>,
    pub assigned_agent: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub sla_deadline: i64,
    pub tags: Vec<String>,
    pub ai_classification: AiClassification,
}

/// Raw fields submitted by the create-ticket form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTicketFields {
    pub subject: String,
    pub description: String,
    pub customer: CustomerFields,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Advisory only; replaced by the classifier when auto-classification is on.
    #[serde(default)]
    pub ticket_type: Option<TicketType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
}

pub fn format_ticket_id(seq: u32) -> String {
    format!("TK-{seq:03}")
}
