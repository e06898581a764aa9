use crate::models::ticket::TicketType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Online,
    Busy,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: AgentStatus,
    pub current_tickets: u32,
    pub resolved_today: u32,
    pub avg_response_time: f64, // hours
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_ids: Vec<String>,
    pub specialization: Vec<TicketType>,
    pub current_workload: u32,
    pub max_capacity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub teams: Vec<Team>,
    pub agents: Vec<Agent>,
}

impl Roster {
    pub fn members_of<'a>(&'a self, team: &'a Team) -> impl Iterator<Item = &'a Agent> + 'a {
        self.agents
            .iter()
            .filter(move |agent| team.member_ids.contains(&agent.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadLevel {
    Normal,
    Elevated,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamOverview {
    pub team: Team,
    pub members: Vec<Agent>,
    pub workload_percentage: f64,
    pub workload_level: WorkloadLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total_agents: usize,
    pub online_agents: usize,
    pub avg_response_time: f64,
    pub resolved_today: u32,
}
