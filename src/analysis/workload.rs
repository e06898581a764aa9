use crate::models::roster::{AgentStatus, Roster, RosterSummary, Team, TeamOverview, WorkloadLevel};

pub fn workload_percentage(team: &Team) -> f64 {
    if team.max_capacity == 0 {
        return 0.0;
    }
    team.current_workload as f64 / team.max_capacity as f64 * 100.0
}

pub fn workload_level(percentage: f64) -> WorkloadLevel {
    if percentage >= 90.0 {
        WorkloadLevel::Critical
    } else if percentage >= 70.0 {
        WorkloadLevel::Elevated
    } else {
        WorkloadLevel::Normal
    }
}

pub fn team_overviews(roster: &Roster) -> Vec<TeamOverview> {
    roster
        .teams
        .iter()
        .map(|team| {
            let percentage = workload_percentage(team);
            TeamOverview {
                team: team.clone(),
                members: roster.members_of(team).cloned().collect(),
                workload_percentage: percentage,
                workload_level: workload_level(percentage),
            }
        })
        .collect()
}

/// Mean of the members' average response times, `None` for an empty team.
pub fn team_response_time(roster: &Roster, team: &Team) -> Option<f64> {
    let times: Vec<f64> = roster.members_of(team).map(|a| a.avg_response_time).collect();
    if times.is_empty() {
        return None;
    }
    Some(times.iter().sum::<f64>() / times.len() as f64)
}

pub fn roster_summary(roster: &Roster) -> RosterSummary {
    let total_agents = roster.agents.len();
    let avg_response_time = if total_agents == 0 {
        0.0
    } else {
        roster.agents.iter().map(|a| a.avg_response_time).sum::<f64>() / total_agents as f64
    };

    RosterSummary {
        total_agents,
        online_agents: roster
            .agents
            .iter()
            .filter(|a| a.status == AgentStatus::Online)
            .count(),
        avg_response_time,
        resolved_today: roster.agents.iter().map(|a| a.resolved_today).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::demo_roster;

    #[test]
    fn bands_workload_against_capacity() {
        assert_eq!(workload_level(95.0), WorkloadLevel::Critical);
        assert_eq!(workload_level(90.0), WorkloadLevel::Critical);
        assert_eq!(workload_level(70.0), WorkloadLevel::Elevated);
        assert_eq!(workload_level(69.9), WorkloadLevel::Normal);
    }

    #[test]
    fn zero_capacity_team_reports_no_load() {
        let mut team = demo_roster().teams[0].clone();
        team.max_capacity = 0;
        assert_eq!(workload_percentage(&team), 0.0);
    }

    #[test]
    fn overviews_resolve_members_and_levels() {
        let overviews = team_overviews(&demo_roster());
        assert_eq!(overviews.len(), 3);
        assert!((overviews[0].workload_percentage - 46.0).abs() < 1e-9);
        assert_eq!(overviews[0].workload_level, WorkloadLevel::Normal);
        assert_eq!(overviews[0].members.len(), 2);
    }

    #[test]
    fn summarizes_roster_totals() {
        let summary = roster_summary(&demo_roster());
        assert_eq!(summary.total_agents, 4);
        assert_eq!(summary.online_agents, 2);
        assert_eq!(summary.resolved_today, 53);
        assert!((summary.avg_response_time - 1.425).abs() < 1e-9);
    }

    #[test]
    fn team_response_time_averages_members() {
        let roster = demo_roster();
        let technical = team_response_time(&roster, &roster.teams[0]).unwrap();
        assert!((technical - 1.65).abs() < 1e-9);
    }
}
