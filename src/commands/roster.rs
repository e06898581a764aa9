use crate::analysis::workload::{roster_summary, team_overviews};
use crate::error::DeskResult;
use crate::models::desk::{lock_desk, SharedDesk};
use crate::models::roster::{Agent, RosterSummary, TeamOverview};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_teams(desk: tauri::State<'_, SharedDesk>) -> Result<Vec<TeamOverview>, String> {
    get_teams_internal(desk.inner()).map_err(|e| e.to_string())
}

pub fn get_teams_internal(desk: &SharedDesk) -> DeskResult<Vec<TeamOverview>> {
    Ok(team_overviews(lock_desk(desk)?.roster()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_agents(desk: tauri::State<'_, SharedDesk>) -> Result<Vec<Agent>, String> {
    get_agents_internal(desk.inner()).map_err(|e| e.to_string())
}

pub fn get_agents_internal(desk: &SharedDesk) -> DeskResult<Vec<Agent>> {
    Ok(lock_desk(desk)?.roster().agents.clone())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_roster_summary(desk: tauri::State<'_, SharedDesk>) -> Result<RosterSummary, String> {
    get_roster_summary_internal(desk.inner()).map_err(|e| e.to_string())
}

pub fn get_roster_summary_internal(desk: &SharedDesk) -> DeskResult<RosterSummary> {
    Ok(roster_summary(lock_desk(desk)?.roster()))
}
