use crate::analysis::metrics::{compute_analytics, dashboard_summary};
use crate::error::DeskResult;
use crate::models::analytics::{Analytics, DashboardSummary};
use crate::models::desk::{lock_desk, SharedDesk};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_dashboard_summary(
    desk: tauri::State<'_, SharedDesk>,
) -> Result<DashboardSummary, String> {
    get_dashboard_summary_internal(chrono::Utc::now().timestamp(), desk.inner())
        .map_err(|e| e.to_string())
}

pub fn get_dashboard_summary_internal(now: i64, desk: &SharedDesk) -> DeskResult<DashboardSummary> {
    let desk = lock_desk(desk)?;
    Ok(dashboard_summary(
        desk.tickets(),
        desk.roster(),
        desk.baseline(),
        now,
        desk.effective_settings().recent_ticket_limit,
    ))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_analytics(desk: tauri::State<'_, SharedDesk>) -> Result<Analytics, String> {
    get_analytics_internal(chrono::Utc::now().timestamp(), desk.inner()).map_err(|e| e.to_string())
}

pub fn get_analytics_internal(now: i64, desk: &SharedDesk) -> DeskResult<Analytics> {
    let desk = lock_desk(desk)?;
    Ok(compute_analytics(desk.tickets(), desk.roster(), desk.baseline(), now))
}
