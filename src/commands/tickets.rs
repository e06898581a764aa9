use crate::analysis::classifier::{classify, Classification};
use crate::analysis::filter::{filter_tickets, TicketQuery};
use crate::analysis::intake::{build_ticket, draw_confidence, validate_fields, IntakeOptions};
use crate::analysis::sla::{sla_countdown, SlaCountdown};
use crate::error::{DeskError, DeskResult};
use crate::models::desk::{lock_desk, SharedDesk};
use crate::models::ticket::{NewTicketFields, Ticket};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationPreview {
    pub classification: Classification,
    pub confidence: f64,
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn create_ticket(
    fields: NewTicketFields,
    desk: tauri::State<'_, SharedDesk>,
) -> Result<Ticket, String> {
    create_ticket_internal(fields, desk.inner())
        .await
        .map_err(|e| e.to_string())
}

/// Intake: validate, wait out the simulated submission latency, then assign
/// the next id and prepend the ticket. The lock is only taken after the wait.
pub async fn create_ticket_internal(fields: NewTicketFields, desk: &SharedDesk) -> DeskResult<Ticket> {
    validate_fields(&fields)?;

    let latency = {
        let desk = lock_desk(desk)?;
        desk.effective_settings().intake_latency
    };
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let mut desk = lock_desk(desk)?;
    let id = desk.next_ticket_id();
    let options = IntakeOptions::from(desk.effective_settings());
    let now = chrono::Utc::now().timestamp();

    let ticket = build_ticket(&fields, id, now, &options, desk.rng_mut());
    desk.commit(ticket.clone());

    log::info!(
        "created {} ({:?}, {:?}) routed to {}",
        ticket.id,
        ticket.priority,
        ticket.ticket_type,
        ticket.assigned_team.as_deref().unwrap_or("unassigned"),
    );

    Ok(ticket)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_tickets(
    query: Option<TicketQuery>,
    desk: tauri::State<'_, SharedDesk>,
) -> Result<Vec<Ticket>, String> {
    list_tickets_internal(&query.unwrap_or_default(), desk.inner()).map_err(|e| e.to_string())
}

pub fn list_tickets_internal(query: &TicketQuery, desk: &SharedDesk) -> DeskResult<Vec<Ticket>> {
    let desk = lock_desk(desk)?;
    Ok(filter_tickets(desk.tickets(), query))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_ticket(id: String, desk: tauri::State<'_, SharedDesk>) -> Result<Ticket, String> {
    get_ticket_internal(&id, desk.inner()).map_err(|e| e.to_string())
}

pub fn get_ticket_internal(id: &str, desk: &SharedDesk) -> DeskResult<Ticket> {
    lock_desk(desk)?
        .find_ticket(id)
        .cloned()
        .ok_or_else(|| DeskError::TicketNotFound(id.to_string()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_sla_countdown(
    id: String,
    desk: tauri::State<'_, SharedDesk>,
) -> Result<SlaCountdown, String> {
    get_sla_countdown_internal(&id, chrono::Utc::now().timestamp(), desk.inner())
        .map_err(|e| e.to_string())
}

pub fn get_sla_countdown_internal(id: &str, now: i64, desk: &SharedDesk) -> DeskResult<SlaCountdown> {
    let ticket = get_ticket_internal(id, desk)?;
    Ok(sla_countdown(ticket.sla_deadline, now))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn preview_classification(
    description: String,
    desk: tauri::State<'_, SharedDesk>,
) -> Result<Option<ClassificationPreview>, String> {
    preview_classification_internal(&description, desk.inner()).map_err(|e| e.to_string())
}

/// Live preview for the create form. Short descriptions get no preview.
pub fn preview_classification_internal(
    description: &str,
    desk: &SharedDesk,
) -> DeskResult<Option<ClassificationPreview>> {
    let mut desk = lock_desk(desk)?;
    let settings = desk.effective_settings().clone();

    if description.chars().count() <= settings.preview_min_chars {
        return Ok(None);
    }

    let confidence = draw_confidence(
        desk.rng_mut(),
        settings.confidence_floor,
        settings.confidence_ceiling,
    );

    Ok(Some(ClassificationPreview {
        classification: classify(description),
        confidence,
    }))
}
