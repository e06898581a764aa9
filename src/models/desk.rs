use crate::commands::settings::{default_settings, migrate_settings, EffectiveIntakeSettings};
use crate::error::{DeskError, DeskResult};
use crate::models::analytics::AnalyticsBaseline;
use crate::models::roster::Roster;
use crate::models::seed;
use crate::models::ticket::{format_ticket_id, Ticket};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedDesk = Arc<Mutex<SupportDesk>>;

/// In-memory state behind the dashboard. Tickets are kept most recent first;
/// intake is the only writer of the ticket list.
#[derive(Debug)]
pub struct SupportDesk {
    tickets: Vec<Ticket>,
    next_seq: u32,
    roster: Roster,
    baseline: AnalyticsBaseline,
    settings: Value,
    effective: EffectiveIntakeSettings,
    rng: StdRng,
}

impl SupportDesk {
    /// Desk with no tickets and no roster. The first ticket is `TK-001`.
    /// Settings are sanitized before they are stored.
    pub fn empty(settings: Value) -> Self {
        let settings = migrate_settings(settings);
        let effective = EffectiveIntakeSettings::from_value(&settings);
        Self {
            tickets: Vec::new(),
            next_seq: 1,
            roster: Roster::default(),
            baseline: AnalyticsBaseline::default(),
            rng: rng_for(effective.rng_seed),
            settings,
            effective,
        }
    }

    /// Desk preloaded with the demo dataset, timestamps anchored to `now`.
    pub fn seeded(settings: Value, now: i64) -> Self {
        let mut desk = Self::empty(settings);
        desk.tickets = seed::demo_tickets(now);
        desk.next_seq = desk.tickets.len() as u32 + 1;
        desk.roster = seed::demo_roster();
        desk.baseline = seed::DEMO_BASELINE;
        desk
    }

    /// Startup constructor: honours the `seedDemoData` setting.
    pub fn from_settings(settings: Value, now: i64) -> Self {
        if EffectiveIntakeSettings::from_value(&settings).seed_demo_data {
            Self::seeded(settings, now)
        } else {
            Self::empty(settings)
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn into_shared(self) -> SharedDesk {
        Arc::new(Mutex::new(self))
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn find_ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn baseline(&self) -> AnalyticsBaseline {
        self.baseline
    }

    pub fn settings(&self) -> &Value {
        &self.settings
    }

    pub fn effective_settings(&self) -> &EffectiveIntakeSettings {
        &self.effective
    }

    /// Replaces the active settings. A changed `rngSeed` reseeds the random source.
    pub fn apply_settings(&mut self, settings: Value) {
        let effective = EffectiveIntakeSettings::from_value(&settings);
        if effective.rng_seed.is_some() && effective.rng_seed != self.effective.rng_seed {
            self.rng = rng_for(effective.rng_seed);
        }
        self.settings = settings;
        self.effective = effective;
    }

    pub fn next_ticket_id(&self) -> String {
        format_ticket_id(self.next_seq)
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Prepends a freshly built ticket and advances the id sequence.
    pub fn commit(&mut self, ticket: Ticket) {
        self.tickets.insert(0, ticket);
        self.next_seq += 1;
    }
}

impl Default for SupportDesk {
    fn default() -> Self {
        Self::empty(default_settings())
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn lock_desk(desk: &SharedDesk) -> DeskResult<MutexGuard<'_, SupportDesk>> {
    desk.lock().map_err(|_| DeskError::StateLock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_desk_starts_at_first_id() {
        let desk = SupportDesk::default();
        assert!(desk.tickets().is_empty());
        assert_eq!(desk.next_ticket_id(), "TK-001");
    }

    #[test]
    fn seeded_desk_continues_after_demo_tickets() {
        let desk = SupportDesk::seeded(default_settings(), 1_700_000_000);
        assert_eq!(desk.tickets().len(), 5);
        assert_eq!(desk.next_ticket_id(), "TK-006");
        assert!(desk.find_ticket("tk-003").is_some());
        assert_eq!(desk.roster().teams.len(), 3);
    }

    #[test]
    fn stored_settings_are_sanitized_like_effective_ones() {
        let desk = SupportDesk::empty(serde_json::json!({
            "intakeLatencyMs": 999_999,
            "recentTicketLimit": 0
        }));
        assert_eq!(desk.settings()["intakeLatencyMs"], serde_json::json!(10_000));
        assert_eq!(desk.settings()["recentTicketLimit"], serde_json::json!(1));
        assert_eq!(desk.settings()["autoClassify"], serde_json::json!(true));
        assert!(desk.settings().get("schema_version").is_some());
        assert_eq!(desk.effective_settings().recent_ticket_limit, 1);
    }
}
