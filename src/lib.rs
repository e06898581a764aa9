pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

use commands::settings::{default_settings, load_settings_from_disk, settings_path_from_env};
use models::desk::{SharedDesk, SupportDesk};

/// Installs the `env_logger` backend for the `log` macros. Honours `RUST_LOG`
/// and defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Builds the startup desk from the optional settings file named by
/// `SUPPORTDESK_SETTINGS`, falling back to defaults when it cannot be read.
pub fn load_desk() -> SharedDesk {
    let settings = match settings_path_from_env() {
        Some(path) => load_settings_from_disk(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            default_settings()
        }),
        None => default_settings(),
    };

    let desk = SupportDesk::from_settings(settings, chrono::Utc::now().timestamp());
    log::info!("support desk ready with {} tickets", desk.tickets().len());
    desk.into_shared()
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{
        dashboard::{get_analytics, get_dashboard_summary},
        roster::{get_agents, get_roster_summary, get_teams},
        settings::{get_settings, save_settings},
        tickets::{create_ticket, get_sla_countdown, get_ticket, list_tickets, preview_classification},
    };

    init_logging();

    tauri::Builder::default()
        .manage(load_desk())
        .invoke_handler(tauri::generate_handler![
            create_ticket,
            list_tickets,
            get_ticket,
            get_sla_countdown,
            preview_classification,
            get_dashboard_summary,
            get_analytics,
            get_teams,
            get_agents,
            get_roster_summary,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
