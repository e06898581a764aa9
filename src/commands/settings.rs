use crate::error::{DeskError, DeskResult};
use crate::models::desk::{lock_desk, SharedDesk};
use crate::models::ticket::{Priority, TicketType};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_SCHEMA_VERSION: i64 = 1;
pub const SETTINGS_PATH_ENV: &str = "SUPPORTDESK_SETTINGS";

#[derive(Debug, Clone)]
pub struct EffectiveIntakeSettings {
    pub intake_latency: Duration,
    pub auto_classify: bool,
    pub preview_min_chars: usize,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    pub auto_reply_threshold: f64,
    pub recent_ticket_limit: usize,
    pub default_priority: Priority,
    pub default_type: TicketType,
    pub rng_seed: Option<u64>,
    pub seed_demo_data: bool,
}

impl EffectiveIntakeSettings {
    /// Typed view over a settings object. Values are sanitized first, so any
    /// JSON (even malformed) yields usable settings.
    pub fn from_value(settings: &Value) -> Self {
        let settings = migrate_settings(settings.clone());
        let u64_of = |key: &str, default: u64| settings.get(key).and_then(Value::as_u64).unwrap_or(default);
        let f64_of = |key: &str, default: f64| settings.get(key).and_then(Value::as_f64).unwrap_or(default);
        let bool_of = |key: &str| settings.get(key).and_then(Value::as_bool).unwrap_or(true);

        Self {
            intake_latency: Duration::from_millis(u64_of("intakeLatencyMs", 1000)),
            auto_classify: bool_of("autoClassify"),
            preview_min_chars: u64_of("previewMinChars", 20) as usize,
            confidence_floor: f64_of("confidenceFloor", 0.85),
            confidence_ceiling: f64_of("confidenceCeiling", 0.95),
            auto_reply_threshold: f64_of("autoReplyThreshold", 0.3),
            recent_ticket_limit: u64_of("recentTicketLimit", 5) as usize,
            default_priority: settings
                .get("defaultPriority")
                .and_then(Value::as_str)
                .and_then(Priority::parse)
                .unwrap_or(Priority::Medium),
            default_type: settings
                .get("defaultType")
                .and_then(Value::as_str)
                .and_then(TicketType::parse)
                .unwrap_or(TicketType::General),
            rng_seed: settings.get("rngSeed").and_then(Value::as_u64),
            seed_demo_data: bool_of("seedDemoData"),
        }
    }
}

impl Default for EffectiveIntakeSettings {
    fn default() -> Self {
        Self::from_value(&default_settings())
    }
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_settings(desk: tauri::State<'_, SharedDesk>) -> Result<Value, String> {
    get_settings_internal(desk.inner()).map_err(|e| e.to_string())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn save_settings(settings: Value, desk: tauri::State<'_, SharedDesk>) -> Result<Value, String> {
    save_settings_internal(desk.inner(), settings).map_err(|e| e.to_string())
}

pub fn get_settings_internal(desk: &SharedDesk) -> DeskResult<Value> {
    Ok(lock_desk(desk)?.settings().clone())
}

/// Merges a partial update into the running desk. Nothing is written to disk.
pub fn save_settings_internal(desk: &SharedDesk, incoming: Value) -> DeskResult<Value> {
    if !incoming.is_object() {
        return Err(DeskError::Settings("settings update must be a JSON object".to_string()));
    }

    let mut desk = lock_desk(desk)?;
    let mut merged = desk.settings().clone();
    merge_settings(&mut merged, &incoming);

    let migrated = migrate_settings(merged);
    desk.apply_settings(migrated.clone());
    log::info!("settings updated: {incoming}");
    Ok(migrated)
}

pub fn settings_path_from_env() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from)
}

/// Reads the optional startup settings file. A missing file gives defaults;
/// an unparseable one is logged and ignored.
pub fn load_settings_from_disk(path: &Path) -> DeskResult<Value> {
    if !path.exists() {
        return Ok(default_settings());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| DeskError::Settings(format!("failed to read {}: {e}", path.display())))?;

    let original = serde_json::from_str::<Value>(&raw).unwrap_or_else(|e| {
        log::warn!("ignoring malformed settings file {}: {e}", path.display());
        json!({})
    });

    Ok(migrate_settings(original))
}

pub fn migrate_settings(input: Value) -> Value {
    let defaults = default_settings();
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &defaults);
    sanitize_settings(&mut out);

    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

pub fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "intakeLatencyMs": 1000,
        "autoClassify": true,
        "previewMinChars": 20,
        "confidenceFloor": 0.85,
        "confidenceCeiling": 0.95,
        "autoReplyThreshold": 0.3,
        "recentTicketLimit": 5,
        "defaultPriority": "medium",
        "defaultType": "general",
        "rngSeed": null,
        "seedDemoData": true
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    clamp_u64(obj, "intakeLatencyMs", 0, 10_000, 1000);
    clamp_u64(obj, "previewMinChars", 0, 500, 20);
    clamp_u64(obj, "recentTicketLimit", 1, 50, 5);

    clamp_f64(obj, "confidenceFloor", 0.0, 1.0, 0.85);
    let floor = obj.get("confidenceFloor").and_then(Value::as_f64).unwrap_or(0.85);
    clamp_f64(obj, "confidenceCeiling", floor, 1.0, 0.95);
    clamp_f64(obj, "autoReplyThreshold", 0.0, 1.0, 0.3);

    let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    sanitize_enum(obj, "defaultPriority", &priorities, "medium");
    let types: Vec<&str> = TicketType::ALL.iter().map(TicketType::as_str).collect();
    sanitize_enum(obj, "defaultType", &types, "general");

    ensure_bool(obj, "autoClassify", true);
    ensure_bool(obj, "seedDemoData", true);

    // Seed is either an unsigned integer or null.
    let seed = obj.get("rngSeed").and_then(Value::as_u64);
    obj.insert("rngSeed".to_string(), json!(seed));
}

fn clamp_u64(map: &mut Map<String, Value>, key: &str, min: u64, max: u64, default: u64) {
    let raw = map.get(key).and_then(Value::as_u64).unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn clamp_f64(map: &mut Map<String, Value>, key: &str, min: f64, max: f64, default: f64) {
    let raw = map
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default)
        .to_string();
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}
