// src/config.rs

use std::env;

use crate::collisions::{CRITICAL_DAYS_LIMIT, PRIORITY_PROPERTY_MARKER};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub priority_marker: String,
    pub critical_days_limit: usize,
    pub load_snapshot_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: None,
            db_max_connections: 10,
            priority_marker: PRIORITY_PROPERTY_MARKER.to_string(),
            critical_days_limit: CRITICAL_DAYS_LIMIT,
            load_snapshot_on_start: true,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Read from the process environment (call `dotenvy::dotenv()` first).
    /// Missing or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            port: env_parse("PORT", d.port),
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty()),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", d.db_max_connections),
            priority_marker: env::var("PRIORITY_PROPERTY_MARKER").unwrap_or(d.priority_marker),
            critical_days_limit: env_parse("CRITICAL_DAYS_LIMIT", d.critical_days_limit),
            load_snapshot_on_start: env_bool("LOAD_SNAPSHOT_ON_START", d.load_snapshot_on_start),
        }
    }
}
