// src/models/mod.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_CHECK_IN_TIME: &str = "14:00";
pub const DEFAULT_CHECK_OUT_TIME: &str = "11:00";

// ───────────────────────────────────────
// Store records (read-only inputs)
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: String,
    pub name: String,                      // public / commercial name
    #[serde(default, alias = "internalName")]
    pub internal_name: Option<String>,     // operational name, wins when present
}

impl Property {
    /// Name used for matching and display: `internal_name`, else `name`.
    pub fn display_name(&self) -> &str {
        self.internal_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: String,
    #[serde(alias = "propertyId")]
    pub property_id: String,
    #[serde(alias = "guestName")]
    pub guest_name: String,
    #[serde(alias = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(alias = "checkOut")]
    pub check_out: NaiveDate,
    #[serde(default, alias = "checkInTime")]
    pub check_in_time: Option<String>,     // "HH:MM", free text
    #[serde(default, alias = "checkOutTime")]
    pub check_out_time: Option<String>,
}

impl Reservation {
    pub fn check_in_time_or_default(&self) -> &str {
        self.check_in_time.as_deref().unwrap_or(DEFAULT_CHECK_IN_TIME)
    }

    pub fn check_out_time_or_default(&self) -> &str {
        self.check_out_time.as_deref().unwrap_or(DEFAULT_CHECK_OUT_TIME)
    }
}

// ───────────────────────────────────────
// Derived views (recomputed, never stored)
// ───────────────────────────────────────

/// A date on which at least one property turns over from one stay to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalDay {
    pub date: NaiveDate,
    pub count: usize,                      // distinct properties
    pub property_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorityWatch {
    pub property: Option<Property>,
    pub date: Option<NaiveDate>,
    pub out_guest: Option<Reservation>,
    pub in_guest: Option<Reservation>,
}

impl PriorityWatch {
    /// No property matched the marker.
    pub fn unmatched() -> Self {
        Self::default()
    }

    /// The property resolved but has no upcoming turnover.
    pub fn clear(property: Property) -> Self {
        Self { property: Some(property), ..Self::default() }
    }

    pub fn is_clear(&self) -> bool {
        self.date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub property_id: String,
    pub property_name: String,
    pub out_guest: Option<Reservation>,
    pub in_guest: Option<Reservation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionDetail {
    pub date: NaiveDate,
    pub collisions: Vec<Collision>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub cleanings: usize,
    pub check_ins: usize,
    pub check_outs: usize,
    pub total_reservations: usize,
}

// ───────────────────────────────────────
// DTOs helpful for endpoints
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotBody {
    #[serde(default)] pub properties: Vec<Property>,
    #[serde(default)] pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub version: u64,
    pub fingerprint: String,              // SHA256 hex of canonical JSON
    pub properties: usize,
    pub reservations: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotUpdate {
    pub changed: bool,
    pub snapshot: SnapshotInfo,
}
