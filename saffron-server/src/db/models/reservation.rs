//! Reservation Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::ReservationStatus;
use surrealdb::RecordId;

/// Reservation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    /// Service slot, "HH:MM"
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
}
