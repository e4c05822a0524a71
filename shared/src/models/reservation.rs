//! Reservation Model
//!
//! Booking records plus the status transition table the server enforces.
//! The client uses the same table to decide which actions to offer.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Bookable service slots (lunch and dinner seatings)
pub const SERVICE_SLOTS: &[&str] = &[
    "11:30", "12:00", "12:30", "13:00", "13:30", "18:00", "18:30", "19:00", "19:30", "20:00",
    "20:30", "21:00",
];

/// Occasions offered by the booking form
pub const OCCASIONS: &[&str] = &[
    "None",
    "Birthday",
    "Anniversary",
    "Business Meeting",
    "Date Night",
    "Family Gathering",
    "Other",
];

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\s()\-]{7,15}$").expect("phone regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time regex"));

/// Reservation lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Legal transitions:
    /// pending -> confirmed | cancelled, confirmed -> completed | cancelled
    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationStatus::Completed | ReservationStatus::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<String>,
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

/// Booking payload, validated on both sides of the wire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 2, max = 50, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone format"))]
    pub phone: String,
    #[validate(custom(function = validate_date_not_past))]
    pub date: NaiveDate,
    #[validate(regex(path = *TIME_RE, message = "Invalid time format (HH:MM)"))]
    pub time: String,
    #[validate(range(min = 1, max = 20, message = "For parties over 20, please contact us directly"))]
    pub guests: u32,
    #[validate(length(max = 50, message = "Occasion cannot exceed 50 characters"))]
    pub occasion: Option<String>,
    #[validate(length(max = 500, message = "Special requests cannot exceed 500 characters"))]
    pub special_requests: Option<String>,
}

/// Admin status update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReservationStatusRequest {
    pub reservation_id: String,
    pub status: ReservationStatus,
}

fn validate_date_not_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < Utc::now().date_naive() {
        return Err(ValidationError::new("date").with_message("Date cannot be in the past".into()));
    }
    Ok(())
}

/// Whether a time string is a bookable service slot
pub fn is_service_slot(time: &str) -> bool {
    SERVICE_SLOTS.contains(&time)
}
