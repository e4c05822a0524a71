//! Reservation service
//!
//! The booking form validates locally before submitting, matching the
//! server-side rules (schema, future date, published service slot).

use validator::Validate;

use crate::http::RestClient;
use crate::{ClientError, ClientResult};
use shared::models::reservation::is_service_slot;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, UpdateReservationStatusRequest};

pub struct ReservationService<'a, C: RestClient> {
    client: &'a C,
}

impl<'a, C: RestClient> ReservationService<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Submit a booking (public)
    pub async fn book(&self, booking: &ReservationCreate) -> ClientResult<Reservation> {
        booking.validate()?;
        if !is_service_slot(&booking.time) {
            return Err(ClientError::Validation(format!(
                "'{}' is not an available time slot",
                booking.time
            )));
        }

        self.client.post("/api/reservations/book", booking).await
    }

    /// Admin listing window: reservations from the last N hours,
    /// optionally filtered by status
    pub async fn list(
        &self,
        last_num_hours: Option<i64>,
        status: Option<ReservationStatus>,
    ) -> ClientResult<Vec<Reservation>> {
        let mut params: Vec<String> = Vec::new();
        if let Some(hours) = last_num_hours {
            params.push(format!("last_num_hours={hours}"));
        }
        if let Some(status) = status {
            params.push(format!("status={status}"));
        }

        let path = if params.is_empty() {
            "/api/reservations/all".to_string()
        } else {
            format!("/api/reservations/all?{}", params.join("&"))
        };

        self.client.get(&path).await
    }

    /// Change a reservation's status (admin)
    pub async fn update_status(
        &self,
        reservation_id: &str,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        let request = UpdateReservationStatusRequest {
            reservation_id: reservation_id.to_string(),
            status,
        };
        self.client
            .post("/api/reservations/update-status", &request)
            .await
    }

    /// Purge reservations created more than N hours ago (admin)
    pub async fn purge(&self, hours: i64) -> ClientResult<PurgeOutcome> {
        self.client
            .delete(&format!("/api/reservations/delete?hours={hours}"))
            .await
    }
}

/// Purge response payload
#[derive(Debug, serde::Deserialize)]
pub struct PurgeOutcome {
    pub deleted: usize,
    pub message: String,
}
