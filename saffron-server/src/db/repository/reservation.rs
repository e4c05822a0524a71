//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult, now_ts, record_id};
use crate::db::models::Reservation;
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{ReservationCreate, ReservationStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let reservation: Option<Reservation> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(reservation)
    }

    /// Live booking (pending/confirmed) for the same guest and slot
    pub async fn find_live_duplicate(
        &self,
        email: &str,
        date: NaiveDate,
        time: &str,
    ) -> RepoResult<Option<Reservation>> {
        let email = email.to_string();
        let time = time.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation \
                 WHERE email = $email AND date = $date AND time = $time \
                 AND status IN ['pending', 'confirmed'] LIMIT 1",
            )
            .bind(("email", email))
            .bind(("date", date))
            .bind(("time", time))
            .await?;
        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations.into_iter().next())
    }

    /// Create a new booking in `pending` state
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        if self
            .find_live_duplicate(&data.email, data.date, &data.time)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(
                "A reservation for this guest and time already exists".to_string(),
            ));
        }

        let reservation = Reservation {
            id: None,
            name: data.name,
            email: data.email,
            phone: data.phone,
            date: data.date,
            time: data.time,
            guests: data.guests,
            occasion: data.occasion,
            special_requests: data.special_requests,
            status: ReservationStatus::Pending,
            created_at: now_ts(),
        };

        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Admin window query: reservations created in the last N hours,
    /// optionally filtered by status
    pub async fn find_window(
        &self,
        last_num_hours: Option<i64>,
        status: Option<ReservationStatus>,
    ) -> RepoResult<Vec<Reservation>> {
        let cutoff = last_num_hours.map(|h| now_ts() - h.max(0) * 3600);

        let mut result = match (cutoff, status) {
            (Some(cutoff), Some(status)) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM reservation \
                         WHERE created_at > $cutoff AND status = $status \
                         ORDER BY date, time",
                    )
                    .bind(("cutoff", cutoff))
                    .bind(("status", status))
                    .await?
            }
            (Some(cutoff), None) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM reservation WHERE created_at > $cutoff ORDER BY date, time",
                    )
                    .bind(("cutoff", cutoff))
                    .await?
            }
            (None, Some(status)) => {
                self.base
                    .db()
                    .query("SELECT * FROM reservation WHERE status = $status ORDER BY date, time")
                    .bind(("status", status))
                    .await?
            }
            (None, None) => {
                self.base
                    .db()
                    .query("SELECT * FROM reservation ORDER BY date, time")
                    .await?
            }
        };

        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations)
    }

    /// Persist a status change (legality is checked by the handler)
    pub async fn set_status(&self, id: &str, status: ReservationStatus) -> RepoResult<Reservation> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: ReservationStatus,
        }

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $id MERGE $data")
            .bind(("id", rid))
            .bind(("data", StatusUpdate { status }))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Retention purge: delete reservations created more than N hours ago.
    /// Returns the number of deleted records.
    pub async fn purge_older_than(&self, hours: i64) -> RepoResult<usize> {
        let cutoff = now_ts() - hours.max(0) * 3600;
        let mut result = self
            .base
            .db()
            .query("DELETE FROM reservation WHERE created_at < $cutoff RETURN BEFORE")
            .bind(("cutoff", cutoff))
            .await?;
        let deleted: Vec<Reservation> = result.take(0)?;
        Ok(deleted.len())
    }

    /// Count of pending reservations (dashboard stats)
    pub async fn count_pending(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM reservation WHERE status = 'pending' GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
