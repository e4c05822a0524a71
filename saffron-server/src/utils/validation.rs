//! Input validation helpers
//!
//! Booking business checks applied by the handlers on top of the shared
//! DTO schema validation.

use chrono::{NaiveDate, Utc};

use crate::utils::AppError;

/// Bookings must be for today or later.
pub fn validate_booking_date(date: &NaiveDate) -> Result<(), AppError> {
    if *date < Utc::now().date_naive() {
        return Err(AppError::validation("Date cannot be in the past"));
    }
    Ok(())
}

/// Bookings must land on a published service slot.
pub fn validate_service_slot(time: &str) -> Result<(), AppError> {
    if !shared::models::reservation::is_service_slot(time) {
        return Err(AppError::validation(format!(
            "'{time}' is not an available time slot"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_booking_date() {
        let today = Utc::now().date_naive();
        assert!(validate_booking_date(&today).is_ok());
        assert!(validate_booking_date(&(today + Duration::days(7))).is_ok());
        assert!(validate_booking_date(&(today - Duration::days(1))).is_err());
    }

    #[test]
    fn test_service_slot() {
        assert!(validate_service_slot("19:30").is_ok());
        assert!(validate_service_slot("16:00").is_err());
    }
}
