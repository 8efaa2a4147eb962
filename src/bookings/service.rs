use crate::bookings::{
    error::BookingError,
    models::{
        AdminBooking, Booking, BookingStatus, BookingWithCollege, CreateBookingRequest,
        UpdateBookingRequest, UpdateBookingStatusRequest,
    },
    repository::{BookingRepository, NewBooking},
};

/// Service layer for booking business logic
#[derive(Clone)]
pub struct BookingService {
    repository: BookingRepository,
}

impl BookingService {
    /// Create a new BookingService
    pub fn new(repository: BookingRepository) -> Self {
        Self { repository }
    }

    /// Create a booking for the caller
    ///
    /// 1. Checks that every required applicant field is present
    /// 2. Verifies the college exists
    /// 3. Creates the booking with status pending
    /// 4. Assembles the response with the college record
    pub async fn create_booking(
        &self,
        user_id: i32,
        request: CreateBookingRequest,
    ) -> Result<BookingWithCollege, BookingError> {
        let new_booking = NewBooking::from_request(&request).ok_or_else(|| {
            BookingError::ValidationError("All required fields must be provided".to_string())
        })?;

        if !self.repository.college_exists(new_booking.college_id).await? {
            return Err(BookingError::CollegeNotFound);
        }

        let booking = self.repository.create(user_id, new_booking).await?;
        tracing::info!("Created booking {} for user {}", booking.id, user_id);

        self.with_college(booking).await
    }

    /// The caller's bookings with their colleges, newest first
    pub async fn list_bookings(&self, user_id: i32) -> Result<Vec<BookingWithCollege>, BookingError> {
        let bookings = self.repository.find_by_user(user_id).await?;

        let mut assembled = Vec::with_capacity(bookings.len());
        for booking in bookings {
            assembled.push(self.with_college(booking).await?);
        }

        Ok(assembled)
    }

    /// A single booking owned by the caller
    pub async fn get_booking(
        &self,
        booking_id: i32,
        user_id: i32,
    ) -> Result<BookingWithCollege, BookingError> {
        let booking = self
            .repository
            .find_by_id_and_user(booking_id, user_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        self.with_college(booking).await
    }

    /// Merge given fields into a booking owned by the caller
    pub async fn update_booking(
        &self,
        booking_id: i32,
        user_id: i32,
        request: UpdateBookingRequest,
    ) -> Result<BookingWithCollege, BookingError> {
        let status = parse_status(request.status.as_deref())?;

        // Absent and not-owned are indistinguishable to the caller
        self.repository
            .find_by_id_and_user(booking_id, user_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        let updated = self.repository.update(booking_id, &request, status).await?;

        self.with_college(updated).await
    }

    /// Delete a booking owned by the caller
    pub async fn delete_booking(&self, booking_id: i32, user_id: i32) -> Result<(), BookingError> {
        let deleted = self
            .repository
            .delete_by_id_and_user(booking_id, user_id)
            .await?;

        if !deleted {
            return Err(BookingError::NotFound);
        }

        Ok(())
    }

    /// Every booking with college and owner, newest first. Callers hold any
    /// valid token; there is deliberately no role gate on this path.
    pub async fn list_all_bookings(&self) -> Result<Vec<AdminBooking>, BookingError> {
        let bookings = self.repository.find_all().await?;

        let mut assembled = Vec::with_capacity(bookings.len());
        for booking in bookings {
            assembled.push(self.with_college_and_user(booking).await?);
        }

        Ok(assembled)
    }

    /// Set any booking's status, regardless of owner
    pub async fn update_any_booking_status(
        &self,
        booking_id: i32,
        request: UpdateBookingStatusRequest,
    ) -> Result<AdminBooking, BookingError> {
        let status = parse_status(request.status.as_deref())?;

        self.repository
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        let updated = self.repository.update_status(booking_id, status).await?;

        self.with_college_and_user(updated).await
    }

    async fn with_college(&self, booking: Booking) -> Result<BookingWithCollege, BookingError> {
        let college = self
            .repository
            .find_college(booking.college_id)
            .await?
            .ok_or(BookingError::CollegeNotFound)?;

        Ok(BookingWithCollege { booking, college })
    }

    async fn with_college_and_user(&self, booking: Booking) -> Result<AdminBooking, BookingError> {
        let college = self
            .repository
            .find_college(booking.college_id)
            .await?
            .ok_or(BookingError::CollegeNotFound)?;

        let user = self
            .repository
            .find_user(booking.user_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        Ok(AdminBooking {
            booking,
            college,
            user: user.into(),
        })
    }
}

/// Parse an optional status string, rejecting anything outside the enum
fn parse_status(status: Option<&str>) -> Result<Option<BookingStatus>, BookingError> {
    match status {
        None => Ok(None),
        Some(value) => BookingStatus::parse(value)
            .map(Some)
            .map_err(|_| BookingError::InvalidStatus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_accepts_known_values() {
        assert_eq!(
            parse_status(Some("pending")).unwrap(),
            Some(BookingStatus::Pending)
        );
        assert_eq!(
            parse_status(Some("approved")).unwrap(),
            Some(BookingStatus::Approved)
        );
        assert_eq!(
            parse_status(Some("rejected")).unwrap(),
            Some(BookingStatus::Rejected)
        );
    }

    #[test]
    fn test_parse_status_absent_is_no_change() {
        assert_eq!(parse_status(None).unwrap(), None);
    }

    #[test]
    fn test_parse_status_rejects_unknown_values() {
        assert!(matches!(
            parse_status(Some("cancelled")),
            Err(BookingError::InvalidStatus)
        ));
        assert!(matches!(
            parse_status(Some("Pending")),
            Err(BookingError::InvalidStatus)
        ));
    }
}
