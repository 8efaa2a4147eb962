use sqlx::PgPool;

use crate::auth::models::User;
use crate::bookings::{
    error::BookingError,
    models::{Booking, BookingStatus, CreateBookingRequest, UpdateBookingRequest},
};
use crate::models::College;

const BOOKING_COLUMNS: &str = "id, user_id, college_id, student_name, email, phone, course, \
     previous_education, grade, address, guardian_name, guardian_phone, status, \
     created_at, updated_at";

/// Fields required at creation, already presence-checked by the service
pub struct NewBooking<'a> {
    pub college_id: i32,
    pub student_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,
    pub previous_education: &'a str,
    pub grade: &'a str,
    pub address: &'a str,
    pub guardian_name: Option<&'a str>,
    pub guardian_phone: Option<&'a str>,
}

impl<'a> NewBooking<'a> {
    /// Destructure a create request whose required fields are all present
    pub fn from_request(request: &'a CreateBookingRequest) -> Option<Self> {
        Some(Self {
            college_id: request.college_id?,
            student_name: request.student_name.as_deref()?,
            email: request.email.as_deref()?,
            phone: request.phone.as_deref()?,
            course: request.course.as_deref()?,
            previous_education: request.previous_education.as_deref()?,
            grade: request.grade.as_deref()?,
            address: request.address.as_deref()?,
            guardian_name: request.guardian_name.as_deref(),
            guardian_phone: request.guardian_phone.as_deref(),
        })
    }
}

/// Repository for database operations on bookings
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new BookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a booking owned by a user, status pending
    pub async fn create(
        &self,
        user_id: i32,
        booking: NewBooking<'_>,
    ) -> Result<Booking, BookingError> {
        let created = sqlx::query_as::<_, Booking>(&format!(
            "INSERT INTO bookings (user_id, college_id, student_name, email, phone, course,
                                   previous_education, grade, address, guardian_name,
                                   guardian_phone, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'pending')
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(user_id)
        .bind(booking.college_id)
        .bind(booking.student_name)
        .bind(booking.email)
        .bind(booking.phone)
        .bind(booking.course)
        .bind(booking.previous_education)
        .bind(booking.grade)
        .bind(booking.address)
        .bind(booking.guardian_name)
        .bind(booking.guardian_phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Find a booking regardless of owner (admin paths)
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Find a booking owned by a specific user
    pub async fn find_by_id_and_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Booking>, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// All bookings owned by a user, newest first
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings
             WHERE user_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Every booking in the system, newest first (admin listing)
    pub async fn find_all(&self) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Apply present fields over an existing booking
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateBookingRequest,
        status: Option<BookingStatus>,
    ) -> Result<Booking, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "UPDATE bookings
             SET student_name = COALESCE($1, student_name),
                 email = COALESCE($2, email),
                 phone = COALESCE($3, phone),
                 course = COALESCE($4, course),
                 previous_education = COALESCE($5, previous_education),
                 grade = COALESCE($6, grade),
                 address = COALESCE($7, address),
                 guardian_name = COALESCE($8, guardian_name),
                 guardian_phone = COALESCE($9, guardian_phone),
                 status = COALESCE($10, status),
                 updated_at = NOW()
             WHERE id = $11
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(request.student_name.as_deref())
        .bind(request.email.as_deref())
        .bind(request.phone.as_deref())
        .bind(request.course.as_deref())
        .bind(request.previous_education.as_deref())
        .bind(request.grade.as_deref())
        .bind(request.address.as_deref())
        .bind(request.guardian_name.as_deref())
        .bind(request.guardian_phone.as_deref())
        .bind(status)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Set only the status (admin path)
    pub async fn update_status(
        &self,
        id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Booking, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "UPDATE bookings
             SET status = COALESCE($1, status), updated_at = NOW()
             WHERE id = $2
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Delete a booking owned by a specific user; reports whether a row went
    pub async fn delete_by_id_and_user(&self, id: i32, user_id: i32) -> Result<bool, BookingError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check if a college exists
    pub async fn college_exists(&self, college_id: i32) -> Result<bool, BookingError> {
        let exists: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM colleges WHERE id = $1)")
                .bind(college_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.unwrap_or(false))
    }

    /// Fetch a college record for response assembly
    pub async fn find_college(&self, college_id: i32) -> Result<Option<College>, BookingError> {
        let college = sqlx::query_as::<_, College>("SELECT * FROM colleges WHERE id = $1")
            .bind(college_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(college)
    }

    /// Fetch a booking's owner for response assembly (admin paths)
    pub async fn find_user(&self, user_id: i32) -> Result<Option<User>, BookingError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, phone, address, auth_provider,
                    created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
