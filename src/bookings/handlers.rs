// HTTP handlers for booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::bookings::{
    error::BookingError,
    models::{
        AdminBooking, BookingMessageResponse, BookingWithCollege, CreateBookingRequest,
        UpdateBookingRequest, UpdateBookingStatusRequest,
    },
};
use crate::AppState;

/// The caller's bookings, college-joined
/// GET /api/bookings
pub async fn get_bookings_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<BookingWithCollege>>, BookingError> {
    let bookings = state.booking_service.list_bookings(user.user_id).await?;
    Ok(Json(bookings))
}

/// A single booking owned by the caller
/// GET /api/bookings/:id
pub async fn get_booking_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<i32>,
) -> Result<Json<BookingWithCollege>, BookingError> {
    let booking = state
        .booking_service
        .get_booking(booking_id, user.user_id)
        .await?;
    Ok(Json(booking))
}

/// Create a booking for the caller
/// POST /api/bookings
pub async fn create_booking_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingMessageResponse<BookingWithCollege>>), BookingError> {
    let booking = state
        .booking_service
        .create_booking(user.user_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingMessageResponse {
            message: "Booking created successfully".to_string(),
            booking: Some(booking),
        }),
    ))
}

/// Merge fields into a booking owned by the caller
/// PUT /api/bookings/:id
pub async fn update_booking_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<i32>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<BookingMessageResponse<BookingWithCollege>>, BookingError> {
    let booking = state
        .booking_service
        .update_booking(booking_id, user.user_id, request)
        .await?;

    Ok(Json(BookingMessageResponse {
        message: "Booking updated successfully".to_string(),
        booking: Some(booking),
    }))
}

/// Delete a booking owned by the caller
/// DELETE /api/bookings/:id
pub async fn delete_booking_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<i32>,
) -> Result<Json<BookingMessageResponse<BookingWithCollege>>, BookingError> {
    state
        .booking_service
        .delete_booking(booking_id, user.user_id)
        .await?;

    Ok(Json(BookingMessageResponse {
        message: "Booking deleted successfully".to_string(),
        booking: None,
    }))
}

/// Every booking in the system (any valid token; no role gate)
/// GET /api/admin/bookings
pub async fn admin_get_bookings_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<AdminBooking>>, BookingError> {
    let bookings = state.booking_service.list_all_bookings().await?;
    Ok(Json(bookings))
}

/// Set any booking's status (any valid token; no role gate)
/// PUT /api/admin/bookings/:id
pub async fn admin_update_booking_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(booking_id): Path<i32>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingMessageResponse<AdminBooking>>, BookingError> {
    let booking = state
        .booking_service
        .update_any_booking_status(booking_id, request)
        .await?;

    Ok(Json(BookingMessageResponse {
        message: "Booking status updated successfully".to_string(),
        booking: Some(booking),
    }))
}
