pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::BookingError;
pub use models::{Booking, BookingStatus};
pub use repository::BookingRepository;
pub use service::BookingService;
