pub mod error;
pub mod handlers;
pub mod models;
pub mod rating_calculator;
pub mod repository;
pub mod service;

pub use error::ReviewError;
pub use models::Review;
pub use rating_calculator::RatingCalculator;
pub use repository::ReviewRepository;
pub use service::ReviewService;
