pub mod booking;
pub mod estimator;
pub mod home;

pub use booking::BookingSection;
pub use estimator::EstimatorSection;
pub use home::HomePage;
