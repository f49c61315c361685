/// Slot listing for a week
pub mod availability;
/// Booking creation
pub mod booking;
