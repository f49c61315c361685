pub mod booking;
pub mod email;
pub mod slot;
