//! # Scheduler Core
//!
//! Domain types shared by the scheduler crates: time slots, bookings, email
//! records, payload schemas and the error taxonomy.

pub mod errors;
pub mod models;
pub mod schema;

pub use errors::{SchedulerError, SchedulerResult};
