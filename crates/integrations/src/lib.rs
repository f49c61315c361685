//! # Scheduler Integrations
//!
//! Seams to the third-party systems the scheduler talks to: a calendar that
//! knows which slots are free and records bookings, and a mailer that notifies
//! guests. Each seam is a trait so the HTTP layer never depends on a concrete
//! provider; the fixture implementations here answer from hardcoded data and
//! never leave the process.

pub mod calendar;
pub mod email;

pub mod mock;

pub use calendar::{CalendarProvider, FixtureCalendar};
pub use email::{FixtureMailer, NotificationProvider};
