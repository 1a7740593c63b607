//! Core of the agenda interview scheduler.
//!
//! - `store` keeps the persisted appointment list
//! - `mirror` derives the calendar copy of that list after every change
//! - `calendar` groups mirrored events by day and lays out month grids
//! - `detail` formats a single day's appointments

pub mod appointment;
pub mod calendar;
pub mod config;
pub mod constants;
pub mod detail;
pub mod error;
pub mod mirror;
pub mod storage;
pub mod store;

pub use appointment::{Appointment, NewAppointment};
pub use error::{AgendaError, AgendaResult};
