//! This is the documentation for bizseconds
//!
//! A small HTTP service that counts *business seconds*: whole seconds falling
//! on a weekday, inside the fixed daily business window, and not on an
//! observed South African public holiday.

pub mod scheduling;
pub mod server;
