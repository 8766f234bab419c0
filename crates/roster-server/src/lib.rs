//! # Roster Server Library
//!
//! Wiring for the Roster server binary: database bootstrap, application
//! assembly and startup logging.

pub mod app;
pub mod bootstrap;
pub mod startup;
