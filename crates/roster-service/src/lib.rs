//! # Roster Service
//!
//! Business logic service layer for Roster.
//! Turns repository outcomes into not-found and conflict errors and shapes
//! records into response DTOs.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
