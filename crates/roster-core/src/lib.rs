//! # Roster Core
//!
//! Core types, traits, and error definitions for Roster.
//! Every other crate in the workspace builds on the error type, the typed
//! user id and the `User` entity defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
