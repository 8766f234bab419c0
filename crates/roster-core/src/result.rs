//! Result type alias.

use crate::RosterError;

/// Result type used across all layers of Roster.
pub type RosterResult<T> = Result<T, RosterError>;
