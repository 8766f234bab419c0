//! # Roster Repository
//!
//! Data access for the `users` table.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! SqliteUserRepository           (SQLx implementation)
//!   ↓  Arc<DatabasePool>
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
