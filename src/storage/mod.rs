//! Storage layer for the NBA stats application
//!
//! A SQLite record store that is only ever touched through named procedures,
//! organized into logical components:
//! - `models`: Data structures and the `Outcome` result type
//! - `schema`: Connection, schema and team seed data
//! - `procedures`: The fixed procedure catalogue and its call helpers
//! - `queries`: Lookups and aggregated views
//! - `mutations`: All-or-nothing player and user writes
//! - `analysis`: Per-game average computation

pub mod analysis;
pub mod models;
pub mod mutations;
pub mod procedures;
pub mod queries;
pub mod schema;


// Re-export the main types and store handle for easy access
pub use models::*;
pub use procedures::Procedure;
pub use schema::RecordStore;
