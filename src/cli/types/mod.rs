//! Type-safe wrappers for NBA identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, TeamId, UserId};
pub use time::Season;

#[cfg(test)]
mod tests;
