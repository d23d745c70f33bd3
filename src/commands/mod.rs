//! Command implementations for the nba-stats CLI

pub mod admin;
pub mod common;
pub mod player_data;
pub mod search;
pub mod serve;
pub mod team_data;
