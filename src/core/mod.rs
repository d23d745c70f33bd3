//! Core utilities for the NBA stats application
//!
//! - `http`: Request headers expected by the stats provider
//! - `logging`: tracing subscriber setup
//! - `names`: free-text query normalisation

pub mod http;
pub mod logging;
pub mod names;

pub use http::{provider_header_map, resolve_user_agent};
pub use logging::init_tracing;
pub use names::{normalize_query, split_full_name};
