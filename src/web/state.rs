//! Application state shared across handlers

use std::sync::Arc;
use std::time::Instant;

use crate::{QueryResolver, RecordStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    resolver: QueryResolver,
    started: Instant,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                resolver: QueryResolver::new(store),
                started: Instant::now(),
            }),
        }
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.inner.resolver
    }

    pub fn store(&self) -> &RecordStore {
        self.inner.resolver.store()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started.elapsed().as_secs()
    }
}
