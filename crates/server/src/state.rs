use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use appmeta::{Store, ValidRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard};

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// The catalog. Creates take the write lock so the title check and the
    /// append happen as one step; searches share the read lock.
    store: RwLock<Store>,

    /// Request counters reported by `/metrics`
    pub counters: Counters,
}

/// Monotonic request counters.
#[derive(Debug, Default)]
pub struct Counters {
    pub creates_accepted: AtomicU64,
    pub creates_rejected: AtomicU64,
    pub searches: AtomicU64,
}

/// Point-in-time copy of [`Counters`] plus the store size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CountersSnapshot {
    pub records_stored: usize,
    pub creates_accepted: u64,
    pub creates_rejected: u64,
    pub searches: u64,
}

impl ServerState {
    /// Create new server state with an empty catalog
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: RwLock::new(Store::new()),
            counters: Counters::default(),
        }
    }

    /// Insert a validated record, rejecting duplicate titles.
    pub fn insert(&self, record: ValidRecord) -> ServerResult<()> {
        let result = self
            .store
            .write()
            .map_err(|_| ServerError::Internal("catalog lock poisoned".into()))?
            .insert(record);

        match result {
            Ok(()) => {
                self.counters.creates_accepted.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(err) => {
                self.counters.creates_rejected.fetch_add(1, Ordering::Relaxed);
                Err(err.into())
            }
        }
    }

    /// Read access to the catalog. Hold the guard only as long as needed.
    pub fn read_store(&self) -> ServerResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| ServerError::Internal("catalog lock poisoned".into()))
    }

    pub fn record_rejected_create(&self) {
        self.counters.creates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.counters.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ServerResult<CountersSnapshot> {
        Ok(CountersSnapshot {
            records_stored: self.read_store()?.len(),
            creates_accepted: self.counters.creates_accepted.load(Ordering::Relaxed),
            creates_rejected: self.counters.creates_rejected.load(Ordering::Relaxed),
            searches: self.counters.searches.load(Ordering::Relaxed),
        })
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub records_stored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use appmeta::{validate, ApplicationRecord, Maintainer};

    fn valid(title: &str) -> ValidRecord {
        validate(ApplicationRecord {
            title: title.into(),
            version: "0.0.1".into(),
            maintainers: vec![Maintainer::new("X", "x@x.com")],
            company: "c".into(),
            website: "w".into(),
            source: "s".into(),
            license: "l".into(),
            description: "d".into(),
        })
        .unwrap()
    }

    #[test]
    fn counters_track_inserts() {
        let state = ServerState::new(ServerConfig::default());
        state.insert(valid("A")).unwrap();
        assert!(matches!(
            state.insert(valid("A")),
            Err(ServerError::Conflict(t)) if t == "A"
        ));
        state.record_search();

        let snap = state.snapshot().unwrap();
        assert_eq!(
            snap,
            CountersSnapshot {
                records_stored: 1,
                creates_accepted: 1,
                creates_rejected: 1,
                searches: 1,
            }
        );
    }
}
