use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::clock::Clock;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Timestamp source for `createdAt`/`updatedAt`. Swapped for a manual
    /// clock in tests.
    pub clock: Arc<dyn Clock>,
    /// Every mutation is a whole-record read-modify-write; mutating handlers
    /// hold this lock for the duration of the operation so writers never
    /// interleave. Read-only handlers do not take it.
    pub write_lock: Arc<Mutex<()>>,
}
