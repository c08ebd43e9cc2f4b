//! Shared helpers for backend integration tests.
//!
//! Suites that need PostgreSQL provision one temporary database per test on
//! the process-wide embedded cluster and migrate it with the same embedded
//! migrations the server runs at startup.

use std::thread;
use std::time::Duration;

use nzwalks_backend::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use tokio::runtime::Runtime;

const CLUSTER_RETRIES: usize = 5;
const CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns true when `SKIP_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// When `SKIP_TEST_CLUSTER` is truthy, prints a skip marker and returns `None`.
/// Otherwise panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Creates a fresh database on the shared cluster and applies migrations.
///
/// Cluster bootstrap is retried because the first start downloads binaries
/// and can fail transiently when several suites start together.
pub fn provision_migrated_database(runtime: &Runtime) -> Result<TemporaryDatabase, String> {
    let mut attempt = 1;
    let cluster = loop {
        match shared_cluster_handle() {
            Ok(handle) => break handle,
            Err(err) if attempt < CLUSTER_RETRIES => {
                eprintln!("embedded cluster attempt {attempt}/{CLUSTER_RETRIES} failed: {err:?}");
                thread::sleep(CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
            Err(err) => return Err(format!("start embedded cluster: {err:?}")),
        }
    };

    let db_name = format!("test_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(db_name.as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    let url = database.url().to_string();
    runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| format!("migrate: {err}"))?;
    Ok(database)
}
