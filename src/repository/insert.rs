use std::future::Future;

use tracing::warn;

use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::util::record_id::generate_record_id;

/// Attempts before a run of identifier collisions is reported as a failure.
pub const MAX_ID_ATTEMPTS: u32 = 5;

/// Run `insert` with a freshly generated id, drawing a new one whenever the
/// primary key is already taken. The table constraint is the only check.
pub async fn insert_with_fresh_id<T, F, Fut>(table: &str, mut insert: F) -> RepositoryResult<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = RepositoryResult<T>>,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        match insert(generate_record_id()).await {
            Err(RepositoryError::AlreadyExists(msg)) => {
                warn!(table, attempt, "Record id collision, regenerating: {}", msg);
            }
            other => return other,
        }
    }
    Err(RepositoryError::already_exists(format!(
        "Could not allocate a unique {} id after {} attempts",
        table, MAX_ID_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_retries_on_collision() {
        let calls = AtomicU32::new(0);
        let result = insert_with_fresh_id("quotes", |id| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(RepositoryError::already_exists("taken"))
                } else {
                    Ok(id)
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: RepositoryResult<String> = insert_with_fresh_id("invoices", |_id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(RepositoryError::already_exists("taken")) }
        })
        .await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists(_))));
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ID_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: RepositoryResult<String> = insert_with_fresh_id("reservations", |_id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(RepositoryError::database("disk full")) }
        })
        .await;
        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
