//! Dual Executor
//!
//! Fan-out/fan-in for the listing read path: the fetch and the count are
//! polled concurrently and joined before returning.

use futures::future::try_join;
use std::future::Future;

/// Run a fetch and a count concurrently and return both results together.
///
/// The first failure wins: the other future is dropped (cancelled) and no
/// partial result is surfaced. An empty population is `(vec![], 0)`, not an
/// error.
pub async fn fetch_with_count<T, E, F, C>(fetch: F, count: C) -> Result<(Vec<T>, i64), E>
where
    F: Future<Output = Result<Vec<T>, E>>,
    C: Future<Output = Result<i64, E>>,
{
    try_join(fetch, count).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_returns_rows_and_total_together() {
        let result: Result<_, String> = fetch_with_count(
            async { Ok(vec!["Laptop", "Lamp"]) },
            async { Ok(2) },
        )
        .await;

        assert_eq!(result, Ok((vec!["Laptop", "Lamp"], 2)));
    }

    #[tokio::test]
    async fn test_empty_population_is_success() {
        let result: Result<(Vec<u8>, i64), String> =
            fetch_with_count(async { Ok(vec![]) }, async { Ok(0) }).await;

        assert_eq!(result, Ok((vec![], 0)));
    }

    #[tokio::test]
    async fn test_both_branches_run_concurrently() {
        // Each branch waits for the other to have started; sequential
        // execution would never finish.
        let fetch_started = Arc::new(tokio::sync::Notify::new());
        let count_started = Arc::new(tokio::sync::Notify::new());

        let fetch = {
            let (mine, theirs) = (fetch_started.clone(), count_started.clone());
            async move {
                mine.notify_one();
                theirs.notified().await;
                Ok::<_, String>(vec![1, 2, 3])
            }
        };
        let count = {
            let (mine, theirs) = (count_started.clone(), fetch_started.clone());
            async move {
                mine.notify_one();
                theirs.notified().await;
                Ok::<_, String>(3)
            }
        };

        let result = tokio::time::timeout(Duration::from_secs(5), fetch_with_count(fetch, count))
            .await
            .expect("fetch and count must overlap");

        assert_eq!(result, Ok((vec![1, 2, 3], 3)));
    }

    #[tokio::test]
    async fn test_count_failure_discards_rows() {
        let result = fetch_with_count(
            async { Ok(vec!["Laptop"]) },
            async { Err::<i64, _>("count failed".to_string()) },
        )
        .await;

        assert_eq!(result, Err("count failed".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_failure_cancels_pending_count() {
        let count_finished = Arc::new(AtomicBool::new(false));
        let flag = count_finished.clone();

        let result = fetch_with_count(
            async { Err::<Vec<u8>, _>("fetch failed".to_string()) },
            async move {
                tokio::time::sleep(Duration::from_secs(30)).await;
                flag.store(true, Ordering::SeqCst);
                Ok(1)
            },
        )
        .await;

        assert_eq!(result, Err("fetch failed".to_string()));
        assert!(!count_finished.load(Ordering::SeqCst));
    }
}
