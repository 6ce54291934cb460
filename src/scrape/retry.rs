// src/scrape/retry.rs

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Run `op` up to `retries` times with a fixed pause between attempts.
///
/// Succeeds on the first non-failing attempt. When every attempt fails,
/// the final error is returned unchanged. The wrapped operation's side
/// effects may repeat, so it must be safe to re-run until it succeeds.
/// `retries` counts total attempts; `op` always runs at least once.
pub async fn retry_with<T, E, F, Fut>(
    label: &str,
    retries: usize,
    delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) if attempt >= retries => return Err(e),
            Err(e) => {
                warn!(attempt, error = %e, "{label} failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TICK: Duration = Duration::from_millis(1);

    #[tokio::test]
    async fn succeeds_without_retrying() {
        let calls = AtomicUsize::new(0);
        let out: Result<u32, String> = retry_with("op", 3, TICK, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(7) }
        })
        .await;
        assert_eq!(out, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_on_first_non_failing_attempt() {
        let calls = AtomicUsize::new(0);
        let out: Result<u32, String> = retry_with("op", 3, TICK, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 1 { Err("transient".to_string()) } else { Ok(42) }
            }
        })
        .await;
        assert_eq!(out, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exhaustion_returns_last_error_unchanged() {
        let calls = AtomicUsize::new(0);
        let out: Result<u32, String> = retry_with("op", 3, TICK, || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("attempt {n}")) }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(out.unwrap_err(), "attempt 3");
    }

    #[tokio::test]
    async fn single_attempt_never_sleeps() {
        let calls = AtomicUsize::new(0);
        let out: Result<u32, String> = retry_with("op", 1, Duration::from_secs(3600), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("no".to_string()) }
        })
        .await;
        assert!(out.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
