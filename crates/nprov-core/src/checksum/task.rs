//! Async wrapper for the blocking checksum fetch.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{checksum_url, FetchOptions};

/// Cheap handle that can stop a running [`ChecksumTask`] from elsewhere,
/// e.g. a signal handler racing the task in a `select!`.
#[derive(Clone)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// A checksum computation running off the caller's thread.
///
/// Wraps the blocking fetch in `spawn_blocking` and carries the abort
/// token, so interactive callers can await the result or cancel the
/// transfer mid-flight.
pub struct ChecksumTask {
    abort: Arc<AtomicBool>,
    handle: tokio::task::JoinHandle<Result<String>>,
}

impl ChecksumTask {
    /// Start fetching and digesting `url` on the blocking pool.
    pub fn spawn(url: String, opts: FetchOptions) -> Self {
        let abort = Arc::new(AtomicBool::new(false));
        let token = Arc::clone(&abort);
        let handle = tokio::task::spawn_blocking(move || {
            tracing::debug!("computing checksum for {}", url);
            let result = checksum_url(&url, &opts, &token);
            match &result {
                Ok(digest) => tracing::info!("checksum for {}: {}", url, digest),
                Err(err) => tracing::error!("checksum for {} failed: {:#}", url, err),
            }
            result
        });
        Self { abort, handle }
    }

    /// Request cancellation. The transfer stops at the next received chunk;
    /// `join` then returns the `FetchAborted` error.
    pub fn cancel(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }

    /// Handle for cancelling after the task itself has been consumed.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle(Arc::clone(&self.abort))
    }

    /// Wait for the fetch to finish and return the digest.
    pub async fn join(self) -> Result<String> {
        self.handle.await.context("checksum task panicked")?
    }
}
