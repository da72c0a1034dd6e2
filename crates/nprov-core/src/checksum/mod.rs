//! Remote package checksum.
//!
//! Streams the package bytes through a SHA-1 digest from the curl write
//! callback, so nothing is buffered, and encodes the result URL-safe
//! without padding. Any failure (malformed URL, network, non-2xx) yields an
//! error and no digest; there is no retry.

mod task;

pub use task::{AbortHandle, ChecksumTask};

use anyhow::{Context, Result};
use data_encoding::BASE64URL_NOPAD;
use sha1::{Digest, Sha1};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Timeouts for the package fetch, normally taken from the config file.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(3600),
        }
    }
}

/// Error returned when the fetch is stopped through the abort token.
#[derive(Debug)]
pub struct FetchAborted;

impl std::fmt::Display for FetchAborted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checksum fetch aborted")
    }
}

impl std::error::Error for FetchAborted {}

/// Digest a byte slice the same way the fetch path does.
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    BASE64URL_NOPAD.encode(hasher.finalize().as_slice())
}

/// Fetch `url` and return the encoded digest of its body, in stream order.
///
/// Follows redirects. Blocks on network I/O; call from `spawn_blocking`
/// (or use [`ChecksumTask`]) when on an async runtime. The abort token is
/// checked as body bytes arrive; setting it fails the fetch with
/// [`FetchAborted`].
pub fn checksum_url(url: &str, opts: &FetchOptions, abort: &Arc<AtomicBool>) -> Result<String> {
    let parsed = url::Url::parse(url).with_context(|| format!("invalid URL: {}", url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("unsupported URL scheme: {}", parsed.scheme());
    }

    let hasher = Arc::new(Mutex::new(Sha1::new()));

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    {
        let hasher = Arc::clone(&hasher);
        let abort_cb = Arc::clone(abort);
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| {
            if abort_cb.load(Ordering::Relaxed) {
                return Ok(0); // abort transfer
            }
            hasher.lock().unwrap().update(data);
            Ok(data.len())
        })?;
        let perform = transfer.perform();
        if abort.load(Ordering::Relaxed) {
            return Err(FetchAborted.into());
        }
        perform.with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    let digest = hasher.lock().unwrap().finalize_reset();
    Ok(BASE64URL_NOPAD.encode(digest.as_slice()))
}
