//! Hash benchmark driver.
//!
//! Reads an input file into a [`ByteBuffer`], hashes it once and reports how
//! long the hashing took. File reading and provider creation are not timed.

use std::fmt;
use std::time::{Duration, Instant};

use crate::buffer::ByteBuffer;
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::hash::{self, Algorithm, Backend, HashDigest};

/// Outcome of one timed hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    /// Backend that computed the digest.
    pub backend: Backend,
    /// Algorithm that was timed.
    pub algorithm: Algorithm,
    /// Number of input bytes hashed.
    pub bytes: usize,
    /// Wall time spent in `update` and `digest`.
    pub elapsed: Duration,
    /// The computed digest.
    pub digest: HashDigest,
}

impl BenchReport {
    /// Elapsed time in milliseconds with three decimals, e.g. `12.345ms`.
    pub fn elapsed_millis(&self) -> String {
        format!("{:.3}ms", self.elapsed.as_secs_f64() * 1000.0)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hash: {}", self.elapsed_millis())
    }
}

/// Runs the benchmark described by `config`.
///
/// # Errors
///
/// [`BenchError::Hash`] if the backend is unavailable and
/// [`BenchError::Io`] if the input cannot be read.
pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;
    let data = ByteBuffer::from(std::fs::read(config.input())?);
    tracing::debug!(
        input = %config.input().display(),
        bytes = data.len(),
        "loaded benchmark input"
    );
    time_hash(config.backend(), config.algorithm(), &data)
}

/// Times every algorithm of `backend` over the same input, in
/// [`Algorithm::ALL`] order.
pub fn run_suite(backend: Backend, data: &ByteBuffer) -> Result<Vec<BenchReport>, BenchError> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| time_hash(backend, algorithm, data))
        .collect()
}

/// Hashes `data` once and measures it.
pub fn time_hash(
    backend: Backend,
    algorithm: Algorithm,
    data: &ByteBuffer,
) -> Result<BenchReport, BenchError> {
    let mut provider = hash::create_provider(backend, algorithm)?;

    let start = Instant::now();
    provider.update_buffer(data);
    let digest = provider.digest();
    let elapsed = start.elapsed();

    tracing::debug!(%backend, %algorithm, bytes = data.len(), ?elapsed, "hashed input");
    Ok(BenchReport {
        backend,
        algorithm,
        bytes: data.len(),
        elapsed,
        digest,
    })
}
