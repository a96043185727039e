//! Configuration values.
//!
//! - [`MAX_LENGTH`] - Largest buffer the allocator accepts
//! - [`BenchConfig`] - What the hash benchmark runs and on which input
//!
//! # Example
//!
//! ```
//! use nodebuf::config::BenchConfig;
//! use nodebuf::hash::{Algorithm, Backend};
//!
//! let config = BenchConfig::new("data.bin")
//!     .with_backend(Backend::Portable)
//!     .with_algorithm(Algorithm::Sha3_256);
//!
//! assert_eq!(config.algorithm(), Algorithm::Sha3_256);
//! assert!(config.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};

use crate::error::HashError;
use crate::hash::{Algorithm, Backend};

/// Largest length, in bytes, a buffer may be allocated with (4 GiB - 1).
pub const MAX_LENGTH: usize = u32::MAX as usize;

/// Algorithm used when none is configured.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Sha256;

/// Configuration for one benchmark run.
///
/// Built either with the builder methods or from command line arguments via
/// [`BenchConfig::from_args`]. The builders do not validate; call
/// [`BenchConfig::validate`] before running.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchConfig {
    backend: Backend,
    algorithm: Algorithm,
    input: PathBuf,
}

impl BenchConfig {
    /// Creates a configuration hashing `input` with the default backend and
    /// [`DEFAULT_ALGORITHM`].
    ///
    /// The default backend is native when compiled in, portable otherwise.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let backend = if Backend::Native.is_available() {
            Backend::Native
        } else {
            Backend::Portable
        };
        Self {
            backend,
            algorithm: DEFAULT_ALGORITHM,
            input: input.into(),
        }
    }

    /// Parses `<backend> <algorithm> <input-file>` positional arguments.
    ///
    /// Returns `Ok(None)` when fewer than three arguments are given. Extra
    /// arguments are ignored.
    ///
    /// # Errors
    ///
    /// [`HashError::UnknownBackend`] or [`HashError::UnknownAlgorithm`] for
    /// names neither backend knows.
    ///
    /// # Example
    ///
    /// ```
    /// use nodebuf::config::BenchConfig;
    /// use nodebuf::hash::{Algorithm, Backend};
    ///
    /// let config = BenchConfig::from_args(["portable", "md5", "in.bin"])?.unwrap();
    /// assert_eq!(config.backend(), Backend::Portable);
    /// assert_eq!(config.algorithm(), Algorithm::Md5);
    ///
    /// assert!(BenchConfig::from_args(["portable", "md5"])?.is_none());
    /// # Ok::<(), nodebuf::HashError>(())
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Option<Self>, HashError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let (Some(backend), Some(algorithm), Some(input)) = (args.next(), args.next(), args.next())
        else {
            return Ok(None);
        };

        let backend: Backend = backend.as_ref().parse()?;
        let algorithm: Algorithm = algorithm.as_ref().parse()?;
        Ok(Some(
            Self::new(input.as_ref())
                .with_backend(backend)
                .with_algorithm(algorithm),
        ))
    }

    /// Sets the backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the input file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Returns the backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns the algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the input file.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Checks that the configured backend is compiled in.
    pub fn validate(&self) -> Result<(), HashError> {
        if self.backend.is_available() {
            Ok(())
        } else {
            Err(HashError::BackendUnavailable(self.backend))
        }
    }
}
