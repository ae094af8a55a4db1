//! Hasher configuration
//!
//! `HasherOptions` selects the algorithm and carries the salt size and
//! iteration count. The hash size is never set directly: it always follows
//! the algorithm. Setters accept any value; [`HasherOptions::layout`] and the
//! [`PasswordHasher`](crate::PasswordHasher) constructor reject values below
//! the minimums.

use crate::encoding::HashLayout;
use crate::{HashAlgorithmKind, HasherError, Result};
use serde::{Deserialize, Serialize};

/// Smallest salt size accepted by the hasher, in bytes
pub const MIN_SALT_SIZE: i32 = 8;

/// Smallest iteration count accepted by the hasher
pub const MIN_ITERATIONS: i32 = 1;

/// Algorithm selection plus salt and cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OptionsDocument", into = "OptionsDocument")]
pub struct HasherOptions {
    algorithm: HashAlgorithmKind,
    hash_size: usize,
    salt_size: i32,
    iterations: i32,
}

impl HasherOptions {
    /// Options for `algorithm` with its default salt size and iterations
    #[must_use]
    pub fn new(algorithm: HashAlgorithmKind) -> Self {
        Self::with_overrides(algorithm, None, None)
    }

    /// Options for `algorithm`, overriding the defaults where given
    #[must_use]
    pub fn with_overrides(
        algorithm: HashAlgorithmKind,
        salt_size: Option<i32>,
        iterations: Option<i32>,
    ) -> Self {
        let params = algorithm.params();
        Self {
            algorithm,
            hash_size: params.hash_size,
            salt_size: salt_size.unwrap_or(params.default_salt_size),
            iterations: iterations.unwrap_or(params.default_iterations),
        }
    }

    /// Load options from a JSON document
    ///
    /// Missing `salt_size` and `iterations` fall back to the algorithm's
    /// defaults, a missing `algorithm` means SHA256.
    ///
    /// # Errors
    ///
    /// Returns `HasherError::Config` if the document is not valid JSON or
    /// names an unsupported algorithm.
    pub fn from_json_str(document: &str) -> Result<Self> {
        let options = serde_json::from_str(document)?;
        Ok(options)
    }

    /// Serialize options to a JSON document
    ///
    /// # Errors
    ///
    /// Returns `HasherError::Config` if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switch algorithm; salt size and iterations are kept
    pub fn set_algorithm(&mut self, algorithm: HashAlgorithmKind) {
        self.algorithm = algorithm;
        self.hash_size = algorithm.hash_size();
    }

    /// Override the salt size in bytes
    pub fn set_salt_size(&mut self, salt_size: i32) {
        self.salt_size = salt_size;
    }

    /// Override the iteration count
    pub fn set_iterations(&mut self, iterations: i32) {
        self.iterations = iterations;
    }

    /// Builder form of [`set_algorithm`](Self::set_algorithm)
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithmKind) -> Self {
        self.set_algorithm(algorithm);
        self
    }

    /// Builder form of [`set_salt_size`](Self::set_salt_size)
    #[must_use]
    pub fn with_salt_size(mut self, salt_size: i32) -> Self {
        self.set_salt_size(salt_size);
        self
    }

    /// Builder form of [`set_iterations`](Self::set_iterations)
    #[must_use]
    pub fn with_iterations(mut self, iterations: i32) -> Self {
        self.set_iterations(iterations);
        self
    }

    /// Selected algorithm
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithmKind {
        self.algorithm
    }

    /// Derived key length in bytes, fixed by the algorithm
    #[must_use]
    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// Salt length in bytes
    #[must_use]
    pub fn salt_size(&self) -> i32 {
        self.salt_size
    }

    /// PBKDF2 rounds
    #[must_use]
    pub fn iterations(&self) -> i32 {
        self.iterations
    }

    /// Byte layout of hashes produced with these options
    ///
    /// # Errors
    ///
    /// Returns `HasherError::InvalidSaltSize` if the salt size is below
    /// [`MIN_SALT_SIZE`].
    pub fn layout(&self) -> Result<HashLayout> {
        let salt_size = validated_salt_size(self.salt_size)?;
        Ok(HashLayout::new(self.hash_size, salt_size))
    }
}

fn validated_salt_size(salt_size: i32) -> Result<usize> {
    let invalid = || HasherError::InvalidSaltSize {
        actual: salt_size,
        minimum: MIN_SALT_SIZE,
    };
    if salt_size < MIN_SALT_SIZE {
        return Err(invalid());
    }
    usize::try_from(salt_size).map_err(|_| invalid())
}

pub(crate) fn validated_iterations(iterations: i32) -> Result<u32> {
    let invalid = || HasherError::InvalidIterations {
        actual: iterations,
        minimum: MIN_ITERATIONS,
    };
    if iterations < MIN_ITERATIONS {
        return Err(invalid());
    }
    u32::try_from(iterations).map_err(|_| invalid())
}

impl Default for HasherOptions {
    fn default() -> Self {
        Self::new(HashAlgorithmKind::default())
    }
}

/// Serialized shape of [`HasherOptions`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct OptionsDocument {
    #[serde(default)]
    algorithm: HashAlgorithmKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hash_size: Option<usize>,
    #[serde(default)]
    salt_size: Option<i32>,
    #[serde(default)]
    iterations: Option<i32>,
}

impl From<OptionsDocument> for HasherOptions {
    // hash_size is informational only and always re-derived
    fn from(doc: OptionsDocument) -> Self {
        Self::with_overrides(doc.algorithm, doc.salt_size, doc.iterations)
    }
}

impl From<HasherOptions> for OptionsDocument {
    fn from(options: HasherOptions) -> Self {
        Self {
            algorithm: options.algorithm,
            hash_size: Some(options.hash_size),
            salt_size: Some(options.salt_size),
            iterations: Some(options.iterations),
        }
    }
}
