//! Password hashing and verification

use crate::comparer::{BytesComparer, ConstantTimeComparer};
use crate::encoding::{EncodedHash, HashLayout};
use crate::options::validated_iterations;
use crate::{HashAlgorithmKind, HasherError, HasherOptions, Result, kdf, salt};
use tracing::{debug, trace, warn};

/// Two-operation contract consumed by applications
pub trait PasswordHashing: Send + Sync {
    /// Hash `password` with a fresh random salt, returning the storable string
    fn hash_password(&self, password: &str) -> String;

    /// Check `provided_password` against a string produced by `hash_password`
    ///
    /// # Errors
    ///
    /// Returns `HasherError::MalformedHash` if `hashed_password` is not valid
    /// base64. A wrong password or a hash of another layout is `Ok(false)`.
    fn verify_hashed_password(&self, hashed_password: &str, provided_password: &str)
        -> Result<bool>;
}

/// PBKDF2 password hasher
///
/// Options are validated once by the constructor and never change, so a
/// `PasswordHasher` can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct PasswordHasher<C = ConstantTimeComparer> {
    options: HasherOptions,
    algorithm: HashAlgorithmKind,
    layout: HashLayout,
    iterations: u32,
    comparer: C,
}

impl PasswordHasher<ConstantTimeComparer> {
    /// Hasher with default options and the constant-time comparer
    ///
    /// # Errors
    ///
    /// Never fails for the built-in defaults; kept fallible to share the
    /// validation path of [`new`](Self::new).
    pub fn with_defaults() -> Result<Self> {
        Self::from_options(HasherOptions::default())
    }

    /// Hasher for `options` using the constant-time comparer
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn from_options(options: HasherOptions) -> Result<Self> {
        Self::new(options, ConstantTimeComparer)
    }
}

impl<C: BytesComparer> PasswordHasher<C> {
    /// Validate `options` and build a hasher comparing keys with `comparer`
    ///
    /// # Errors
    ///
    /// - `HasherError::InvalidSaltSize` if the salt size is below 8 bytes
    /// - `HasherError::InvalidIterations` if the iteration count is below 1
    pub fn new(options: HasherOptions, comparer: C) -> Result<Self> {
        let layout = options.layout()?;
        let iterations = validated_iterations(options.iterations())?;
        let algorithm = options.algorithm();

        debug!(
            algorithm = %algorithm,
            salt_size = layout.salt_size,
            iterations,
            "password hasher configured"
        );

        Ok(Self {
            options,
            algorithm,
            layout,
            iterations,
            comparer,
        })
    }

    /// Hash `password` with a fresh random salt
    #[must_use]
    pub fn hash_password(&self, password: &str) -> String {
        let salt = salt::generate_salt(self.layout.salt_size);
        self.encode_with_salt(password, &salt)
    }

    /// Hash `password` with a caller-provided salt
    ///
    /// Output is deterministic for a given salt. Prefer
    /// [`hash_password`](Self::hash_password) outside of tests and migrations.
    ///
    /// # Errors
    ///
    /// Returns `HasherError::SaltLengthMismatch` if `salt` is not exactly the
    /// configured salt size.
    pub fn hash_password_with_salt(&self, password: &str, salt: &[u8]) -> Result<String> {
        if salt.len() != self.layout.salt_size {
            return Err(HasherError::SaltLengthMismatch {
                expected: self.layout.salt_size,
                actual: salt.len(),
            });
        }
        Ok(self.encode_with_salt(password, salt))
    }

    /// Check `provided_password` against a stored hash
    ///
    /// # Errors
    ///
    /// Returns `HasherError::MalformedHash` if `hashed_password` is not valid
    /// base64. A mismatch of password or layout is `Ok(false)`.
    pub fn verify_hashed_password(
        &self,
        hashed_password: &str,
        provided_password: &str,
    ) -> Result<bool> {
        let stored = match EncodedHash::decode(hashed_password, self.layout) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!(
                    expected_len = self.layout.total_len(),
                    "stored hash does not match the configured layout"
                );
                return Ok(false);
            }
            Err(e) => {
                warn!(error = %e, "stored hash is not valid base64");
                return Err(e);
            }
        };

        let derived = kdf::derive_key(
            self.algorithm,
            provided_password.as_bytes(),
            stored.salt(),
            self.iterations,
            self.layout.hash_size,
        );

        let matched = self
            .comparer
            .equals(Some(stored.hash()), Some(derived.as_slice()));
        trace!(algorithm = %self.algorithm, matched, "password verified");
        Ok(matched)
    }

    /// Length in characters of every string produced by this hasher
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.layout.encoded_len()
    }

    /// Options this hasher was built from
    #[must_use]
    pub fn options(&self) -> &HasherOptions {
        &self.options
    }

    /// Comparer used during verification
    #[must_use]
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    fn encode_with_salt(&self, password: &str, salt: &[u8]) -> String {
        let derived = kdf::derive_key(
            self.algorithm,
            password.as_bytes(),
            salt,
            self.iterations,
            self.layout.hash_size,
        );
        trace!(algorithm = %self.algorithm, "password hashed");
        EncodedHash::compose(&derived, salt).encode()
    }
}

impl<C: BytesComparer> PasswordHashing for PasswordHasher<C> {
    fn hash_password(&self, password: &str) -> String {
        PasswordHasher::hash_password(self, password)
    }

    fn verify_hashed_password(
        &self,
        hashed_password: &str,
        provided_password: &str,
    ) -> Result<bool> {
        PasswordHasher::verify_hashed_password(self, hashed_password, provided_password)
    }
}
