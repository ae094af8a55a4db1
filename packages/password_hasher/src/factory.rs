//! Construction glue for applications
//!
//! Replaces container registration: the application loads or builds options
//! once and asks the factory for a ready hasher.

use crate::comparer::BytesComparer;
use crate::{AsyncPasswordHasher, HasherOptions, PasswordHasher, PasswordHashing, Result};
use std::sync::Arc;

/// Builds hashers from optional configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct HasherFactory {
    options: Option<HasherOptions>,
}

impl HasherFactory {
    /// Factory using default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory using `options`
    #[must_use]
    pub fn with_options(options: HasherOptions) -> Self {
        Self {
            options: Some(options),
        }
    }

    /// Factory using options read from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `HasherError::Config` if the document cannot be parsed.
    pub fn from_json_str(document: &str) -> Result<Self> {
        HasherOptions::from_json_str(document).map(Self::with_options)
    }

    /// Options the factory will build with
    #[must_use]
    pub fn options(&self) -> HasherOptions {
        self.options.unwrap_or_default()
    }

    /// Hasher with the default constant-time comparer
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of range.
    pub fn build(&self) -> Result<PasswordHasher> {
        PasswordHasher::from_options(self.options())
    }

    /// Hasher comparing keys with `comparer`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of range.
    pub fn build_with_comparer<C: BytesComparer>(&self, comparer: C) -> Result<PasswordHasher<C>> {
        PasswordHasher::new(self.options(), comparer)
    }

    /// Hasher behind the two-operation trait, ready to share across threads
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of range.
    pub fn build_shared(&self) -> Result<Arc<dyn PasswordHashing>> {
        let hasher: Arc<dyn PasswordHashing> = Arc::new(self.build()?);
        Ok(hasher)
    }

    /// Hasher that runs derivations on the tokio blocking pool
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of range.
    pub fn build_async(&self) -> Result<AsyncPasswordHasher> {
        Ok(AsyncPasswordHasher::new(self.build()?))
    }
}
