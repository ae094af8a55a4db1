//! # Password Hasher
//!
//! Salted, iterated PBKDF2 password hashing with a stable storage format.
//!
//! ## Features
//!
//! - **Algorithms**: PBKDF2 with HMAC-SHA1, SHA256, SHA384 or SHA512
//! - **Safe defaults**: salt size and iteration count derived from the algorithm
//! - **Portable output**: base64 of `derived key || salt`, verifiable by any PBKDF2 implementation
//! - **Constant-time verification** by default
//! - **Async**: derivations offloaded to the tokio blocking pool
//!
//! ## Quick Start
//!
//! ```rust
//! use password_hasher::{HashAlgorithmKind, HasherOptions, PasswordHasher};
//!
//! # fn main() -> password_hasher::Result<()> {
//! let options = HasherOptions::new(HashAlgorithmKind::Sha256).with_iterations(16);
//! let hasher = PasswordHasher::from_options(options)?;
//!
//! let stored = hasher.hash_password("my password");
//! assert_eq!(stored.len(), 64);
//! assert!(hasher.verify_hashed_password(&stored, "my password")?);
//! assert!(!hasher.verify_hashed_password(&stored, "not my password")?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithm;
pub mod async_result;
pub mod comparer;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod hasher;
pub mod kdf;
pub mod logging;
pub mod options;
pub mod salt;

// Re-export core types
pub use algorithm::{AlgorithmParams, HashAlgorithmKind};
pub use async_result::{AsyncPasswordHasher, AsyncPasswordResult};
pub use comparer::{BytesComparer, BytesEqualityComparer, ConstantTimeComparer};
pub use encoding::{EncodedHash, HashLayout};
pub use error::{HasherError, Result};
pub use factory::HasherFactory;
pub use hasher::{PasswordHasher, PasswordHashing};
pub use options::{HasherOptions, MIN_ITERATIONS, MIN_SALT_SIZE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BytesComparer, HashAlgorithmKind, HasherError, HasherFactory, HasherOptions,
        PasswordHasher, PasswordHashing, Result,
    };
}
