//! Hash algorithm selection and its fixed parameter table

use crate::HasherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Underlying hash for the PBKDF2 pseudorandom function
///
/// Discriminants are part of the stored configuration format. `1` was MD5 and
/// stays reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum HashAlgorithmKind {
    /// HMAC-SHA1
    Sha1 = 2,
    /// HMAC-SHA256
    #[default]
    Sha256 = 3,
    /// HMAC-SHA384
    Sha384 = 4,
    /// HMAC-SHA512
    Sha512 = 5,
}

/// Fixed sizes and cost defaults for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmParams {
    /// Derived key length in bytes, equal to the digest size
    pub hash_size: usize,
    /// Salt length in bytes used unless overridden
    pub default_salt_size: i32,
    /// PBKDF2 rounds used unless overridden
    pub default_iterations: i32,
}

const SHA1_PARAMS: AlgorithmParams = AlgorithmParams {
    hash_size: 20,
    default_salt_size: 10,
    default_iterations: 1024,
};

const SHA256_PARAMS: AlgorithmParams = AlgorithmParams {
    hash_size: 32,
    default_salt_size: 16,
    default_iterations: 8192,
};

const SHA384_PARAMS: AlgorithmParams = AlgorithmParams {
    hash_size: 48,
    default_salt_size: 24,
    default_iterations: 10240,
};

const SHA512_PARAMS: AlgorithmParams = AlgorithmParams {
    hash_size: 64,
    default_salt_size: 32,
    default_iterations: 10240,
};

impl HashAlgorithmKind {
    /// Every supported algorithm, weakest first
    pub const ALL: [Self; 4] = [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Parameter row for this algorithm
    #[must_use]
    pub const fn params(self) -> AlgorithmParams {
        match self {
            Self::Sha1 => SHA1_PARAMS,
            Self::Sha256 => SHA256_PARAMS,
            Self::Sha384 => SHA384_PARAMS,
            Self::Sha512 => SHA512_PARAMS,
        }
    }

    /// Derived key length in bytes
    #[must_use]
    pub const fn hash_size(self) -> usize {
        self.params().hash_size
    }

    /// Canonical name, as written in configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Look up an algorithm by its stored discriminant
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Self::Sha1),
            3 => Some(Self::Sha256),
            4 => Some(Self::Sha384),
            5 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Stored discriminant
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HashAlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithmKind {
    type Err = HasherError;

    /// Accepts `SHA256`, `sha256` and `SHA-256` spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(HasherError::unsupported_algorithm(s)),
        }
    }
}

impl TryFrom<String> for HashAlgorithmKind {
    type Error = HasherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithmKind> for String {
    fn from(kind: HashAlgorithmKind) -> Self {
        kind.name().to_string()
    }
}
