//! Stored hash format
//!
//! An encoded hash is standard padded base64 of `derived key || salt`, derived
//! key first. Nothing else is stored: the algorithm and iteration count come
//! from the options used to verify, so a layout change makes old hashes fail
//! verification instead of decoding into the wrong split.

use crate::Result;
use base64::{Engine as _, engine::general_purpose};
use zeroize::Zeroizing;

/// Byte sizes of the two parts of an encoded hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashLayout {
    /// Derived key length in bytes
    pub hash_size: usize,
    /// Salt length in bytes
    pub salt_size: usize,
}

impl HashLayout {
    /// Create a layout
    #[must_use]
    pub const fn new(hash_size: usize, salt_size: usize) -> Self {
        Self {
            hash_size,
            salt_size,
        }
    }

    /// Decoded length in bytes
    #[must_use]
    pub const fn total_len(&self) -> usize {
        self.hash_size + self.salt_size
    }

    /// Encoded length in base64 characters
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.total_len().div_ceil(3) * 4
    }
}

/// Decoded `derived key || salt` bytes
pub struct EncodedHash {
    bytes: Zeroizing<Vec<u8>>,
    layout: HashLayout,
}

impl EncodedHash {
    /// Concatenate a derived key and its salt
    #[must_use]
    pub fn compose(derived: &[u8], salt: &[u8]) -> Self {
        let mut bytes = Zeroizing::new(Vec::with_capacity(derived.len() + salt.len()));
        bytes.extend_from_slice(derived);
        bytes.extend_from_slice(salt);
        Self {
            bytes,
            layout: HashLayout::new(derived.len(), salt.len()),
        }
    }

    /// Decode a stored hash for `layout`
    ///
    /// Returns `Ok(None)` when the decoded length does not match the layout.
    ///
    /// # Errors
    ///
    /// Returns `HasherError::MalformedHash` if `encoded` is not valid base64.
    pub fn decode(encoded: &str, layout: HashLayout) -> Result<Option<Self>> {
        let bytes = Zeroizing::new(general_purpose::STANDARD.decode(encoded)?);
        if bytes.len() != layout.total_len() {
            return Ok(None);
        }
        Ok(Some(Self { bytes, layout }))
    }

    /// Base64 form for storage
    #[must_use]
    pub fn encode(&self) -> String {
        general_purpose::STANDARD.encode(self.bytes.as_slice())
    }

    /// Derived key part
    #[must_use]
    pub fn hash(&self) -> &[u8] {
        &self.bytes[..self.layout.hash_size]
    }

    /// Salt part
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.bytes[self.layout.hash_size..]
    }

    /// Sizes of both parts
    #[must_use]
    pub fn layout(&self) -> HashLayout {
        self.layout
    }
}

impl std::fmt::Debug for EncodedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedHash")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
