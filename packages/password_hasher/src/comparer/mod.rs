//! Byte sequence equality used when checking a derived key
//!
//! Both comparers share the same presence rules: the same slice is equal to
//! itself, two absent sequences are equal, an absent and a present sequence
//! are not, and sequences of different length are not. They differ only in
//! how the bytes of equal-length sequences are scanned.

pub mod constant_time;
pub mod sequential;

pub use constant_time::ConstantTimeComparer;
pub use sequential::BytesEqualityComparer;

use base64::{Engine as _, engine::general_purpose};
use std::sync::Arc;
use twox_hash::XxHash64;

/// Equality over optional byte sequences
pub trait BytesComparer: Send + Sync {
    /// True when both sequences are equal
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> bool;

    /// Bucket code derived from the base64 form of `bytes`
    ///
    /// Equal sequences always produce equal codes.
    fn hash_code(&self, bytes: &[u8]) -> u64 {
        let encoded = general_purpose::STANDARD.encode(bytes);
        XxHash64::oneshot(0, encoded.as_bytes())
    }
}

/// Outcome decided without looking at the bytes, if any
///
/// Returns the two slices when they have equal length and still need a scan.
pub(crate) fn presence<'a>(
    x: Option<&'a [u8]>,
    y: Option<&'a [u8]>,
) -> Result<(&'a [u8], &'a [u8]), bool> {
    match (x, y) {
        (None, None) => Err(true),
        (Some(_), None) | (None, Some(_)) => Err(false),
        (Some(a), Some(b)) if std::ptr::eq(a, b) => Err(true),
        (Some(a), Some(b)) if a.len() != b.len() => Err(false),
        (Some(a), Some(b)) => Ok((a, b)),
    }
}

impl<C: BytesComparer + ?Sized> BytesComparer for Box<C> {
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
        (**self).equals(x, y)
    }

    fn hash_code(&self, bytes: &[u8]) -> u64 {
        (**self).hash_code(bytes)
    }
}

impl<C: BytesComparer + ?Sized> BytesComparer for Arc<C> {
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
        (**self).equals(x, y)
    }

    fn hash_code(&self, bytes: &[u8]) -> u64 {
        (**self).hash_code(bytes)
    }
}
