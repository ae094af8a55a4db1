//! Full-scan byte comparison
//!
//! Once lengths match every byte is examined regardless of where the first
//! difference is. Length and presence are still decided up front; both are
//! public properties of a stored hash.

use super::{BytesComparer, presence};
use subtle::ConstantTimeEq;

/// Comparer backed by `subtle::ConstantTimeEq`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantTimeComparer;

impl BytesComparer for ConstantTimeComparer {
    #[inline]
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
        match presence(x, y) {
            Ok((a, b)) => a.ct_eq(b).into(),
            Err(decided) => decided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_reference_semantics() {
        let comparer = ConstantTimeComparer;
        let x: &[u8] = &[1, 2, 3];

        assert!(comparer.equals(None, None));
        assert!(comparer.equals(Some(x), Some(x)));
        assert!(comparer.equals(Some(&[1u8, 2, 3][..]), Some(&[1u8, 2, 3][..])));
        assert!(!comparer.equals(Some(&[1u8, 2, 3][..]), Some(&[1u8, 2][..])));
        assert!(!comparer.equals(Some(x), None));
        assert!(!comparer.equals(Some(&[1u8, 2, 3][..]), Some(&[1u8, 2, 4][..])));
    }
}
