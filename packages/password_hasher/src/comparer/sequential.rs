//! Early-exit byte comparison
//!
//! Stops at the first differing byte, so its running time reveals where two
//! sequences diverge. Do not use it to compare secrets such as derived keys
//! where an attacker can measure response times; [`ConstantTimeComparer`]
//! is the hasher default.
//!
//! [`ConstantTimeComparer`]: super::ConstantTimeComparer

use super::{BytesComparer, presence};

/// Comparer that returns on the first mismatching byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesEqualityComparer;

impl BytesComparer for BytesEqualityComparer {
    fn equals(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> bool {
        let (a, b) = match presence(x, y) {
            Ok(pair) => pair,
            Err(decided) => return decided,
        };

        for (left, right) in a.iter().zip(b) {
            if left != right {
                return false;
            }
        }
        true
    }
}
