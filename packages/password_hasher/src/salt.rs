//! Salt generation

use rand::RngCore;
use zeroize::Zeroizing;

/// Fill a fresh buffer of `len` bytes from the thread-local CSPRNG
///
/// `rand::rng()` is a per-thread generator reseeded from the OS, so
/// concurrent callers never share state.
#[must_use]
pub fn generate_salt(len: usize) -> Zeroizing<Vec<u8>> {
    let mut salt = Zeroizing::new(vec![0u8; len]);
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_length() {
        assert_eq!(generate_salt(8).len(), 8);
        assert_eq!(generate_salt(32).len(), 32);
        assert!(generate_salt(0).is_empty());
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(generate_salt(16).as_slice(), generate_salt(16).as_slice());
    }
}
