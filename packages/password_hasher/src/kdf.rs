//! PBKDF2-HMAC key derivation over the supported digests

use crate::HashAlgorithmKind;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

/// Derive `output_len` bytes from `password` and `salt`
///
/// Callers validate `iterations` beforehand; the hasher never passes zero.
#[must_use]
pub fn derive_key(
    algorithm: HashAlgorithmKind,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Zeroizing<Vec<u8>> {
    let mut output = Zeroizing::new(vec![0u8; output_len]);

    match algorithm {
        HashAlgorithmKind::Sha1 => {
            pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut output);
        }
        HashAlgorithmKind::Sha256 => {
            pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut output);
        }
        HashAlgorithmKind::Sha384 => {
            pbkdf2_hmac::<Sha384>(password, salt, iterations, &mut output);
        }
        HashAlgorithmKind::Sha512 => {
            pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut output);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 6070
    #[test]
    fn test_pbkdf2_hmac_sha1_vectors() {
        let one = derive_key(HashAlgorithmKind::Sha1, b"password", b"salt", 1, 20);
        assert_eq!(one.as_slice(), hex!("0c60c80f961f0e71f3a9b524af6012062fe037a6"));

        let two = derive_key(HashAlgorithmKind::Sha1, b"password", b"salt", 2, 20);
        assert_eq!(two.as_slice(), hex!("ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957"));

        let many = derive_key(HashAlgorithmKind::Sha1, b"password", b"salt", 4096, 20);
        assert_eq!(many.as_slice(), hex!("4b007901b765489abead49d926f721d065a429c1"));
    }

    #[test]
    fn test_pbkdf2_hmac_sha256_vectors() {
        let one = derive_key(HashAlgorithmKind::Sha256, b"password", b"salt", 1, 32);
        assert_eq!(
            one.as_slice(),
            hex!("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b")
        );

        let two = derive_key(HashAlgorithmKind::Sha256, b"password", b"salt", 2, 32);
        assert_eq!(
            two.as_slice(),
            hex!("ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43")
        );

        let many = derive_key(HashAlgorithmKind::Sha256, b"password", b"salt", 4096, 32);
        assert_eq!(
            many.as_slice(),
            hex!("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a")
        );
    }

    #[test]
    fn test_pbkdf2_hmac_sha384_vectors() {
        let one = derive_key(HashAlgorithmKind::Sha384, b"password", b"salt", 1, 48);
        assert_eq!(
            one.as_slice(),
            hex!(
                "c0e14f06e49e32d73f9f52ddf1d0c5c7191609233631dadd76a567db42b78676"
                "b38fc800cc53ddb642f5c74442e62be4"
            )
        );

        let many = derive_key(HashAlgorithmKind::Sha384, b"password", b"salt", 4096, 48);
        assert_eq!(
            many.as_slice(),
            hex!(
                "559726be38db125bc85ed7895f6e3cf574c7a01c080c3447db1e8a76764deb3c"
                "307b94853fbe424f6488c5f4f1289626"
            )
        );
    }

    #[test]
    fn test_pbkdf2_hmac_sha512_vectors() {
        let one = derive_key(HashAlgorithmKind::Sha512, b"password", b"salt", 1, 64);
        assert_eq!(
            one.as_slice(),
            hex!(
                "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252"
                "c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
            )
        );

        let two = derive_key(HashAlgorithmKind::Sha512, b"password", b"salt", 2, 64);
        assert_eq!(
            two.as_slice(),
            hex!(
                "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c"
                "f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
            )
        );
    }

    #[test]
    fn test_output_length_follows_request() {
        for kind in HashAlgorithmKind::ALL {
            let key = derive_key(kind, b"pw", b"saltsalt", 1, kind.hash_size());
            assert_eq!(key.len(), kind.hash_size());
        }
    }

    #[test]
    fn test_algorithms_diverge() {
        let sha384 = derive_key(HashAlgorithmKind::Sha384, b"pw", b"saltsalt", 2, 32);
        let sha512 = derive_key(HashAlgorithmKind::Sha512, b"pw", b"saltsalt", 2, 32);
        assert_ne!(sha384.as_slice(), sha512.as_slice());
    }
}
