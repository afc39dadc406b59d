//! Password hashing and verification.
//!
//! Stored format: `base64(salt) + "." + base64(derived_key)` with a 16-byte
//! random salt and a 32-byte key derived via PBKDF2-HMAC-SHA512 at 100,000
//! iterations. Verification re-derives with identical parameters and
//! compares the raw key bytes in constant time.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;
const ITERATIONS: u32 = 100_000;

/// Hashes a plaintext password with a fresh random salt.
///
/// Two calls on the same plaintext produce different stored strings.
pub fn hash_password(plaintext: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let key = derive_key(plaintext.as_bytes(), &salt);
    format!("{}.{}", BASE64.encode(salt), BASE64.encode(key))
}

/// Verifies a plaintext password against a stored hash.
///
/// Returns false for malformed stored values rather than erroring; a
/// corrupt hash is indistinguishable from a wrong password to the caller.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    let Some((salt_b64, key_b64)) = stored.split_once('.') else {
        return false;
    };
    let Ok(salt) = BASE64.decode(salt_b64) else {
        return false;
    };
    let Ok(expected) = BASE64.decode(key_b64) else {
        return false;
    };
    if expected.len() != KEY_LEN {
        return false;
    }

    let derived = derive_key(plaintext.as_bytes(), &salt);
    derived.ct_eq(&expected).into()
}

/// PBKDF2 with an HMAC-SHA512 PRF.
///
/// A single SHA-512 block (64 bytes) covers the 32-byte output, so only
/// block index 1 is computed.
fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LEN] {
    let mut block = [0u8; 64];

    // U1 = PRF(password, salt || INT_BE(1))
    let mut mac = HmacSha512::new_from_slice(password).expect("HMAC accepts any key length");
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut u = mac.finalize().into_bytes();
    block.copy_from_slice(&u);

    for _ in 1..ITERATIONS {
        let mut mac = HmacSha512::new_from_slice(password).expect("HMAC accepts any key length");
        mac.update(&u);
        u = mac.finalize().into_bytes();
        for (b, x) in block.iter_mut().zip(u.iter()) {
            *b ^= x;
        }
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&block[..KEY_LEN]);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrips() {
        let stored = hash_password("abcdefg1");
        assert!(verify_password("abcdefg1", &stored));
    }

    #[test]
    fn wrong_plaintext_fails_verification() {
        let stored = hash_password("abcdefg1");
        assert!(!verify_password("abcdefg2", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn identical_inputs_produce_different_hashes() {
        let first = hash_password("abcdefg1");
        let second = hash_password("abcdefg1");
        assert_ne!(first, second);

        // Both still verify.
        assert!(verify_password("abcdefg1", &first));
        assert!(verify_password("abcdefg1", &second));
    }

    #[test]
    fn stored_format_has_two_base64_halves() {
        let stored = hash_password("abcdefg1");
        let (salt_b64, key_b64) = stored.split_once('.').unwrap();
        assert_eq!(BASE64.decode(salt_b64).unwrap().len(), SALT_LEN);
        assert_eq!(BASE64.decode(key_b64).unwrap().len(), KEY_LEN);
    }

    #[test]
    fn malformed_stored_values_never_verify() {
        assert!(!verify_password("abcdefg1", ""));
        assert!(!verify_password("abcdefg1", "no-separator"));
        assert!(!verify_password("abcdefg1", "not base64.not base64"));
        assert!(!verify_password("abcdefg1", "YWJj.YWJj")); // wrong key length
    }
}
