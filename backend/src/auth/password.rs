//! One-way password digest.
//!
//! Passwords are never stored or compared in the clear; everything goes
//! through this digest, stored as lowercase hex.

use sha2::{Digest, Sha256};

pub fn digest(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_hex() {
        let d = digest("secret-password");
        assert_eq!(d, digest("secret-password"));
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_passwords_differ() {
        assert_ne!(digest("one"), digest("two"));
    }
}
