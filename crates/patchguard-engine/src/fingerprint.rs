//! Content digest computation
//!
//! The fingerprint is a SHA-1 hex digest over the UTF-8 source text,
//! exactly as extracted. It is deliberately sensitive to cosmetic edits:
//! any whitespace or comment change upstream produces a new digest and
//! forces human review of the corresponding patch.

use sha1::{Digest, Sha1};

/// SHA-1 hex digest of a source text
pub fn sha1_hex(source: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(source.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn digest_is_pure() {
        let source = "def merge(self, other_config):\n    return Config()\n";
        assert_eq!(sha1_hex(source), sha1_hex(source));
    }

    #[test]
    fn single_character_change_alters_digest() {
        let a = "def merge(self, other_config):\n    return Config()\n";
        let b = "def merge(self, other_confik):\n    return Config()\n";
        assert_ne!(sha1_hex(a), sha1_hex(b));
    }
}
