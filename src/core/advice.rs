use sha2::{Digest, Sha256};

/// Collapse all whitespace runs so that reflowed advice text keeps the same
/// fingerprint.
pub fn canonicalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// SHA-256 hex digest of the canonicalized advice text.
pub fn hash_advice(text: &str) -> String {
    format!("{:x}", Sha256::digest(canonicalize(text).as_bytes()))
}
