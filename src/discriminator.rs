use sha2::{Digest, Sha256};

pub const DISCRIMINATOR_LEN: usize = 8;

/// First 8 bytes of SHA-256("account:<Name>"), the derivation the program's
/// IDL tooling applies to account struct names. The per-account constants in
/// this crate are authoritative; tests verify them against this derivation.
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(b"account:");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}
