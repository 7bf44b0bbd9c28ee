use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::persona::model::PersonaConfig;

const XXH3_SEED: u64 = 0x5e7a_a17a_c0de_b0a7;

/// Stable 128-bit digest of everything that can change a composed avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AvatarFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for AvatarFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint `config` rendered at `size`.
///
/// Hashes the raw persona fields, so two spellings of the same key (`"Afro"` and `"afro"`) get
/// different fingerprints even though they compose identically. The mask pattern, theme lighting
/// tag and `enabled` flag never affect geometry and are left out.
pub fn fingerprint(config: &PersonaConfig, size: f64) -> AvatarFingerprint {
    let mut h = StableHasher::new();
    h.write_f64(size);

    h.write_str(&config.mask.style);
    h.write_str(&config.mask.color);
    h.write_str(&config.hair.style);
    h.write_str(&config.hair.color);
    h.write_str(&config.outfit.kind);
    h.write_str(&config.outfit.color);
    h.write_str(&config.theme.name);
    // only consulted when the registry has no usable preset
    h.write_str(&config.theme.background);

    h.write_u64(config.accessories.len() as u64);
    for a in &config.accessories {
        h.write_str(&a.kind);
        h.write_str(&a.style);
        h.write_str(&a.color);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> AvatarFingerprint {
        let v = self.inner.digest128();
        AvatarFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fingerprint.rs"]
mod tests;
