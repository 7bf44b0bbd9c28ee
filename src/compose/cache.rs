use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::themes::ThemeRegistry;
use crate::compose::compositor::compose_avatar;
use crate::compose::fingerprint::{AvatarFingerprint, fingerprint};
use crate::compose::layers::ComposedAvatar;
use crate::persona::model::PersonaConfig;

/// Caller-owned memo of composed avatars, keyed by [`AvatarFingerprint`].
///
/// Bound to one registry for its whole life. Purely an optimization: every hit returns exactly
/// what [`compose_avatar`] would.
///
/// A cache from [`AvatarCache::new`] grows without bound until [`AvatarCache::clear`]. Use
/// [`AvatarCache::with_limit`] for long-lived caches: when a miss would exceed the limit, every
/// entry is dropped before the new one is inserted.
#[derive(Debug)]
pub struct AvatarCache {
    registry: ThemeRegistry,
    limit: Option<usize>,
    entries: HashMap<AvatarFingerprint, Arc<ComposedAvatar>>,
    hits: u64,
    misses: u64,
}

impl AvatarCache {
    /// Empty cache composing against `registry`.
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            registry,
            limit: None,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Empty cache holding at most `limit` avatars (a zero limit is treated as one).
    pub fn with_limit(registry: ThemeRegistry, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(registry)
        }
    }

    /// Composed avatar for `config` at `size`, composing on first request.
    pub fn get_or_compose(&mut self, config: &PersonaConfig, size: f64) -> Arc<ComposedAvatar> {
        let key = fingerprint(config, size);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(hit);
        }
        self.misses += 1;
        tracing::trace!(fingerprint = %key, "avatar cache miss");
        let avatar = Arc::new(compose_avatar(config, &self.registry, size));
        if self.limit.is_some_and(|limit| self.entries.len() >= limit) {
            tracing::debug!(evicted = self.entries.len(), "avatar cache full, flushing");
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&avatar));
        avatar
    }

    /// Drop every entry; counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached avatars.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requests served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Requests that had to compose.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new(ThemeRegistry::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/cache.rs"]
mod tests;
