use super::*;
use crate::catalog::keys::HairStyle;
use crate::foundation::core::Rgb8;

#[test]
fn second_request_is_a_hit_with_the_same_arc() {
    let mut cache = AvatarCache::default();
    let config = PersonaConfig::default();
    let a = cache.get_or_compose(&config, 96.0);
    let b = cache.get_or_compose(&config, 96.0);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!((cache.hits(), cache.misses()), (1, 1));
    assert_eq!(*a, compose_avatar(&config, ThemeRegistry::builtin(), 96.0));
}

#[test]
fn different_inputs_miss() {
    let mut cache = AvatarCache::new(*ThemeRegistry::builtin());
    let config = PersonaConfig::default();
    cache.get_or_compose(&config, 96.0);
    cache.get_or_compose(&config, 48.0);
    cache.get_or_compose(&config.clone().with_hair(HairStyle::Bun, Rgb8::BLACK), 96.0);
    assert_eq!(cache.len(), 3);
    assert_eq!((cache.hits(), cache.misses()), (0, 3));
}

#[test]
fn clear_keeps_counters() {
    let mut cache = AvatarCache::default();
    cache.get_or_compose(&PersonaConfig::default(), 96.0);
    cache.clear();
    assert!(cache.is_empty());
    cache.get_or_compose(&PersonaConfig::default(), 96.0);
    assert_eq!(cache.misses(), 2);
}

#[test]
fn unbounded_cache_keeps_every_entry() {
    let mut cache = AvatarCache::default();
    for size in 1..=16 {
        cache.get_or_compose(&PersonaConfig::default(), f64::from(size));
    }
    assert_eq!(cache.len(), 16);
}

#[test]
fn limited_cache_flushes_when_full() {
    let mut cache = AvatarCache::with_limit(*ThemeRegistry::builtin(), 2);
    let config = PersonaConfig::default();
    cache.get_or_compose(&config, 32.0);
    cache.get_or_compose(&config, 64.0);
    assert_eq!(cache.len(), 2);
    let third = cache.get_or_compose(&config, 128.0);
    assert_eq!(cache.len(), 1);
    assert!(Arc::ptr_eq(&third, &cache.get_or_compose(&config, 128.0)));
    assert_eq!((cache.hits(), cache.misses()), (1, 3));
}

#[test]
fn zero_limit_still_caches_one_avatar() {
    let mut cache = AvatarCache::with_limit(*ThemeRegistry::builtin(), 0);
    let config = PersonaConfig::default();
    cache.get_or_compose(&config, 32.0);
    cache.get_or_compose(&config, 32.0);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}
