use rayon::prelude::*;

use crate::catalog::themes::ThemeRegistry;
use crate::compose::compositor::compose_avatar_with;
use crate::compose::layers::ComposedAvatar;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::geometry::provider::{GeometryProvider, ProceduralGeometry};
use crate::persona::model::PersonaConfig;

/// Batch composition options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOpts {
    /// Compose on a dedicated worker pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Compose many personas at one size, e.g. a follower list of thumbnails.
///
/// Output order matches `configs`, and each avatar equals what [`crate::compose_avatar`]
/// returns for the same input.
pub fn compose_batch(
    configs: &[PersonaConfig],
    registry: &ThemeRegistry,
    size: f64,
    opts: BatchOpts,
) -> AvatarResult<Vec<ComposedAvatar>> {
    compose_batch_with(&ProceduralGeometry, configs, registry, size, opts)
}

/// [`compose_batch`] with a caller-supplied geometry source.
#[tracing::instrument(skip(provider, configs, registry), fields(count = configs.len()))]
pub fn compose_batch_with(
    provider: &dyn GeometryProvider,
    configs: &[PersonaConfig],
    registry: &ThemeRegistry,
    size: f64,
    opts: BatchOpts,
) -> AvatarResult<Vec<ComposedAvatar>> {
    if !opts.parallel || configs.len() < 2 {
        check_threads(opts.threads)?;
        return Ok(configs
            .iter()
            .map(|c| compose_avatar_with(provider, c, registry, size))
            .collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "composing batch in parallel");
    Ok(pool.install(|| {
        configs
            .par_iter()
            .map(|c| compose_avatar_with(provider, c, registry, size))
            .collect()
    }))
}

fn check_threads(threads: Option<usize>) -> AvatarResult<()> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AvatarError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> AvatarResult<rayon::ThreadPool> {
    check_threads(threads)?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        AvatarError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/batch.rs"]
mod tests;
