pub(crate) mod batch;
pub(crate) mod cache;
pub(crate) mod compositor;
pub(crate) mod fingerprint;
pub(crate) mod layers;
