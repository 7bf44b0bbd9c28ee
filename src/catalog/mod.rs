pub(crate) mod keys;
pub(crate) mod styles;
pub(crate) mod themes;
