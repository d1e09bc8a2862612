//! Frame extraction and the per-frame half-res downscale.

pub(crate) mod downscale;
pub(crate) mod extract;
