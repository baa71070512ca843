//! Stage geometry: anchor points the crate must reach.

pub(crate) mod target;
