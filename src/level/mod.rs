//! Level data model and the deterministic catalog generator.

pub(crate) mod catalog;
pub(crate) mod hints;
pub(crate) mod model;
