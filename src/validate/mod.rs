//! Solution checking against a rendered stage and crate.

pub(crate) mod style;
pub(crate) mod surface;
pub(crate) mod validator;
