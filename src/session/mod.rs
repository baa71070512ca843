//! Presentation-side play state: debounced validation, style binding, level progression.

pub(crate) mod debounce;
pub(crate) mod game;
pub(crate) mod style_binding;
