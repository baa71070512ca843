//! FlexPlay is the engine behind a CSS layout game.
//!
//! The player edits live CSS for a `.stage` container so that its single `.crate` child lands on
//! a target anchor using a required layout technique (flexbox, grid, or absolute positioning).
//!
//! # Engine overview
//!
//! 1. **Generate**: `count -> Vec<LevelDefinition>` ([`generate_levels`]), a pure function with
//!    three method phases and a tolerance that tightens every eight levels.
//! 2. **Resolve**: `stage box + Position -> Point` ([`target_point`]).
//! 3. **Validate**: `level + boxes + resolved styles -> ValidationResult` ([`validate`]), or no
//!    verdict while the elements have no measurable geometry.
//! 4. **Play** (optional): [`GameSession`] owns the editor text, a scoped [`StyleBinding`], the
//!    debounced validation and level progression.
//!
//! The rendering surface is never touched directly: callers implement [`RenderSurface`] and
//! [`StyleSheetHost`] (or use [`SurfaceSnapshot`] / [`InMemoryStyleHost`] in tests).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod level;
mod session;
mod validate;

pub use foundation::core::{Point, Rect, TimestampMs, is_measurable, parse_rect};
pub use foundation::error::{FlexPlayError, FlexPlayResult};
pub use geometry::target::{
    ANCHOR_INSET_PX, CRATE_HALF_SIZE_PX, STAGE_MARGIN_PX, target_point, target_point_named,
};
pub use level::catalog::{
    ABSOLUTE_PHASE_START, CANONICAL_LEVEL_COUNT, GRID_PHASE_START, INITIAL_TOLERANCE_PX,
    LevelCatalog, MIN_TOLERANCE_PX, TOLERANCE_STEP_LEVELS, generate_levels, level_at,
    method_for_index, position_for_index, starter_css, tolerance_for_index,
};
pub use level::hints::hint_comment;
pub use level::model::{LevelDefinition, Method, Position};
pub use session::debounce::Debouncer;
pub use session::game::{DEFAULT_DEBOUNCE, GameSession, INITIAL_STATUS, SessionOpts};
pub use session::style_binding::{InMemoryStyleHost, SheetId, StyleBinding, StyleSheetHost};
pub use validate::style::ComputedStyle;
pub use validate::surface::{ElementId, ElementSnapshot, RenderSurface, SurfaceSnapshot};
pub use validate::validator::{
    ValidationResult, method_hint, method_satisfied, validate, validate_surface,
};
