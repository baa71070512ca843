use std::time::Duration;

use crate::{
    foundation::core::TimestampMs,
    foundation::error::{FlexPlayError, FlexPlayResult},
    level::catalog::{CANONICAL_LEVEL_COUNT, LevelCatalog},
    level::model::LevelDefinition,
    session::debounce::Debouncer,
    session::style_binding::{StyleBinding, StyleSheetHost},
    validate::surface::RenderSurface,
    validate::validator::{ValidationResult, validate_surface},
};

/// Idle window between the last edit and its validation.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Status shown before any level has been loaded.
pub const INITIAL_STATUS: &str = "Type CSS to solve the puzzle";

/// Options controlling a [`GameSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Idle window before an edit is validated.
    pub debounce: Duration,
    /// Number of levels generated by [`GameSession::mount`].
    pub level_count: usize,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            level_count: CANONICAL_LEVEL_COUNT,
        }
    }
}

impl SessionOpts {
    /// Defaults overridden by `FLEXPLAY_DEBOUNCE_MS` and `FLEXPLAY_LEVEL_COUNT`.
    ///
    /// Unset or unparseable variables keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let debounce = lookup("FLEXPLAY_DEBOUNCE_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map_or(defaults.debounce, Duration::from_millis);
        let level_count = lookup("FLEXPLAY_LEVEL_COUNT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(defaults.level_count);
        Self {
            debounce,
            level_count,
        }
    }
}

/// Mutable play state: current level, editor text, status line and completion flag.
///
/// The session owns the player's style binding; dropping the session removes the sheet from the
/// host. Validation runs only through [`GameSession::tick`] once the debounce window after the
/// latest edit has elapsed, or explicitly through [`GameSession::validate_now`].
pub struct GameSession<H: StyleSheetHost> {
    catalog: LevelCatalog,
    level_index: usize,
    binding: StyleBinding<H>,
    status: String,
    completed: bool,
    last_result: Option<ValidationResult>,
    pending: Debouncer<()>,
}

impl<H: StyleSheetHost> GameSession<H> {
    /// Mount a session over a generated catalog of `opts.level_count` levels.
    pub fn mount(host: H, opts: SessionOpts, now: TimestampMs) -> FlexPlayResult<Self> {
        let catalog = LevelCatalog::generate(opts.level_count);
        Self::mount_with_catalog(catalog, host, opts, now)
    }

    /// Mount a session over an explicit catalog, starting at the first level.
    #[tracing::instrument(skip(catalog, host, opts))]
    pub fn mount_with_catalog(
        catalog: LevelCatalog,
        host: H,
        opts: SessionOpts,
        now: TimestampMs,
    ) -> FlexPlayResult<Self> {
        let Some(first) = catalog.get(0) else {
            return Err(FlexPlayError::validation(
                "catalog must contain at least one level",
            ));
        };
        let binding = StyleBinding::acquire(host, &first.starter_css)?;
        let mut session = Self {
            catalog,
            level_index: 0,
            binding,
            status: INITIAL_STATUS.to_string(),
            completed: false,
            last_result: None,
            pending: Debouncer::new(opts.debounce),
        };
        session.load_level(0, now)?;
        Ok(session)
    }

    /// Apply new editor text and (re)start the debounce window.
    pub fn edit_css(&mut self, css: &str, now: TimestampMs) -> FlexPlayResult<()> {
        self.binding.apply(css)?;
        self.schedule_validation(now);
        Ok(())
    }

    /// Run the pending validation if its window has elapsed.
    ///
    /// Returns the verdict when a validation ran and the surface could be measured.
    pub fn tick(
        &mut self,
        now: TimestampMs,
        surface: &dyn RenderSurface,
    ) -> Option<ValidationResult> {
        self.pending.poll(now)?;
        tracing::debug!(level = self.current_level().id, at = now.0, "debounced validation fired");
        self.validate_now(surface)
    }

    /// Validate the current level immediately.
    ///
    /// Without a verdict (unmounted or zero-size elements) status and completion are left as
    /// they were.
    pub fn validate_now(&mut self, surface: &dyn RenderSurface) -> Option<ValidationResult> {
        let result = validate_surface(self.current_level(), surface)?;
        self.status.clone_from(&result.message);
        self.completed = result.passed;
        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Restore the current level's starter text and clear completion.
    pub fn reset_level(&mut self, now: TimestampMs) -> FlexPlayResult<()> {
        self.load_level(self.level_index, now)
    }

    /// Advance to the next level. Only allowed once the current level is complete.
    ///
    /// Returns whether the level changed.
    pub fn next_level(&mut self, now: TimestampMs) -> FlexPlayResult<bool> {
        if !self.completed {
            tracing::debug!(level = self.level_index + 1, "next level blocked, not complete");
            return Ok(false);
        }
        if self.level_index + 1 >= self.catalog.len() {
            return Ok(false);
        }
        self.load_level(self.level_index + 1, now)?;
        Ok(true)
    }

    /// Go back one level. Always allowed except on the first level.
    ///
    /// Returns whether the level changed.
    pub fn prev_level(&mut self, now: TimestampMs) -> FlexPlayResult<bool> {
        if self.level_index == 0 {
            return Ok(false);
        }
        self.load_level(self.level_index - 1, now)?;
        Ok(true)
    }

    fn load_level(&mut self, index: usize, now: TimestampMs) -> FlexPlayResult<()> {
        let level = self
            .catalog
            .get(index)
            .ok_or_else(|| FlexPlayError::validation(format!("no level at index {index}")))?;
        let starter = level.starter_css.clone();
        let status = format!("Goal: {}", level.description);
        tracing::info!(level = level.id, method = %level.method, position = %level.position, "level loaded");

        self.binding.apply(&starter)?;
        self.level_index = index;
        self.status = status;
        self.completed = false;
        self.last_result = None;
        self.schedule_validation(now);
        Ok(())
    }

    fn schedule_validation(&mut self, now: TimestampMs) {
        self.pending.schedule(now, ());
    }

    /// Level currently being played.
    pub fn current_level(&self) -> &LevelDefinition {
        // `level_index` is only ever set by `load_level`, which checks bounds.
        &self.catalog.levels()[self.level_index]
    }

    /// 0-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// The catalog being played.
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Current editor text.
    pub fn css(&self) -> &str {
        self.binding.text()
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the last verdict on this level was a pass.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Last verdict on this level, if any.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    /// When the pending validation fires, if one is pending.
    pub fn validation_due_at(&self) -> Option<TimestampMs> {
        self.pending.due_at()
    }

    /// Number of lines in the editor text.
    pub fn line_count(&self) -> usize {
        self.css().split('\n').count()
    }

    /// `Level {n} / {total}`.
    pub fn progress_label(&self) -> String {
        format!("Level {} / {}", self.level_index + 1, self.catalog.len())
    }

    /// `Goal: {where} • via {method}`.
    pub fn goal_label(&self) -> String {
        let level = self.current_level();
        format!("Goal: {} • via {}", level.position.label(), level.method)
    }

    /// Host holding the player's style sheet.
    pub fn host(&self) -> &H {
        self.binding.host()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/game.rs"]
mod tests;
