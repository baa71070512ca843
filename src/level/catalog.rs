use crate::{
    foundation::error::{FlexPlayError, FlexPlayResult},
    level::hints::hint_comment,
    level::model::{LevelDefinition, Method, Position},
};

/// Number of levels in the shipped catalog.
pub const CANONICAL_LEVEL_COUNT: usize = 69;
/// First index (0-based) that requires grid.
pub const GRID_PHASE_START: usize = 23;
/// First index (0-based) that requires absolute positioning.
pub const ABSOLUTE_PHASE_START: usize = 46;

/// Tolerance of the first level, in pixels.
pub const INITIAL_TOLERANCE_PX: u32 = 12;
/// Tolerance never drops below this many pixels.
pub const MIN_TOLERANCE_PX: u32 = 3;
/// Tolerance shrinks by one pixel every this many levels.
pub const TOLERANCE_STEP_LEVELS: usize = 8;

/// Anchor for the level at 0-based `index`; cycles through [`Position::ALL`].
pub fn position_for_index(index: usize) -> Position {
    Position::ALL[index % Position::ALL.len()]
}

/// Required method for the level at 0-based `index`.
///
/// Phase boundaries are fixed, so catalogs shorter than [`GRID_PHASE_START`] contain only
/// flex levels.
pub fn method_for_index(index: usize) -> Method {
    if index < GRID_PHASE_START {
        Method::Flex
    } else if index < ABSOLUTE_PHASE_START {
        Method::Grid
    } else {
        Method::Absolute
    }
}

/// `max(12 - floor(index / 8), 3)`.
pub fn tolerance_for_index(index: usize) -> u32 {
    let steps = u32::try_from(index / TOLERANCE_STEP_LEVELS).unwrap_or(u32::MAX);
    INITIAL_TOLERANCE_PX
        .saturating_sub(steps)
        .max(MIN_TOLERANCE_PX)
}

/// Editor text a level starts with: goal comment, hint comment, empty rule blocks.
pub fn starter_css(id: u32, method: Method, position: Position) -> String {
    format!(
        "/* Level {id} — Goal: move the crate to {where_} using {method}. */\n{hint}\n\n\
/* Write your CSS below. You can target .stage and .crate */\n\
.stage {{\n  /* your styles */\n}}\n\
.crate {{\n  /* optional crate styles */\n}}",
        where_ = position.label(),
        hint = hint_comment(method, position),
    )
}

/// Build the level at 0-based `index`.
pub fn level_at(index: usize) -> LevelDefinition {
    let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
    let position = position_for_index(index);
    let method = method_for_index(index);
    LevelDefinition {
        id,
        title: format!("Level {id}"),
        description: format!(
            "Move the crate to {} using {method}.",
            position.label()
        ),
        position,
        method,
        tolerance: tolerance_for_index(index),
        starter_css: starter_css(id, method, position),
    }
}

/// Generate `count` levels in order. Pure: equal inputs give equal outputs.
#[tracing::instrument]
pub fn generate_levels(count: usize) -> Vec<LevelDefinition> {
    (0..count).map(level_at).collect()
}

/// Ordered, immutable list of levels.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<LevelDefinition>", into = "Vec<LevelDefinition>")]
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    /// Catalog of `count` generated levels.
    pub fn generate(count: usize) -> Self {
        Self {
            levels: generate_levels(count),
        }
    }

    /// The shipped 69-level catalog.
    pub fn canonical() -> Self {
        Self::generate(CANONICAL_LEVEL_COUNT)
    }

    /// Wrap explicitly provided levels, checking ids are `1..=n` in order.
    pub fn from_levels(levels: Vec<LevelDefinition>) -> FlexPlayResult<Self> {
        for (idx, level) in levels.iter().enumerate() {
            if usize::try_from(level.id).ok() != Some(idx + 1) {
                return Err(FlexPlayError::validation(format!(
                    "level at index {idx} has id {}, expected {}",
                    level.id,
                    idx + 1
                )));
            }
            if level.tolerance == 0 {
                return Err(FlexPlayError::validation(format!(
                    "level {} must have a positive tolerance",
                    level.id
                )));
            }
        }
        Ok(Self { levels })
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the catalog holds no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at 0-based `index`.
    pub fn get(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index)
    }

    /// Level by 1-based id.
    pub fn by_id(&self, id: u32) -> Option<&LevelDefinition> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.levels.get(idx)
    }

    /// All levels in order.
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }
}

impl TryFrom<Vec<LevelDefinition>> for LevelCatalog {
    type Error = FlexPlayError;

    fn try_from(levels: Vec<LevelDefinition>) -> Result<Self, Self::Error> {
        Self::from_levels(levels)
    }
}

impl From<LevelCatalog> for Vec<LevelDefinition> {
    fn from(catalog: LevelCatalog) -> Self {
        catalog.levels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/level/catalog.rs"]
mod tests;
