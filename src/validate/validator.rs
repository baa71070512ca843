use crate::{
    foundation::core::{Point, Rect, is_measurable},
    geometry::target::target_point,
    level::model::{LevelDefinition, Method},
    validate::style::ComputedStyle,
    validate::surface::{ElementId, RenderSurface},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Verdict for one level against one rendered state.
pub struct ValidationResult {
    /// Id of the level that was checked.
    pub level_id: u32,
    /// Whether the required layout technique is in effect.
    pub method_satisfied: bool,
    /// Euclidean distance from the crate center to the target, in pixels.
    pub distance: f64,
    /// `method_satisfied && distance <= tolerance`.
    pub passed: bool,
    /// Status line for the player.
    pub message: String,
    /// Resolved target point.
    pub target: Point,
    /// Center of the crate's bounding box.
    pub crate_center: Point,
}

/// Corrective hint shown when the required technique is missing.
pub fn method_hint(method: Method) -> &'static str {
    match method {
        Method::Flex => "Make the arena a flex container.",
        Method::Grid => "Make the arena a grid container.",
        Method::Absolute => "Absolutely position the crate.",
    }
}

/// Whether the resolved styles use `method`.
pub fn method_satisfied(method: Method, stage: &ComputedStyle, crate_el: &ComputedStyle) -> bool {
    match method {
        Method::Flex => stage.is_flex_container(),
        Method::Grid => stage.is_grid_container(),
        Method::Absolute => crate_el.is_absolutely_positioned(),
    }
}

/// Check `level` against the rendered boxes and resolved styles.
///
/// Returns `None` (no verdict) when either box has no measurable geometry, e.g. before the
/// elements are mounted. Pure: identical inputs give identical results.
pub fn validate(
    level: &LevelDefinition,
    stage_box: Rect,
    crate_box: Rect,
    stage_style: &ComputedStyle,
    crate_style: &ComputedStyle,
) -> Option<ValidationResult> {
    if !is_measurable(stage_box) || !is_measurable(crate_box) {
        tracing::debug!(level = level.id, "geometry not measurable, no verdict");
        return None;
    }

    let method_ok = method_satisfied(level.method, stage_style, crate_style);

    let target = target_point(stage_box, level.position);
    let crate_center = crate_box.center();
    let distance = target.distance(crate_center);
    let close_enough = distance <= f64::from(level.tolerance);
    let passed = method_ok && close_enough;

    let message = if passed {
        format!("Nice! {} complete ✓", level.title)
    } else if !method_ok {
        method_hint(level.method).to_string()
    } else {
        format!(
            "Move the crate closer to {} (distance {distance:.1}px, need ≤ {}px).",
            level.position.label(),
            level.tolerance
        )
    };

    tracing::debug!(
        level = level.id,
        method_ok,
        distance,
        passed,
        "validated level"
    );

    Some(ValidationResult {
        level_id: level.id,
        method_satisfied: method_ok,
        distance,
        passed,
        message,
        target,
        crate_center,
    })
}

/// Query stage and crate from `surface` and [`validate`] the result.
///
/// Elements the surface cannot report yield no verdict.
#[tracing::instrument(skip(level, surface), fields(level = level.id))]
pub fn validate_surface(
    level: &LevelDefinition,
    surface: &dyn RenderSurface,
) -> Option<ValidationResult> {
    let stage_box = surface.bounding_box(ElementId::Stage)?;
    let crate_box = surface.bounding_box(ElementId::Crate)?;
    let stage_style = surface.resolved_style(ElementId::Stage)?;
    let crate_style = surface.resolved_style(ElementId::Crate)?;
    validate(level, stage_box, crate_box, &stage_style, &crate_style)
}

#[cfg(test)]
#[path = "../../tests/unit/validate/validator.rs"]
mod tests;
