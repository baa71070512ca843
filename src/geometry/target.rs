use crate::{
    foundation::core::{Point, Rect},
    level::model::Position,
};

/// Gap between the stage border and the crate's outer edge at an edge anchor.
pub const STAGE_MARGIN_PX: f64 = 20.0;
/// Half of the crate's 80px side.
pub const CRATE_HALF_SIZE_PX: f64 = 40.0;
/// Distance from a stage edge to the crate center for every non-centered axis.
pub const ANCHOR_INSET_PX: f64 = STAGE_MARGIN_PX + CRATE_HALF_SIZE_PX;

/// Point inside `stage` the crate center must reach for `position`.
///
/// Edge anchors sit [`ANCHOR_INSET_PX`] in from the corresponding edge; centered axes use the
/// stage midpoint. The inset is a fixed constant and does not follow the actual crate size.
pub fn target_point(stage: Rect, position: Position) -> Point {
    let c = stage.center();
    let left = stage.x0 + ANCHOR_INSET_PX;
    let right = stage.x1 - ANCHOR_INSET_PX;
    let top = stage.y0 + ANCHOR_INSET_PX;
    let bottom = stage.y1 - ANCHOR_INSET_PX;

    match position {
        Position::Center => c,
        Position::TopLeft => Point::new(left, top),
        Position::TopRight => Point::new(right, top),
        Position::BottomLeft => Point::new(left, bottom),
        Position::BottomRight => Point::new(right, bottom),
        Position::LeftCenter => Point::new(left, c.y),
        Position::RightCenter => Point::new(right, c.y),
        Position::TopCenter => Point::new(c.x, top),
        Position::BottomCenter => Point::new(c.x, bottom),
    }
}

/// Lenient lookup by anchor name.
///
/// Unknown names resolve to the stage center, matching how the game has always behaved.
/// A typo therefore validates against the wrong target, so every fallback is logged; prefer
/// parsing into [`Position`] up front.
pub fn target_point_named(stage: Rect, name: &str) -> Point {
    match name.parse::<Position>() {
        Ok(position) => target_point(stage, position),
        Err(_) => {
            tracing::warn!(anchor = name, "unknown anchor name, falling back to center");
            stage.center()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/target.rs"]
mod tests;
