use std::time::Duration;

use crate::foundation::error::{FlexPlayError, FlexPlayResult};

pub use kurbo::{Point, Rect};

/// Milliseconds on the caller's monotonic clock.
///
/// The engine never reads a clock itself; the presentation layer passes the current
/// time into every time-dependent call so debounce behavior stays deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    /// Timestamp `delay` after `self`, saturating at `u64::MAX`.
    pub fn after(self, delay: Duration) -> Self {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is in the future).
    pub fn since(self, earlier: TimestampMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// True when a rendered box has finite coordinates and a non-zero area.
///
/// Boxes of unmounted or collapsed elements report zero size; they carry no usable geometry.
pub fn is_measurable(rect: Rect) -> bool {
    let finite = rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite();
    finite && rect.width() > 0.0 && rect.height() > 0.0
}

/// Parse `"x0,y0,x1,y1"` into a rectangle.
pub fn parse_rect(s: &str) -> FlexPlayResult<Rect> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FlexPlayError::validation(format!("rect '{s}': {e}")))?;
    let [x0, y0, x1, y1] = parts[..] else {
        return Err(FlexPlayError::validation(format!(
            "rect '{s}' must have exactly four comma-separated numbers"
        )));
    };
    if x1 < x0 || y1 < y0 {
        return Err(FlexPlayError::validation(format!(
            "rect '{s}' must satisfy x0 <= x1 and y0 <= y1"
        )));
    }
    Ok(Rect::new(x0, y0, x1, y1))
}
