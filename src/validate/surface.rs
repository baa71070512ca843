use crate::{foundation::core::Rect, validate::style::ComputedStyle};

/// The two rendering regions the engine inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementId {
    /// Layout container the player styles.
    Stage,
    /// The single child that must reach the target.
    Crate,
}

impl ElementId {
    /// CSS class selector the player targets for this element.
    pub fn selector(self) -> &'static str {
        match self {
            ElementId::Stage => ".stage",
            ElementId::Crate => ".crate",
        }
    }
}

/// Read-only view of the live rendering surface.
///
/// Both queries must reflect the most recently applied style sheet. `None` means the element is
/// not mounted (or otherwise not queryable) right now.
pub trait RenderSurface {
    /// Resolved style properties of `element`.
    fn resolved_style(&self, element: ElementId) -> Option<ComputedStyle>;

    /// Rendered bounding rectangle of `element` in the shared coordinate space.
    fn bounding_box(&self, element: ElementId) -> Option<Rect>;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Captured geometry and style of one element.
pub struct ElementSnapshot {
    /// Bounding rectangle.
    pub rect: Rect,
    /// Resolved style.
    #[serde(default)]
    pub style: ComputedStyle,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A frozen [`RenderSurface`], e.g. loaded from a JSON fixture.
pub struct SurfaceSnapshot {
    /// Stage element, if mounted.
    #[serde(default)]
    pub stage: Option<ElementSnapshot>,
    /// Crate element, if mounted.
    #[serde(default, rename = "crate")]
    pub crate_el: Option<ElementSnapshot>,
}

impl SurfaceSnapshot {
    /// Snapshot with both elements mounted.
    pub fn new(stage: ElementSnapshot, crate_el: ElementSnapshot) -> Self {
        Self {
            stage: Some(stage),
            crate_el: Some(crate_el),
        }
    }

    /// Capture both elements from a live surface.
    pub fn capture(surface: &dyn RenderSurface) -> Self {
        let grab = |id: ElementId| {
            Some(ElementSnapshot {
                rect: surface.bounding_box(id)?,
                style: surface.resolved_style(id)?,
            })
        };
        Self {
            stage: grab(ElementId::Stage),
            crate_el: grab(ElementId::Crate),
        }
    }

    fn element(&self, element: ElementId) -> Option<&ElementSnapshot> {
        match element {
            ElementId::Stage => self.stage.as_ref(),
            ElementId::Crate => self.crate_el.as_ref(),
        }
    }
}

impl RenderSurface for SurfaceSnapshot {
    fn resolved_style(&self, element: ElementId) -> Option<ComputedStyle> {
        self.element(element).map(|e| e.style.clone())
    }

    fn bounding_box(&self, element: ElementId) -> Option<Rect> {
        self.element(element).map(|e| e.rect)
    }
}
