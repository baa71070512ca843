#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Resolved style properties of one element, as reported by the rendering surface.
///
/// Values are the surface's resolved strings (`"inline-flex"`, `"absolute"`), not the
/// author's CSS text.
pub struct ComputedStyle {
    /// Resolved `display` value.
    #[serde(default = "default_display")]
    pub display: String,
    /// Resolved `position` value.
    #[serde(default = "default_position")]
    pub position: String,
    /// Resolved `justify-content` value.
    #[serde(default = "default_alignment")]
    pub justify_content: String,
    /// Resolved `align-items` value.
    #[serde(default = "default_alignment")]
    pub align_items: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: default_display(),
            position: default_position(),
            justify_content: default_alignment(),
            align_items: default_alignment(),
        }
    }
}

impl ComputedStyle {
    /// Style with the given `display` and initial values elsewhere.
    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            ..Self::default()
        }
    }

    /// Style with the given `position` and initial values elsewhere.
    pub fn with_position(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            ..Self::default()
        }
    }

    /// True for `flex` and `inline-flex`.
    pub fn is_flex_container(&self) -> bool {
        self.display.contains("flex")
    }

    /// True for `grid` and `inline-grid`.
    pub fn is_grid_container(&self) -> bool {
        self.display.contains("grid")
    }

    /// True only for exactly `absolute`; `fixed` does not count.
    pub fn is_absolutely_positioned(&self) -> bool {
        self.position == "absolute"
    }
}

fn default_display() -> String {
    "block".to_string()
}

fn default_position() -> String {
    "static".to_string()
}

fn default_alignment() -> String {
    "normal".to_string()
}
