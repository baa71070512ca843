use std::fmt;
use std::str::FromStr;

use crate::foundation::error::FlexPlayError;

/// One of the nine named anchor points inside the stage.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Geometric centroid of the stage.
    Center,
    /// Upper-left corner anchor.
    TopLeft,
    /// Upper-right corner anchor.
    TopRight,
    /// Lower-left corner anchor.
    BottomLeft,
    /// Lower-right corner anchor.
    BottomRight,
    /// Middle of the left edge.
    LeftCenter,
    /// Middle of the right edge.
    RightCenter,
    /// Middle of the top edge.
    TopCenter,
    /// Middle of the bottom edge.
    BottomCenter,
}

impl Position {
    /// All positions in catalog cycling order.
    pub const ALL: [Position; 9] = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::LeftCenter,
        Position::RightCenter,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    /// Canonical hyphenated name, e.g. `top-left`.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Center => "center",
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::LeftCenter => "left-center",
            Position::RightCenter => "right-center",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Human-readable name with the hyphen replaced by a space, e.g. `top left`.
    pub fn label(self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = FlexPlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FlexPlayError::unknown_position(name))
    }
}

/// Layout technique a level requires.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// The stage must be a flex container.
    Flex,
    /// The stage must be a grid container.
    Grid,
    /// The crate must be absolutely positioned.
    Absolute,
}

impl Method {
    /// Methods in catalog phase order.
    pub const ALL: [Method; 3] = [Method::Flex, Method::Grid, Method::Absolute];

    /// Lowercase name as shown to the player.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Flex => "flex",
            Method::Grid => "grid",
            Method::Absolute => "absolute",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Method {
    type Err = FlexPlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FlexPlayError::unknown_method(name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An immutable level produced by the catalog generator.
pub struct LevelDefinition {
    /// 1-based sequence number; defines catalog order.
    pub id: u32,
    /// Display title, `Level {id}`.
    pub title: String,
    /// Goal sentence combining position and method.
    pub description: String,
    /// Anchor the crate center must reach.
    pub position: Position,
    /// Required layout technique.
    pub method: Method,
    /// Maximum allowed distance in pixels between crate center and target.
    pub tolerance: u32,
    /// Initial editor contents, including a method-specific hint comment.
    #[serde(rename = "starterCSS")]
    pub starter_css: String,
}

#[cfg(test)]
#[path = "../../tests/unit/level/model.rs"]
mod tests;
