/// Convenience result type used across FlexPlay.
pub type FlexPlayResult<T> = Result<T, FlexPlayError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlexPlayError {
    /// Invalid caller-provided data (catalog indices, session setup, rectangles).
    #[error("validation error: {0}")]
    Validation(String),

    /// A position name outside the nine known anchors.
    #[error("unknown position: '{0}'")]
    UnknownPosition(String),

    /// A layout method name other than `flex`, `grid` or `absolute`.
    #[error("unknown method: '{0}'")]
    UnknownMethod(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlexPlayError {
    /// Build a [`FlexPlayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlexPlayError::UnknownPosition`] value.
    pub fn unknown_position(name: impl Into<String>) -> Self {
        Self::UnknownPosition(name.into())
    }

    /// Build a [`FlexPlayError::UnknownMethod`] value.
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod(name.into())
    }

    /// Build a [`FlexPlayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlexPlayError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
