/// Convenience result type used across ledwheel.
pub type LedWheelResult<T> = Result<T, LedWheelError>;

/// Top-level error taxonomy used by the addressing engine and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum LedWheelError {
    /// Panel geometry or table generation that cannot produce a valid addressing table.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller-provided data (frame sizes, CLI values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The preview sink rejected a frame.
    #[error("preview error: {0}")]
    Preview(String),

    /// The frame source failed to decode or deliver a frame.
    #[error("frame source error: {0}")]
    Frame(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedWheelError {
    /// Build a [`LedWheelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LedWheelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LedWheelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LedWheelError::Preview`] value.
    pub fn preview(msg: impl Into<String>) -> Self {
        Self::Preview(msg.into())
    }

    /// Build a [`LedWheelError::Frame`] value.
    pub fn frame(msg: impl Into<String>) -> Self {
        Self::Frame(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
