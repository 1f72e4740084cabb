/// Convenience result type used across the crate.
pub type SketchResult<T> = Result<T, SketchError>;

/// Top-level error taxonomy for the transform, codec and host layers.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    /// Malformed buffers, configuration or upload sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// The transform was handed a buffer that is not 3-channel color.
    #[error("invalid input kind: expected 3 channels, got {channels}")]
    InvalidInputKind {
        /// Channel count of the rejected buffer.
        channels: u8,
    },

    /// Unsupported or corrupt upload.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure while producing the PNG download.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SketchError {
    /// Build a [`SketchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SketchError::InvalidInputKind`] value.
    pub fn invalid_input_kind(channels: u8) -> Self {
        Self::InvalidInputKind { channels }
    }

    /// Build a [`SketchError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SketchError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
