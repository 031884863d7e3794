/// Convenience result type used across svganim.
pub type SvganimResult<T> = Result<T, SvganimError>;

/// Top-level error taxonomy used by the animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum SvganimError {
    /// Invalid configuration or an input shape the animators cannot handle.
    #[error("validation error: {0}")]
    Validation(String),

    /// An input's root element is not the expected image root.
    #[error("format error: input '{input}' has root element '{found}', expected '{expected}'")]
    Format {
        /// Name of the offending input source.
        input: String,
        /// Expected root local name.
        expected: String,
        /// Root local name actually found.
        found: String,
    },

    /// Timing normalization is undefined for the requested durations.
    #[error("domain error: {0}")]
    Domain(String),

    /// An input document is not well-formed XML.
    #[error("parse error: input '{input}': {message}")]
    Parse {
        /// Name of the offending input source.
        input: String,
        /// Description of the tokenizer failure.
        message: String,
    },

    /// Writing the merged document failed.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SvganimError {
    /// Build a [`SvganimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SvganimError::Format`] value.
    pub fn format(
        input: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Format {
            input: input.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a [`SvganimError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`SvganimError::Parse`] value.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Build a [`SvganimError::Serialize`] value.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
