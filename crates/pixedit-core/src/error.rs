//! Error type shared by the pixel transforms.

use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during a pixel transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// No image was supplied where one is required.
    #[error("No input image supplied")]
    NullInput,

    /// A parameter lies outside its documented domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: String,
    },
}

impl TransformError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<i64>, reason: impl Into<String>) -> Self {
        TransformError::InvalidParameter {
            name,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Reject the absent buffer.
#[inline]
pub(crate) fn require_input(input: &PixelBuffer) -> Result<(), TransformError> {
    if input.is_empty() {
        return Err(TransformError::NullInput);
    }
    Ok(())
}
