use thiserror::Error;

/// The main error type for bounding box operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BBoxError {
    /// The input cannot describe a box with positive area.
    #[error("Invalid box: {reason}")]
    InvalidBox { reason: String },

    /// A resize argument is outside its accepted domain.
    #[error("Invalid argument `{name}`: {value} ({expected})")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Indexed access past the end of the box's value sequence.
    #[error("Index {index} out of range for box of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl BBoxError {
    pub(crate) fn invalid_box(reason: impl Into<String>) -> Self {
        Self::InvalidBox {
            reason: reason.into(),
        }
    }
}
