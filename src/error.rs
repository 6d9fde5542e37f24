// Validation failures raised by the model; presentation is left to the caller.

use thiserror::Error;

/// Why a batch was rejected. The first failure aborts the whole `execute` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    /// The batch is absent or not a sequence.
    #[error("SciMModel: Input data is missing.")]
    MissingInput,

    /// A batch element is not a key/value record.
    #[error("SciMModel: input[{index}] is not an object.")]
    NotARecord { index: usize },

    /// A required field (or both members of an alias pair) is absent.
    #[error("SciMModel: '{field}' is missing from input[{index}]. Please provide {unit}.")]
    MissingField {
        field: &'static str,
        index: usize,
        unit: &'static str,
    },
}

impl InputValidationError {
    /// Shape errors are raised before any record is inspected.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            InputValidationError::MissingInput | InputValidationError::NotARecord { .. }
        )
    }

    /// Zero-based index of the offending record, when the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            InputValidationError::MissingInput => None,
            InputValidationError::NotARecord { index }
            | InputValidationError::MissingField { index, .. } => Some(*index),
        }
    }
}
