use crate::prefab::InstanceId;

/// Alias for `Result<T, GenerationError>`.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors that can occur while turning a prompt into a blueprint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The prompt was empty or contained only whitespace.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The prompt exceeded the maximum number of characters.
    #[error("prompt is {len} characters long, maximum is {max}")]
    PromptTooLong {
        /// Length of the rejected prompt, in characters.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// An explicitly requested world type is not a known category.
    #[error("unknown world type: \"{0}\"")]
    UnknownWorldType(String),

    /// Two prefab instances in one blueprint share an identifier.
    ///
    /// Instance identifiers are generated internally, so this is a defect in
    /// identifier generation rather than a problem with the request.
    #[error("internal invariant violated: duplicate prefab instance id {0}")]
    DuplicateInstanceId(InstanceId),

    /// A blueprint text field is empty or longer than its limit.
    #[error("internal invariant violated: {field} is {len} characters long, allowed 1 to {max}")]
    FieldLength {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length, in characters.
        len: usize,
        /// The allowed maximum.
        max: usize,
    },

    /// A position, scale or spawn point has a NaN or infinite coordinate.
    #[error("internal invariant violated: non-finite coordinates in {0}")]
    NonFiniteVector(String),
}

impl GenerationError {
    /// Returns true if the caller caused the error (bad input).
    ///
    /// Client errors map to a 4xx-style response; everything else is a
    /// server-side defect.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrompt | Self::PromptTooLong { .. } | Self::UnknownWorldType(_)
        )
    }

    /// Short machine-readable error kind, used in error responses.
    pub fn kind(&self) -> &'static str {
        if self.is_client_error() {
            "validation_error"
        } else {
            "internal_invariant_violation"
        }
    }
}
