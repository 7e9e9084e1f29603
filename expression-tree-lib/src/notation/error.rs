use thiserror::Error;

/// The ways converting, building or re-parsing an expression can fail.
///
/// None of these are retryable, and none represent partial success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Empty expression")]
    EmptyInput,

    #[error("Mismatched parenthesis")]
    MismatchedParenthesis,

    #[error("Malformed postfix expression: {reason}")]
    MalformedPostfix { reason: String },

    #[error("Malformed prefix expression: {reason}")]
    MalformedPrefix { reason: String },

    #[error("Unexpected character '{0}' in expression")]
    UnexpectedCharacter(char),
}

impl ExpressionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> ExpressionError {
        ExpressionError::MalformedPostfix {
            reason: reason.into(),
        }
    }
}
