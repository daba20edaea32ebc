use thiserror::Error;

/// Errors raised while parsing and evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Expression undefined")]
    UndefinedExpression,

    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected function: {0}")]
    UnexpectedFunction(String),

    #[error("Factorial is undefined for {0}")]
    FactorialDomain(f64),

    #[error("Malformed number: {0}")]
    MalformedNumber(String),
}

impl EvaluatorError {
    /// Error for whatever sits under the cursor when nothing matched.
    pub(crate) fn unexpected(ch: Option<char>) -> Self {
        match ch {
            Some(c) => EvaluatorError::UnexpectedCharacter(c),
            None => EvaluatorError::UnexpectedEnd,
        }
    }
}

pub type EvaluatorResult<T> = Result<T, EvaluatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EvaluatorError::UndefinedExpression.to_string(),
            "Expression undefined"
        );
        assert_eq!(
            EvaluatorError::UnexpectedCharacter('$').to_string(),
            "Unexpected character: $"
        );
        assert_eq!(
            EvaluatorError::UnexpectedFunction("zzz".to_string()).to_string(),
            "Unexpected function: zzz"
        );
    }

    #[test]
    fn test_unexpected_at_end() {
        assert_eq!(
            EvaluatorError::unexpected(None),
            EvaluatorError::UnexpectedEnd
        );
        assert_eq!(
            EvaluatorError::unexpected(Some('#')),
            EvaluatorError::UnexpectedCharacter('#')
        );
    }
}
