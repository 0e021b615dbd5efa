// SPDX-License-Identifier: MIT

//! Typed evaluation errors for condition expressions

use thiserror::Error;

/// Errors produced while evaluating a condition expression.
///
/// The three syntactic variants carry the diagnostic texts the rule
/// language has always reported. Any of them aborts the whole evaluation;
/// there is no recovery or partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Input remained after a complete expression was parsed.
    #[error("End of line needed")]
    TrailingInput,

    /// A `(` group was not closed by `)`.
    #[error(") needed")]
    UnclosedGroup,

    /// The lookahead is not a numeral, `!`, or `(` where an atom is expected.
    #[error("0 or 1 or ! or ( needed")]
    UnexpectedAtom,

    /// Expression nesting exceeded the evaluator's depth limit.
    #[error("expression nesting exceeds depth limit of {0}")]
    TooDeep(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_texts() {
        assert_eq!(ExprError::TrailingInput.to_string(), "End of line needed");
        assert_eq!(ExprError::UnclosedGroup.to_string(), ") needed");
        assert_eq!(
            ExprError::UnexpectedAtom.to_string(),
            "0 or 1 or ! or ( needed"
        );
    }
}
