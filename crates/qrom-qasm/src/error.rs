//! Error types for the QASM assembler.

use thiserror::Error;

/// Errors that can occur while assembling or emitting QASM text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at position {position}: {message}")]
    LexerError { position: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Invalid version.
    #[error("Invalid OPENQASM version: {0}")]
    InvalidVersion(String),

    /// Undefined identifier.
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),

    /// Duplicate declaration.
    #[error("Duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    /// Register operands of a broadcast statement differ in size.
    #[error("Register size mismatch in '{statement}': {left} vs {right}")]
    BroadcastMismatch {
        statement: String,
        left: usize,
        right: usize,
    },

    /// Index out of bounds.
    #[error("Index {index} out of bounds for register '{register}' of size {size}")]
    IndexOutOfBounds {
        register: String,
        index: usize,
        size: usize,
    },

    /// Parameter expression could not be evaluated.
    #[error("Invalid parameter expression: {0}")]
    InvalidExpression(String),

    /// A rotation angle is NaN or infinite and cannot be written out.
    #[error("Non-finite parameter {value} on gate '{gate}'")]
    NonFiniteParameter { gate: String, value: f64 },

    /// Generic parse error.
    #[error("Parse error: {0}")]
    Generic(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
