// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Validation errors of theory statements

use std::fmt;
use thiserror::Error;

/// Which operator of a statement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPosition {
    /// Top-level operation of the left-hand expression
    Expression,
    /// Relational operation of the statement
    Relation,
}

impl fmt::Display for OperatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorPosition::Expression => f.write_str("operation"),
            OperatorPosition::Relation => f.write_str("relational operator"),
        }
    }
}

/// Rule a statement violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedStatementShape,
    ArityViolation,
    UnsupportedOperator,
    UnsupportedStatementCategory,
    InvalidSymbol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MalformedStatementShape => "MalformedStatementShape",
            ErrorKind::ArityViolation => "ArityViolation",
            ErrorKind::UnsupportedOperator => "UnsupportedOperator",
            ErrorKind::UnsupportedStatementCategory => "UnsupportedStatementCategory",
            ErrorKind::InvalidSymbol => "InvalidSymbol",
        };
        f.write_str(name)
    }
}

/// Errors raised while encoding a single statement. None of them is fatal for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid syntax for {category} statement: {reason}")]
    MalformedStatementShape { category: String, reason: String },

    #[error("invalid syntax for {category} statement: {found} variables found, at most {max} allowed")]
    ArityViolation {
        category: String,
        found: usize,
        max: usize,
    },

    #[error("invalid syntax for {category} statement: {position} `{operator}` is not allowed, only `{allowed}` is")]
    UnsupportedOperator {
        category: String,
        position: OperatorPosition,
        operator: String,
        allowed: &'static str,
    },

    #[error("the {category} statement is not supported with the {theory} logic")]
    UnsupportedStatementCategory {
        category: String,
        theory: &'static str,
    },

    /// An atom or variable name that cannot be declared as its own SMT symbol
    #[error("`{name}` cannot be used as an SMT symbol: {reason}")]
    InvalidSymbol { name: String, reason: &'static str },
}

impl EncodingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodingError::MalformedStatementShape { .. } => ErrorKind::MalformedStatementShape,
            EncodingError::ArityViolation { .. } => ErrorKind::ArityViolation,
            EncodingError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            EncodingError::UnsupportedStatementCategory { .. } => {
                ErrorKind::UnsupportedStatementCategory
            }
            EncodingError::InvalidSymbol { .. } => ErrorKind::InvalidSymbol,
        }
    }
}
