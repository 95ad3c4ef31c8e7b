// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Theory statement encoder
//!
//! Lowers the theory statements of a grounded logic program (`&diff { x - y } <= 10`,
//! `&dom { 1..5 } = x`, ...) into SMT-LIB assertions. Each supported theory fragment is a
//! [`Logic`] implementation that validates a statement against the fragment's grammar and
//! renders it as `(assert (= <atom> <constraint>))`, where `<atom>` is the boolean symbol naming
//! the statement elsewhere in the encoding.

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod error;
pub mod logic;
pub mod logics;
pub mod options;
pub mod smt;
pub mod statement;
pub mod term;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{EncodingError, ErrorKind, OperatorPosition};
pub use logic::{Encoding, Logic};
pub use logics::{logic_for_name, supported_logics, QfIdlLogic};
pub use options::Options;
pub use statement::{Element, StatementSet, TheoryStatement};
pub use term::{Constant, ExpressionTerm, Term};
