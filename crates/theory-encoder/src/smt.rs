// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Helpers for writing SMT-LIB text.

use crate::{EncodingError, Logic, TheoryStatement};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::Display;

static SIMPLE_SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z~!@$%^&*_+=<>.?/\-][a-zA-Z0-9~!@$%^&*_+=<>.?/\-]*$")
        .expect("valid symbol pattern")
});

/// Words that cannot be used as plain symbols. Quoted, they are ordinary symbols.
const RESERVED_WORDS: &[&str] = &[
    "_", "!", "as", "let", "exists", "forall", "match", "par", "NUMERAL", "DECIMAL", "STRING",
    "BINARY", "HEXADECIMAL",
];

/// Symbols of the core and integer theories. `|x|` and `x` are the same symbol, so these cannot
/// be declared even when quoted.
const THEORY_SYMBOLS: &[&str] = &[
    "true", "false", "not", "and", "or", "xor", "=>", "=", "distinct", "ite", "+", "-", "*",
    "div", "mod", "abs", "<=", "<", ">=", ">",
];

/// Application of `op` to `args`: `(op a1 a2 ...)`, or just `op` without arguments.
pub fn expr<I>(op: &str, args: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let args = args.into_iter().join(" ");
    if args.is_empty() {
        op.to_string()
    } else {
        format!("({op} {args})")
    }
}

pub fn assert(body: &str) -> String {
    expr("assert", [body])
}

pub fn equals(lhs: &str, rhs: &str) -> String {
    expr("=", [lhs, rhs])
}

/// Render a name as an SMT symbol, quoting it when it is not a simple symbol. The rendering is
/// injective on names accepted by [`check_symbol`].
pub fn symbol(name: &str) -> String {
    if SIMPLE_SYMBOL.is_match(name) && !RESERVED_WORDS.contains(&name) {
        name.to_string()
    } else {
        format!("|{name}|")
    }
}

/// Check that `name` can be declared as a symbol of its own.
pub fn check_symbol(name: &str) -> Result<(), EncodingError> {
    let reason = if name.is_empty() {
        "empty name"
    } else if name.contains(['|', '\\']) {
        "quoted symbols cannot contain `|` or `\\`"
    } else if THEORY_SYMBOLS.contains(&name) {
        "it is a symbol of the theory"
    } else {
        return Ok(());
    };
    Err(EncodingError::InvalidSymbol {
        name: name.to_string(),
        reason,
    })
}

/// Check the atom and the variables of `statement`. A variable must not share its name with
/// any of `atoms`, since it would be declared with two sorts.
pub fn check_statement_symbols(
    statement: &TheoryStatement,
    atoms: &BTreeSet<&str>,
) -> Result<(), EncodingError> {
    check_symbol(&statement.atom)?;
    for variable in statement.variables() {
        check_symbol(variable)?;
        if atoms.contains(variable) {
            return Err(EncodingError::InvalidSymbol {
                name: variable.to_string(),
                reason: "it also names a statement atom",
            });
        }
    }
    Ok(())
}

pub fn statement_atoms(statements: &[TheoryStatement]) -> BTreeSet<&str> {
    statements.iter().map(|s| s.atom.as_str()).collect()
}

pub fn integer(value: i64) -> String {
    if value < 0 {
        expr("-", [value.unsigned_abs()])
    } else {
        value.to_string()
    }
}

pub fn set_logic(name: &str) -> String {
    expr("set-logic", [name])
}

pub fn declare_const(name: &str, sort: &str) -> String {
    format!("(declare-fun {} () {sort})", symbol(name))
}

/// Header of an assertion file: the logic, one boolean per statement atom, and one integer per
/// variable appearing in the statements. Declarations are sorted. Names rejected by
/// [`check_symbol`] and variables named like an atom are left out; their statements are
/// skipped by [`Logic::emit_assertions`].
pub fn preamble(logic: &dyn Logic, statements: &[TheoryStatement]) -> String {
    let all_atoms = statement_atoms(statements);
    let atoms: BTreeSet<&str> = all_atoms
        .iter()
        .copied()
        .filter(|atom| check_symbol(atom).is_ok())
        .collect();
    let variables: BTreeSet<&str> = statements
        .iter()
        .flat_map(|s| s.variables())
        .filter(|variable| check_symbol(variable).is_ok() && !all_atoms.contains(variable))
        .collect();

    let mut out = String::new();
    out.push_str(&set_logic(logic.theory_name()));
    out.push('\n');
    for atom in atoms {
        out.push_str(&declare_const(atom, "Bool"));
        out.push('\n');
    }
    for variable in variables {
        out.push_str(&declare_const(variable, "Int"));
        out.push('\n');
    }
    out
}
