// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Terms of theory statements.

use crate::smt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A term of a theory statement. Terms own their children, so a term tree is always finite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// A variable, e.g. `x` or `start(1)`
    Symbolic(String),
    /// An operation applied to an ordered list of terms, e.g. `x - y`
    Expression(ExpressionTerm),
    /// A constant
    Literal(Constant),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionTerm {
    pub operation: String,
    #[serde(default)]
    pub children: Vec<Term>,
}

/// Constant value of a literal term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constant {
    Integer(i64),
    /// Symbolic constant of the logic program (`a`, `"text"`)
    Name(String),
}

impl Term {
    pub fn symbolic(name: impl Into<String>) -> Self {
        Term::Symbolic(name.into())
    }

    pub fn integer(value: i64) -> Self {
        Term::Literal(Constant::Integer(value))
    }

    pub fn expression(operation: impl Into<String>, children: Vec<Term>) -> Self {
        Term::Expression(ExpressionTerm {
            operation: operation.into(),
            children,
        })
    }

    /// Number of variable leaves in this term. Every variable occurrence counts, so `x - x`
    /// has two.
    pub fn variable_count(&self) -> usize {
        match self {
            Term::Symbolic(_) => 1,
            Term::Expression(expression) => expression
                .children
                .iter()
                .map(Term::variable_count)
                .sum(),
            Term::Literal(_) => 0,
        }
    }

    /// Distinct variable names of this term, in first-seen order.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_variables(&mut names);
        names.into_iter().unique().collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Term::Symbolic(name) => names.push(name),
            Term::Expression(expression) => {
                for child in &expression.children {
                    child.collect_variables(names);
                }
            }
            Term::Literal(_) => {}
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbolic(name) => f.write_str(&smt::symbol(name)),
            Term::Expression(expression) => fmt::Display::fmt(expression, f),
            Term::Literal(constant) => fmt::Display::fmt(constant, f),
        }
    }
}

impl fmt::Display for ExpressionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&smt::expr(&self.operation, &self.children))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(value) => f.write_str(&smt::integer(*value)),
            Constant::Name(name) => f.write_str(&smt::symbol(name)),
        }
    }
}
