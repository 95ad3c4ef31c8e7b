// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::term::Term;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Left-hand grouping of terms in a theory statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub terms: Vec<Term>,
}

impl Element {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.iter().join(" "))
    }
}

/// A theory statement `&<tag> { <elements> } <operation> <right>` of the grounded program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoryStatement {
    /// Name of the boolean atom standing for this statement
    pub atom: String,
    /// Statement category, e.g. `diff` or `dom`
    pub tag: String,
    pub elements: Vec<Element>,
    /// Relational operation, e.g. `<=`
    pub operation: String,
    pub right: Term,
}

impl TheoryStatement {
    pub fn category(&self) -> &str {
        &self.tag
    }

    /// First term of the first element
    pub fn head(&self) -> Option<&Term> {
        self.elements.first().and_then(|e| e.terms.first())
    }

    /// Distinct variables of the statement, left-hand side first.
    pub fn variables(&self) -> Vec<&str> {
        self.elements
            .iter()
            .flat_map(|e| e.terms.iter())
            .chain(std::iter::once(&self.right))
            .flat_map(|t| t.variables())
            .unique()
            .collect()
    }
}

/// Statements as stored in a TOML statement file, one `[[statement]]` table each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementSet {
    #[serde(rename = "statement", default)]
    pub statements: Vec<TheoryStatement>,
}

impl StatementSet {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
