// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics collected while encoding a batch of statements.
//!
//! A diagnostic is recorded for every statement that is skipped, so callers can tell a missing
//! assertion apart from a statement that was never part of the batch.

use crate::{EncodingError, ErrorKind, TheoryStatement};
use codespan_reporting::{
    diagnostic::Diagnostic as CodespanDiagnostic,
    files::{self, SimpleFiles},
    term::{self, termcolor::WriteColor, Config},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub theory: &'static str,
    /// Atom of the skipped statement
    pub atom: String,
    pub category: String,
    pub error: EncodingError,
}

impl Diagnostic {
    pub fn new(theory: &'static str, statement: &TheoryStatement, error: EncodingError) -> Self {
        Self {
            theory,
            atom: statement.atom.clone(),
            category: statement.category().to_string(),
            error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    fn to_codespan(&self) -> CodespanDiagnostic<usize> {
        CodespanDiagnostic::error()
            .with_code(self.kind().to_string())
            .with_message(self.error.to_string())
            .with_notes(vec![
                format!("theory: {}", self.theory),
                format!("statement: {} ({})", self.atom, self.category),
            ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// The diagnostic recorded for the statement named `atom`, if any
    pub fn for_atom(&self, atom: &str) -> Option<&Diagnostic> {
        self.items.iter().find(|d| d.atom == atom)
    }

    /// Render all diagnostics, in the order they were recorded.
    pub fn report<W: WriteColor>(&self, writer: &mut W) -> Result<(), files::Error> {
        // diagnostics carry no source labels, so the file database stays empty
        let files = SimpleFiles::<String, String>::new();
        let config = Config::default();
        for diagnostic in &self.items {
            term::emit(writer, &config, &files, &diagnostic.to_codespan())?;
        }
        Ok(())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
