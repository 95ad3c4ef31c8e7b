// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Interface of a theory fragment.

use crate::{smt, Diagnostic, Diagnostics, EncodingError, TheoryStatement};
use log::{debug, warn};
use std::fmt;

/// A theory fragment of the SMT backend.
pub trait Logic {
    /// SMT-LIB name of the fragment, e.g. `QF_IDL`
    fn theory_name(&self) -> &'static str;

    /// Validate `statement` against the fragment's grammar and lower it to a constraint.
    fn encode_statement(&self, statement: &TheoryStatement) -> Result<String, EncodingError>;

    /// Append one `(assert (= <atom> <constraint>))` line per valid statement to `out`, in input
    /// order. Invalid statements are skipped and recorded in `diagnostics`. Atom and variable
    /// names are checked first, see [`smt::check_statement_symbols`].
    fn emit_assertions(
        &self,
        statements: &[TheoryStatement],
        out: &mut dyn fmt::Write,
        diagnostics: &mut Diagnostics,
    ) -> fmt::Result {
        let atoms = smt::statement_atoms(statements);
        for statement in statements {
            let encoded = smt::check_statement_symbols(statement, &atoms)
                .and_then(|_| self.encode_statement(statement));
            match encoded {
                Ok(constraint) => {
                    debug!(
                        "[{}] encoded {} statement {}",
                        self.theory_name(),
                        statement.category(),
                        statement.atom
                    );
                    let atom = smt::symbol(&statement.atom);
                    writeln!(out, "{}", smt::assert(&smt::equals(&atom, &constraint)))?;
                }
                Err(error) => {
                    warn!(
                        "[{}] skipping statement {}: {}",
                        self.theory_name(),
                        statement.atom,
                        error
                    );
                    diagnostics.push(Diagnostic::new(self.theory_name(), statement, error));
                }
            }
        }
        Ok(())
    }

    /// Encode a batch, returning the assertion text together with the diagnostics.
    fn encode_all(&self, statements: &[TheoryStatement]) -> Encoding {
        let mut encoding = Encoding::default();
        // writing into a String cannot fail
        let _ = self.emit_assertions(
            statements,
            &mut encoding.assertions,
            &mut encoding.diagnostics,
        );
        encoding
    }
}

/// Result of encoding a batch of statements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoding {
    pub assertions: String,
    pub diagnostics: Diagnostics,
}

impl Encoding {
    pub fn assertion_lines(&self) -> impl Iterator<Item = &str> {
        self.assertions.lines()
    }

    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
