// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Quantifier-free integer difference logic
//!
//! Two statement categories are supported:
//! - `&diff { x - y } <= c`, lowered to `(<= (- x y) c)`
//! - `&dom { l..u; v } = x`, lowered to `(or (and (<= l x) (<= x u)) (= x v))`

use crate::{
    smt, Constant, Element, EncodingError, Logic, OperatorPosition, Term, TheoryStatement,
};

pub(crate) const LOGIC_NAME: &str = "QF_IDL";

const DIFF: &str = "diff";
const DOM: &str = "dom";
const RANGE: &str = "..";

/// Difference constraints relate at most two variables
const MAX_DIFF_VARIABLES: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct QfIdlLogic;

impl Logic for QfIdlLogic {
    fn theory_name(&self) -> &'static str {
        LOGIC_NAME
    }

    fn encode_statement(&self, statement: &TheoryStatement) -> Result<String, EncodingError> {
        match statement.category() {
            DIFF => diff_constraint(statement),
            DOM => dom_constraint(statement),
            category => Err(EncodingError::UnsupportedStatementCategory {
                category: category.to_string(),
                theory: LOGIC_NAME,
            }),
        }
    }
}

fn malformed(statement: &TheoryStatement, reason: impl Into<String>) -> EncodingError {
    EncodingError::MalformedStatementShape {
        category: statement.category().to_string(),
        reason: reason.into(),
    }
}

fn unsupported_operator(
    statement: &TheoryStatement,
    position: OperatorPosition,
    operator: &str,
    allowed: &'static str,
) -> EncodingError {
    EncodingError::UnsupportedOperator {
        category: statement.category().to_string(),
        position,
        operator: operator.to_string(),
        allowed,
    }
}

fn single_term<'a>(
    statement: &TheoryStatement,
    element: &'a Element,
) -> Result<&'a Term, EncodingError> {
    match element.terms.as_slice() {
        [term] => Ok(term),
        [] => Err(malformed(statement, "empty element")),
        _ => Err(malformed(statement, "an element must hold exactly one term")),
    }
}

fn diff_constraint(statement: &TheoryStatement) -> Result<String, EncodingError> {
    let element = match statement.elements.as_slice() {
        [element] => element,
        [] => return Err(malformed(statement, "missing left-hand term")),
        _ => return Err(malformed(statement, "more than one term not allowed")),
    };
    let head = single_term(statement, element)?;
    check_operands(statement, head)?;
    match &statement.right {
        Term::Literal(Constant::Integer(_)) | Term::Symbolic(_) => {}
        _ => {
            return Err(malformed(
                statement,
                "the bound must be an integer or a variable",
            ))
        }
    }

    if let Term::Expression(expression) = head {
        let found = head.variable_count();
        if found > MAX_DIFF_VARIABLES {
            return Err(EncodingError::ArityViolation {
                category: statement.category().to_string(),
                found,
                max: MAX_DIFF_VARIABLES,
            });
        }
        if expression.operation != "-" {
            return Err(unsupported_operator(
                statement,
                OperatorPosition::Expression,
                &expression.operation,
                "-",
            ));
        }
    }

    if statement.operation != "<=" {
        return Err(unsupported_operator(
            statement,
            OperatorPosition::Relation,
            &statement.operation,
            "<=",
        ));
    }

    Ok(smt::expr(
        &statement.operation,
        [element.to_string(), statement.right.to_string()],
    ))
}

/// Every operation must have operands and every constant must be an integer.
fn check_operands(statement: &TheoryStatement, term: &Term) -> Result<(), EncodingError> {
    match term {
        Term::Symbolic(_) | Term::Literal(Constant::Integer(_)) => Ok(()),
        Term::Literal(Constant::Name(name)) => Err(malformed(
            statement,
            format!("symbolic constant `{name}` is not an integer"),
        )),
        Term::Expression(expression) if expression.children.is_empty() => Err(malformed(
            statement,
            format!("operation `{}` has no operands", expression.operation),
        )),
        Term::Expression(expression) => expression
            .children
            .iter()
            .try_for_each(|child| check_operands(statement, child)),
    }
}

fn dom_constraint(statement: &TheoryStatement) -> Result<String, EncodingError> {
    if statement.elements.is_empty() {
        return Err(malformed(statement, "a domain needs at least one value or range"));
    }
    let variable = match &statement.right {
        Term::Symbolic(name) => smt::symbol(name),
        _ => return Err(malformed(statement, "a domain must be bound to a variable")),
    };

    let ranges = statement
        .elements
        .iter()
        .map(|element| {
            let term = single_term(statement, element)?;
            domain_range(statement, term, &variable)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if statement.operation != "=" {
        return Err(unsupported_operator(
            statement,
            OperatorPosition::Relation,
            &statement.operation,
            "=",
        ));
    }

    match ranges.as_slice() {
        [range] => Ok(range.clone()),
        _ => Ok(smt::expr("or", &ranges)),
    }
}

fn domain_range(
    statement: &TheoryStatement,
    term: &Term,
    variable: &str,
) -> Result<String, EncodingError> {
    match term {
        Term::Literal(Constant::Integer(value)) => {
            Ok(smt::expr("=", [variable.to_string(), smt::integer(*value)]))
        }
        Term::Expression(range) if range.operation == RANGE => match range.children.as_slice() {
            [Term::Literal(Constant::Integer(lower)), Term::Literal(Constant::Integer(upper))] => {
                if lower > upper {
                    return Err(malformed(statement, format!("empty range {lower}..{upper}")));
                }
                Ok(smt::expr(
                    "and",
                    [
                        smt::expr("<=", [smt::integer(*lower), variable.to_string()]),
                        smt::expr("<=", [variable.to_string(), smt::integer(*upper)]),
                    ],
                ))
            }
            _ => Err(malformed(statement, "range bounds must be integer literals")),
        },
        _ => Err(malformed(
            statement,
            "a domain element must be an integer or a range l..u",
        )),
    }
}
