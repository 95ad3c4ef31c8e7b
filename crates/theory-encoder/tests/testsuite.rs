use theory_encoder::{
    logic_for_name, smt, Diagnostics, Element, ErrorKind, Logic, QfIdlLogic, Term, TheoryStatement,
};

fn var(name: &str) -> Term {
    Term::symbolic(name)
}

fn sub(lhs: Term, rhs: Term) -> Term {
    Term::expression("-", vec![lhs, rhs])
}

fn diff(atom: &str, head: Term, operation: &str, bound: i64) -> TheoryStatement {
    TheoryStatement {
        atom: atom.to_string(),
        tag: "diff".to_string(),
        elements: vec![Element::new(vec![head])],
        operation: operation.to_string(),
        right: Term::integer(bound),
    }
}

#[test]
fn encodes_difference_constraint() {
    let encoding = QfIdlLogic.encode_all(&[diff("a1", sub(var("x"), var("y")), "<=", 10)]);

    assert!(encoding.is_complete());
    insta::assert_snapshot!(encoding.assertions.trim_end(), @"(assert (= a1 (<= (- x y) 10)))");
}

#[test]
fn rejects_addition() {
    let head = Term::expression("+", vec![var("x"), var("y")]);
    let encoding = QfIdlLogic.encode_all(&[diff("a1", head, "<=", 10)]);

    assert!(encoding.assertions.is_empty());
    let diagnostic = encoding.diagnostics.for_atom("a1").unwrap();
    assert_eq!(diagnostic.kind(), ErrorKind::UnsupportedOperator);
    assert_eq!(diagnostic.theory, "QF_IDL");
}

#[test]
fn rejects_three_variables() {
    let head = sub(var("x"), sub(var("y"), var("z")));
    let encoding = QfIdlLogic.encode_all(&[diff("a1", head, "<=", 10)]);

    assert!(encoding.assertions.is_empty());
    assert_eq!(encoding.diagnostics.len(), 1);
    assert_eq!(
        encoding.diagnostics.for_atom("a1").unwrap().kind(),
        ErrorKind::ArityViolation
    );
}

#[test]
fn rejects_equality_relation() {
    let encoding = QfIdlLogic.encode_all(&[diff("a1", sub(var("x"), var("y")), "=", 10)]);

    assert!(encoding.assertions.is_empty());
    assert_eq!(
        encoding.diagnostics.for_atom("a1").unwrap().kind(),
        ErrorKind::UnsupportedOperator
    );
}

#[test]
fn rejects_several_elements() {
    let mut statement = diff("a1", sub(var("x"), var("y")), "<=", 10);
    statement
        .elements
        .push(Element::new(vec![sub(var("y"), var("x"))]));
    let encoding = QfIdlLogic.encode_all(&[statement]);

    assert!(encoding.assertions.is_empty());
    assert_eq!(
        encoding.diagnostics.for_atom("a1").unwrap().kind(),
        ErrorKind::MalformedStatementShape
    );
}

#[test]
fn keeps_order_and_skips_invalid_statements() {
    let statements = vec![
        diff("s1", sub(var("x"), var("y")), "<=", 1),
        diff("s2", Term::expression("+", vec![var("x"), var("y")]), "<=", 2),
        diff("s3", sub(var("y"), var("z")), "<=", 3),
    ];
    let encoding = QfIdlLogic.encode_all(&statements);

    insta::assert_snapshot!(
        encoding.assertion_lines().collect::<Vec<_>>().join(" | "),
        @"(assert (= s1 (<= (- x y) 1))) | (assert (= s3 (<= (- y z) 3)))"
    );
    let skipped = encoding
        .diagnostics
        .iter()
        .map(|d| d.atom.as_str())
        .collect::<Vec<_>>();
    assert_eq!(skipped, vec!["s2"]);
}

#[test]
fn unsupported_category_is_reported() {
    let mut statement = diff("a4", sub(var("x"), var("y")), "<=", 1);
    statement.tag = "sum".to_string();
    let encoding = QfIdlLogic.encode_all(&[statement, diff("a5", var("x"), "<=", 4)]);

    assert_eq!(encoding.assertion_lines().count(), 1);
    let diagnostic = encoding.diagnostics.for_atom("a4").unwrap();
    assert_eq!(diagnostic.kind(), ErrorKind::UnsupportedStatementCategory);
    assert_eq!(diagnostic.category, "sum");
}

#[test]
fn encoding_is_deterministic() {
    let statements = vec![
        diff("a1", sub(var("x"), var("y")), "<=", 10),
        diff("a2", sub(var("x"), sub(var("y"), var("z"))), "<=", 10),
        diff("a3", sub(var("z"), var("x")), "<=", -5),
    ];
    let logic = logic_for_name("QF_IDL").unwrap();

    let first = logic.encode_all(&statements);
    let second = logic.encode_all(&statements);
    assert_eq!(first.assertions, second.assertions);
    assert_eq!(first, second);
}

#[test]
fn emits_into_writer_with_preamble() {
    let statements = vec![diff("12", sub(var("x"), var("y")), "<=", 0)];
    let mut out = smt::preamble(&QfIdlLogic, &statements);
    let mut diagnostics = Diagnostics::new();
    QfIdlLogic
        .emit_assertions(&statements, &mut out, &mut diagnostics)
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(
        out,
        "(set-logic QF_IDL)\n\
         (declare-fun |12| () Bool)\n\
         (declare-fun x () Int)\n\
         (declare-fun y () Int)\n\
         (assert (= |12| (<= (- x y) 0)))\n"
    );
}

#[test]
fn empty_operation_is_skipped() {
    let encoding = QfIdlLogic.encode_all(&[diff("a1", Term::expression("-", vec![]), "<=", 10)]);

    assert!(encoding.assertions.is_empty());
    assert_eq!(
        encoding.diagnostics.for_atom("a1").unwrap().kind(),
        ErrorKind::MalformedStatementShape
    );
}

#[test]
fn clashing_names_are_skipped() {
    let statements = vec![
        diff("true", sub(var("x"), var("y")), "<=", 1),
        diff("a2", sub(var("x"), var("a3")), "<=", 2),
        diff("a3", sub(var("x"), var("and")), "<=", 3),
        diff("a4", sub(var("let"), var("y")), "<=", 4),
    ];
    let encoding = QfIdlLogic.encode_all(&statements);

    insta::assert_snapshot!(encoding.assertions.trim_end(), @"(assert (= a4 (<= (- |let| y) 4)))");
    let skipped = encoding
        .diagnostics
        .iter()
        .map(|d| (d.atom.as_str(), d.kind()))
        .collect::<Vec<_>>();
    assert_eq!(
        skipped,
        vec![
            ("true", ErrorKind::InvalidSymbol),
            ("a2", ErrorKind::InvalidSymbol),
            ("a3", ErrorKind::InvalidSymbol),
        ]
    );
}
