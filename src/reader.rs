// ABOUTME: Reader that lifts a SyntaxNode tree into Values
//!
//! The reader never evaluates. It only resolves literal numeric text into an
//! `i64` (or, on overflow or any other parse failure, a `Value::Error`) and
//! carries symbols, `SExpr`s, and `QExpr`s straight across unchanged in shape.

use crate::parser::SyntaxNode;
use crate::value::Value;

/// Converts one syntax node into a `Value`, recursively.
pub fn read(node: &SyntaxNode) -> Value {
    match node {
        SyntaxNode::Number(text) => match text.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Error("Invalid Number".to_string()),
        },
        SyntaxNode::Symbol(text) => Value::Symbol(text.clone()),
        SyntaxNode::SExpr(children) => Value::SExpr(children.iter().map(read).collect()),
        SyntaxNode::QExpr(children) => Value::QExpr(children.iter().map(read).collect()),
    }
}

/// Converts a whole program (a sequence of top-level syntax nodes) into `Value`s.
pub fn read_program(nodes: &[SyntaxNode]) -> Vec<Value> {
    nodes.iter().map(read).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_program;

    fn read_one(src: &str) -> Value {
        let nodes = parse_program(src).unwrap();
        assert_eq!(nodes.len(), 1);
        read(&nodes[0])
    }

    #[test]
    fn reads_a_number() {
        assert_eq!(read_one("42"), Value::Number(42));
        assert_eq!(read_one("-7"), Value::Number(-7));
    }

    #[test]
    fn reads_a_symbol() {
        assert_eq!(read_one("foo-bar"), Value::Symbol("foo-bar".to_string()));
    }

    #[test]
    fn reads_nested_sexpr() {
        assert_eq!(
            read_one("(+ 1 2)"),
            Value::SExpr(vec![
                Value::Symbol("+".to_string()),
                Value::Number(1),
                Value::Number(2),
            ])
        );
    }

    #[test]
    fn reads_qexpr_as_data_not_application() {
        assert_eq!(
            read_one("{1 2 3}"),
            Value::QExpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)])
        );
    }

    #[test]
    fn overflowing_number_literal_becomes_invalid_number_error() {
        // i64::MAX is 9223372036854775807; one more digit overflows.
        let node = SyntaxNode::Number("99999999999999999999".to_string());
        assert_eq!(read(&node), Value::Error("Invalid Number".to_string()));
    }

    #[test]
    fn reading_a_program_preserves_order() {
        let nodes = parse_program("1 2 3").unwrap();
        let values = read_program(&nodes);
        assert_eq!(values, vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
    }
}
