// ABOUTME: The core's external interface, parse_and_eval and print
//!
//! This is the seam the REPL loop (an external collaborator per the crate's
//! scope) calls across: obtain a line, hand it to [`parse_and_eval`], print
//! whatever comes back. A parse failure is reported as a bare diagnostic
//! string, never wrapped in a `Value::Error`. Only evaluation failures are
//! first-class `Value`s.

use crate::env::Environment;
use crate::eval::eval;
use crate::parser::parse_program;
use crate::reader::read;
use crate::value::Value;
use std::rc::Rc;

/// Parses every top-level expression in `source`, evaluating each in turn
/// against `env`, and returns the last one's value. A source with no
/// top-level expressions (blank or all-whitespace) evaluates to the empty
/// S-expression. Returns `Err(diagnostic)` if `source` does not parse at all;
/// in that case `env` is left untouched; the evaluator never sees a
/// partially parsed tree.
pub fn parse_and_eval(env: &Rc<Environment>, source: &str) -> Result<Value, String> {
    let nodes = parse_program(source)?;
    let mut result = Value::SExpr(vec![]);
    for node in &nodes {
        result = eval(env, read(node));
    }
    Ok(result)
}

/// Renders a `Value` the way the REPL prints it.
pub fn print(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;

    fn fresh_env() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    #[test]
    fn evaluates_a_line_and_prints_the_result() {
        let env = fresh_env();
        let value = parse_and_eval(&env, "+ 1 2 3").unwrap();
        assert_eq!(print(&value), "6");
    }

    #[test]
    fn parse_failure_is_a_bare_diagnostic_not_a_value() {
        let env = fresh_env();
        let err = parse_and_eval(&env, ")").unwrap_err();
        assert!(err.starts_with("Parse error"));
    }

    #[test]
    fn blank_source_evaluates_to_the_empty_sexpr() {
        let env = fresh_env();
        let value = parse_and_eval(&env, "   ").unwrap();
        assert_eq!(print(&value), "()");
    }

    #[test]
    fn definitions_made_by_one_call_are_visible_to_the_next() {
        let env = fresh_env();
        assert_eq!(print(&parse_and_eval(&env, "def {x} 100").unwrap()), "()");
        assert_eq!(print(&parse_and_eval(&env, "+ x 1").unwrap()), "101");
    }

    #[test]
    fn end_to_end_scenarios_from_the_spec() {
        let env = fresh_env();
        assert_eq!(print(&parse_and_eval(&env, "+ 1 2 3").unwrap()), "6");
        assert_eq!(print(&parse_and_eval(&env, "(* 2 (- 10 3))").unwrap()), "14");
        assert_eq!(
            print(&parse_and_eval(&env, "/ 10 0").unwrap()),
            "Error: Cannot Divide by Zero!"
        );
        assert_eq!(print(&parse_and_eval(&env, "list 1 2 3 4").unwrap()), "{1 2 3 4}");
        assert_eq!(
            print(&parse_and_eval(&env, "eval (head {(+ 1 2) (+ 10 20)})").unwrap()),
            "3"
        );
        assert_eq!(
            print(&parse_and_eval(&env, "if (> 10 5) {+ 1 1} {+ 100 100}").unwrap()),
            "2"
        );
        assert_eq!(
            print(&parse_and_eval(&env, "== {1 2 3} {1 2 3}").unwrap()),
            "1"
        );
        assert_eq!(print(&parse_and_eval(&env, "== {1 2 3} {1 2}").unwrap()), "0");
        assert_eq!(
            print(&parse_and_eval(&env, "head {}").unwrap()),
            "Error: Function 'head' passed {} for argument 0."
        );
        assert_eq!(
            print(&parse_and_eval(&env, "foo").unwrap()),
            "Error: Unbound Symbol: 'foo'"
        );
    }

    #[test]
    fn partial_application_scenario() {
        let env = fresh_env();
        assert_eq!(
            print(&parse_and_eval(&env, "def {add-mul} (\\ {x y} {+ x (* x y)})").unwrap()),
            "()"
        );
        assert_eq!(
            print(&parse_and_eval(&env, "def {ten-times} (add-mul 10)").unwrap()),
            "()"
        );
        assert_eq!(print(&parse_and_eval(&env, "ten-times 50").unwrap()), "510");
    }
}
