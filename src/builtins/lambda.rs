//! `\ {formals} {body}`: the lambda constructor.
//!
//! Produces a `Lambda` with a fresh, empty, parentless environment. That
//! frame accumulates bound formals across calls (including partial
//! application); its parent is only ever set transiently, for the duration
//! of a saturating call, by [`crate::eval::call`].

use crate::env::Environment;
use crate::error::{LispError, ARITY_TWO};
use crate::value::{Lambda, Value};
use std::rc::Rc;

pub fn builtin_lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::ArityMismatch {
            function: "\\".to_string(),
            expected: ARITY_TWO.to_string(),
            actual: args.len(),
        });
    }
    let body = args.pop().unwrap();
    let formals = args.pop().unwrap();

    let formal_items = match formals {
        Value::QExpr(items) => items,
        other => {
            return Err(LispError::BadType {
                function: "\\".to_string(),
                value: other.to_string(),
                position: 0,
            })
        }
    };
    let body_items = match body {
        Value::QExpr(items) => items,
        other => {
            return Err(LispError::BadType {
                function: "\\".to_string(),
                value: other.to_string(),
                position: 1,
            })
        }
    };

    let mut formal_names = Vec::with_capacity(formal_items.len());
    for (i, f) in formal_items.into_iter().enumerate() {
        match f {
            Value::Symbol(name) => formal_names.push(name),
            other => {
                return Err(LispError::BadType {
                    function: "\\".to_string(),
                    value: other.to_string(),
                    position: i,
                })
            }
        }
    }

    Ok(Value::Lambda(Lambda {
        formals: formal_names,
        body: body_items,
        env: Environment::new(),
    }))
}

pub fn register(env: &Rc<Environment>) {
    env.set(
        "\\",
        Value::Builtin(crate::value::Builtin {
            name: "\\",
            func: builtin_lambda,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_lambda_with_an_empty_fresh_environment() {
        let env = Environment::new();
        let result = builtin_lambda(
            &env,
            vec![
                Value::QExpr(vec![Value::Symbol("x".to_string()), Value::Symbol("y".to_string())]),
                Value::QExpr(vec![Value::Symbol("x".to_string())]),
            ],
        )
        .unwrap();
        match result {
            Value::Lambda(l) => {
                assert_eq!(l.formals, vec!["x".to_string(), "y".to_string()]);
                assert_eq!(l.body, vec![Value::Symbol("x".to_string())]);
                assert_eq!(l.env.get("x"), None);
            }
            other => panic!("expected a Lambda, got {other:?}"),
        }
    }

    #[test]
    fn non_symbol_formal_is_a_bad_type_error() {
        let env = Environment::new();
        let err = builtin_lambda(
            &env,
            vec![
                Value::QExpr(vec![Value::Number(1)]),
                Value::QExpr(vec![]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LispError::BadType {
                function: "\\".to_string(),
                value: "1".to_string(),
                position: 0,
            }
        );
    }

    #[test]
    fn requires_exactly_two_qexpr_arguments() {
        let env = Environment::new();
        let err = builtin_lambda(&env, vec![Value::QExpr(vec![])]).unwrap_err();
        assert_eq!(
            err,
            LispError::ArityMismatch {
                function: "\\".to_string(),
                expected: "2".to_string(),
                actual: 1,
            }
        );
    }
}
