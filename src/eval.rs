// ABOUTME: Evaluator that walks a Value tree and produces a Value
//!
//! `eval` is infallible: it always returns a `Value`, never a `Result`. Runtime
//! failures surface as `Value::Error`, which then short-circuits any enclosing
//! S-Expression. Builtins are free to use `Result<Value, LispError>` internally (see
//! [`crate::error`]); the boundary in [`call`] is where that collapses into a `Value`.

use crate::env::Environment;
use crate::error::LispError;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// Evaluates one `Value` in `env`.
///
/// - A `Symbol` resolves through the environment chain, or becomes an
///   `UnboundSymbol` error.
/// - An `SExpr` is evaluated by [`eval_sexpr`].
/// - Every other variant (`Number`, `Error`, `QExpr`, `Builtin`, `Lambda`) is inert
///   data and evaluates to itself. In particular, quoting with `{}` is the only way
///   to keep an expression from being applied.
pub fn eval(env: &Rc<Environment>, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.get(&name) {
            Some(bound) => bound,
            None => Value::Error(LispError::UnboundSymbol(name).to_string()),
        },
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// Evaluates an S-Expression's children left to right, then applies the result.
///
/// An empty S-Expression evaluates to itself. A single-child S-Expression evaluates
/// its child and then evaluates the *result* again: `(( + 1 2))` behaves exactly
/// like `(+ 1 2)`, not like a one-tuple wrapper. Otherwise the first evaluated child
/// must be a function; it is applied to the rest.
///
/// Evaluation of children stops at the first `Value::Error`, which is returned
/// immediately without evaluating the remaining children.
pub fn eval_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    if items.is_empty() {
        return Value::SExpr(items);
    }

    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let result = eval(env, item);
        if result.is_error() {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.len() == 1 {
        return eval(env, evaluated.into_iter().next().unwrap());
    }

    let mut iter = evaluated.into_iter();
    let func = iter.next().unwrap();
    let args: Vec<Value> = iter.collect();
    call(env, func, args)
}

/// Applies an already-evaluated function value to already-evaluated arguments.
pub fn call(env: &Rc<Environment>, func: Value, args: Vec<Value>) -> Value {
    match func {
        Value::Builtin(builtin) => match (builtin.func)(env, args) {
            Ok(value) => value,
            Err(err) => Value::Error(err.to_string()),
        },
        Value::Lambda(lambda) => call_lambda(env, lambda, args),
        other => Value::Error(
            LispError::BadApply {
                got: other.type_name().to_string(),
            }
            .to_string(),
        ),
    }
}

/// Binds `args` against `lambda`'s remaining formals, one at a time, in the
/// lambda's own environment (not a copy: whoever evaluated the lambda into this
/// call already owns an independent frame courtesy of `Value::clone`).
///
/// - If formals run out while args remain, that is `LambdaArity`: too many
///   arguments were supplied.
/// - If args run out while formals remain, the (now partially bound) lambda is
///   returned as-is, a partial application ready to accept the rest later.
/// - If formals and args are exhausted together, the lambda's environment has its
///   parent transiently pointed at the caller's environment, and the body is
///   reassembled into a single S-Expression and evaluated as one call.
fn call_lambda(caller_env: &Rc<Environment>, mut lambda: Lambda, args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.formals.len();

    for arg in args {
        if lambda.formals.is_empty() {
            return Value::Error(LispError::LambdaArity { given, total }.to_string());
        }
        let formal = lambda.formals.remove(0);
        lambda.env.set(&formal, arg);
    }

    if !lambda.formals.is_empty() {
        return Value::Lambda(lambda);
    }

    lambda.env.set_parent(caller_env.clone());
    eval(&lambda.env, Value::SExpr(lambda.body.clone()))
}
