//! List primitives: `list`, `head`, `tail`, `join`, `eval`.
//!
//! `list`, `head`, `tail`, and `join` only ever move and retag children; none
//! of them evaluate anything. `eval` is the one primitive that crosses the
//! Q-expression/S-expression boundary: it retypes a quoted list to applicable
//! and hands it back to the evaluator.

use crate::env::Environment;
use crate::error::{LispError, ARITY_ONE};
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

fn bad_type(function: &str, position: usize, value: &Value) -> LispError {
    LispError::BadType {
        function: function.to_string(),
        value: value.to_string(),
        position,
    }
}

fn arity(function: &str, expected: &str, actual: usize) -> LispError {
    LispError::ArityMismatch {
        function: function.to_string(),
        expected: expected.to_string(),
        actual,
    }
}

/// `list a b c`: packages already-evaluated arguments as a Q-expression.
pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    Ok(Value::QExpr(args))
}

/// `head q`: the first element of a non-empty Q-expression, as a singleton Q-expression.
pub fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(arity("head", ARITY_ONE, args.len()));
    }
    match args.pop().unwrap() {
        Value::QExpr(items) if !items.is_empty() => Ok(Value::QExpr(vec![items[0].clone()])),
        other @ Value::QExpr(_) => Err(bad_type("head", 0, &other)),
        other => Err(bad_type("head", 0, &other)),
    }
}

/// `tail q`: every element but the first, as a Q-expression.
pub fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(arity("tail", ARITY_ONE, args.len()));
    }
    match args.pop().unwrap() {
        Value::QExpr(mut items) if !items.is_empty() => {
            items.remove(0);
            Ok(Value::QExpr(items))
        }
        other @ Value::QExpr(_) => Err(bad_type("tail", 0, &other)),
        other => Err(bad_type("tail", 0, &other)),
    }
}

/// `join q1 q2 ...`: concatenates any number of Q-expressions in order.
pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::QExpr(items) => joined.extend(items),
            other => return Err(bad_type("join", i, &other)),
        }
    }
    Ok(Value::QExpr(joined))
}

/// `eval q`: retypes a Q-expression to an S-expression and evaluates it.
pub fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(arity("eval", ARITY_ONE, args.len()));
    }
    match args.pop().unwrap() {
        Value::QExpr(items) => Ok(eval(env, Value::SExpr(items))),
        other => Err(bad_type("eval", 0, &other)),
    }
}

pub fn register(env: &Rc<Environment>) {
    env.set(
        "list",
        Value::Builtin(crate::value::Builtin {
            name: "list",
            func: builtin_list,
        }),
    );
    env.set(
        "head",
        Value::Builtin(crate::value::Builtin {
            name: "head",
            func: builtin_head,
        }),
    );
    env.set(
        "tail",
        Value::Builtin(crate::value::Builtin {
            name: "tail",
            func: builtin_tail,
        }),
    );
    env.set(
        "join",
        Value::Builtin(crate::value::Builtin {
            name: "join",
            func: builtin_join,
        }),
    );
    env.set(
        "eval",
        Value::Builtin(crate::value::Builtin {
            name: "eval",
            func: builtin_eval,
        }),
    );
}
