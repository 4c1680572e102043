//! `def` and `=`: variable definition at the two scopes the core supports.
//!
//! Both share the same argument shape: a leading `QExpr` of symbol names
//! followed by exactly that many values, bound pairwise. They differ only in
//! which [`Environment`] method does the binding. `def` walks to the global
//! root; `=` binds into whatever frame is currently evaluating.

use crate::env::Environment;
use crate::error::{LispError, ARITY_AT_LEAST_ONE};
use crate::value::Value;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Scope {
    Global,
    Local,
}

impl Scope {
    fn name(self) -> &'static str {
        match self {
            Scope::Global => "def",
            Scope::Local => "=",
        }
    }
}

fn bind(scope: Scope, env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, LispError> {
    if args.is_empty() {
        return Err(LispError::ArityMismatch {
            function: scope.name().to_string(),
            expected: ARITY_AT_LEAST_ONE.to_string(),
            actual: 0,
        });
    }
    let names_arg = args.remove(0);
    let symbols = match names_arg {
        Value::QExpr(items) => items,
        other => {
            return Err(LispError::BadType {
                function: scope.name().to_string(),
                value: other.to_string(),
                position: 0,
            })
        }
    };

    let mut names = Vec::with_capacity(symbols.len());
    for (i, s) in symbols.into_iter().enumerate() {
        match s {
            Value::Symbol(name) => names.push(name),
            other => {
                return Err(LispError::BadType {
                    function: scope.name().to_string(),
                    value: other.to_string(),
                    position: i + 1,
                })
            }
        }
    }

    if names.len() != args.len() {
        return Err(LispError::ArityMismatch {
            function: scope.name().to_string(),
            expected: names.len().to_string(),
            actual: args.len(),
        });
    }

    for (name, value) in names.into_iter().zip(args) {
        match scope {
            Scope::Global => env.def(&name, value),
            Scope::Local => env.set(&name, value),
        }
    }
    Ok(Value::SExpr(vec![]))
}

pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    bind(Scope::Global, env, args)
}

pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    bind(Scope::Local, env, args)
}

pub fn register(env: &Rc<Environment>) {
    env.set(
        "def",
        Value::Builtin(crate::value::Builtin {
            name: "def",
            func: builtin_def,
        }),
    );
    env.set(
        "=",
        Value::Builtin(crate::value::Builtin {
            name: "=",
            func: builtin_put,
        }),
    );
}
