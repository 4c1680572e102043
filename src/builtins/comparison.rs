//! Ordering (`>`, `>=`, `<`, `<=`) and equality (`==`, `!=`).
//!
//! Ordering requires exactly two `Number` arguments. Equality accepts any two
//! `Value`s and defers to `Value`'s own structural `PartialEq`, so `==`/`!=`
//! work uniformly across numbers, symbols, errors, and both list flavors,
//! including nested ones.

use crate::env::Environment;
use crate::error::{LispError, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Order {
    Gt,
    Ge,
    Lt,
    Le,
}

fn as_number(function: &str, args: &[Value], position: usize) -> Result<i64, LispError> {
    match &args[position] {
        Value::Number(n) => Ok(*n),
        other => Err(LispError::BadType {
            function: function.to_string(),
            value: other.to_string(),
            position,
        }),
    }
}

fn compare(function: &str, order: Order, args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::ArityMismatch {
            function: function.to_string(),
            expected: ARITY_TWO.to_string(),
            actual: args.len(),
        });
    }
    let a = as_number(function, &args, 0)?;
    let b = as_number(function, &args, 1)?;
    let result = match order {
        Order::Gt => a > b,
        Order::Ge => a >= b,
        Order::Lt => a < b,
        Order::Le => a <= b,
    };
    Ok(Value::Number(result as i64))
}

pub fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    compare(">", Order::Gt, args)
}

pub fn builtin_ge(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    compare(">=", Order::Ge, args)
}

pub fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    compare("<", Order::Lt, args)
}

pub fn builtin_le(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    compare("<=", Order::Le, args)
}

pub fn builtin_eq(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::ArityMismatch {
            function: "==".to_string(),
            expected: ARITY_TWO.to_string(),
            actual: args.len(),
        });
    }
    Ok(Value::Number((args[0] == args[1]) as i64))
}

pub fn builtin_ne(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::ArityMismatch {
            function: "!=".to_string(),
            expected: ARITY_TWO.to_string(),
            actual: args.len(),
        });
    }
    Ok(Value::Number((args[0] != args[1]) as i64))
}

pub fn register(env: &Rc<Environment>) {
    let bind = |name: &'static str, func: fn(&Rc<Environment>, Vec<Value>) -> Result<Value, LispError>| {
        env.set(name, Value::Builtin(crate::value::Builtin { name, func }));
    };
    bind(">", builtin_gt);
    bind(">=", builtin_ge);
    bind("<", builtin_lt);
    bind("<=", builtin_le);
    bind("==", builtin_eq);
    bind("!=", builtin_ne);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> Value {
        Value::Number(v)
    }

    #[test]
    fn ordering_examples() {
        let env = Environment::new();
        assert_eq!(builtin_gt(&env, vec![n(10), n(5)]).unwrap(), n(1));
        assert_eq!(builtin_lt(&env, vec![n(10), n(5)]).unwrap(), n(0));
        assert_eq!(builtin_ge(&env, vec![n(5), n(5)]).unwrap(), n(1));
        assert_eq!(builtin_le(&env, vec![n(6), n(5)]).unwrap(), n(0));
    }

    #[test]
    fn equality_uses_structural_value_equality() {
        let env = Environment::new();
        let a = Value::QExpr(vec![n(1), n(2), n(3)]);
        let b = Value::QExpr(vec![n(1), n(2), n(3)]);
        let c = Value::QExpr(vec![n(1), n(2)]);
        assert_eq!(builtin_eq(&env, vec![a.clone(), b]).unwrap(), n(1));
        assert_eq!(builtin_eq(&env, vec![a.clone(), c.clone()]).unwrap(), n(0));
        assert_eq!(builtin_ne(&env, vec![a, c]).unwrap(), n(1));
    }

    #[test]
    fn ordering_rejects_non_numbers() {
        let env = Environment::new();
        let err = builtin_gt(&env, vec![n(1), Value::Symbol("x".to_string())]).unwrap_err();
        assert_eq!(
            err,
            LispError::BadType {
                function: ">".to_string(),
                value: "x".to_string(),
                position: 1,
            }
        );
    }
}
