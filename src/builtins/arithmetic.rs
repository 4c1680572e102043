//! Arithmetic: `+`/`add`, `-`/`sub`, `*`/`mult`, `/`/`div`, `%`/`mod`, `^`/`pow`.
//!
//! Every operator is left-folded over its (already type-checked) arguments.
//! `-` is the one operator with a unary shape: a single argument negates
//! rather than folding against nothing. Division and modulo by zero are the
//! only arithmetic failure modes this stage defines. Overflow is left to
//! Rust's own integer semantics, same as the rest of the core.

use crate::env::Environment;
use crate::error::{LispError, ARITY_AT_LEAST_ONE};
use crate::value::Value;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

fn apply(function: &str, op: Op, args: Vec<Value>) -> Result<Value, LispError> {
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::Number(_)) {
            return Err(LispError::BadType {
                function: function.to_string(),
                value: arg.to_string(),
                position: i,
            });
        }
    }
    if args.is_empty() {
        return Err(LispError::ArityMismatch {
            function: function.to_string(),
            expected: ARITY_AT_LEAST_ONE.to_string(),
            actual: 0,
        });
    }

    let mut numbers = args.into_iter().map(|v| match v {
        Value::Number(n) => n,
        _ => unreachable!("checked above"),
    });
    let mut acc = numbers.next().unwrap();

    if matches!(op, Op::Sub) && numbers.len() == 0 {
        return Ok(Value::Number(-acc));
    }

    for n in numbers {
        acc = match op {
            Op::Add => acc + n,
            Op::Sub => acc - n,
            Op::Mul => acc * n,
            Op::Div if n == 0 => return Err(LispError::DivideByZero),
            Op::Div => acc / n,
            Op::Mod if n == 0 => return Err(LispError::DivideByZero),
            Op::Mod => acc % n,
            Op::Pow => acc.pow(n as u32),
        };
    }
    Ok(Value::Number(acc))
}

macro_rules! op_fn {
    ($fn_name:ident, $display_name:literal, $op:expr) => {
        pub fn $fn_name(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LispError> {
            apply($display_name, $op, args)
        }
    };
}

op_fn!(builtin_plus, "+", Op::Add);
op_fn!(builtin_add, "add", Op::Add);
op_fn!(builtin_minus, "-", Op::Sub);
op_fn!(builtin_sub, "sub", Op::Sub);
op_fn!(builtin_star, "*", Op::Mul);
op_fn!(builtin_mult, "mult", Op::Mul);
op_fn!(builtin_slash, "/", Op::Div);
op_fn!(builtin_div, "div", Op::Div);
op_fn!(builtin_percent, "%", Op::Mod);
op_fn!(builtin_mod, "mod", Op::Mod);
op_fn!(builtin_caret, "^", Op::Pow);
op_fn!(builtin_pow, "pow", Op::Pow);

pub fn register(env: &Rc<Environment>) {
    let bind = |name: &'static str, func: fn(&Rc<Environment>, Vec<Value>) -> Result<Value, LispError>| {
        env.set(name, Value::Builtin(crate::value::Builtin { name, func }));
    };
    bind("+", builtin_plus);
    bind("add", builtin_add);
    bind("-", builtin_minus);
    bind("sub", builtin_sub);
    bind("*", builtin_star);
    bind("mult", builtin_mult);
    bind("/", builtin_slash);
    bind("div", builtin_div);
    bind("%", builtin_percent);
    bind("mod", builtin_mod);
    bind("^", builtin_caret);
    bind("pow", builtin_pow);
}
