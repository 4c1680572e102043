// ABOUTME: Value types representing Lispy data: numbers, symbols, errors, lists, and functions

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A native builtin: a name (for error messages and display) plus the function pointer.
///
/// Builtins never capture state: they take the calling environment and an already
/// evaluated argument list and return a value or a structured error.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&Rc<Environment>, Vec<Value>) -> Result<Value, crate::error::LispError>,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.func as usize == other.func as usize
    }
}

/// A user-defined function: formals, an unevaluated body, and its own captured environment.
///
/// `env` is the lambda's private frame. It starts with no parent; a call transiently
/// points its parent at the caller's environment so the body can see both its own
/// bound formals and the lexical scope the lambda closed over.
#[derive(Debug)]
pub struct Lambda {
    pub formals: Vec<String>,
    pub body: Vec<Value>,
    pub env: Rc<Environment>,
}

impl Lambda {
    /// Structural equality: formals and body, never the closure frame.
    fn structurally_eq(&self, other: &Lambda) -> bool {
        self.formals == other.formals && self.body == other.body
    }
}

#[derive(Debug)]
pub enum Value {
    Number(i64),
    Symbol(String),
    Error(String),
    /// Applicable list, evaluated by function application.
    SExpr(Vec<Value>),
    /// Quoted list: data, never applied until converted via `eval`.
    QExpr(Vec<Value>),
    Builtin(Builtin),
    Lambda(Lambda),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

/// Deep-copy clone: a `Lambda`'s environment is duplicated rather than shared, so two
/// `Value`s never alias the same mutable frame. This is what makes partial application
/// of the same source lambda produce independent results on each call.
impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::Error(s) => Value::Error(s.clone()),
            Value::SExpr(items) => Value::SExpr(items.clone()),
            Value::QExpr(items) => Value::QExpr(items.clone()),
            Value::Builtin(b) => Value::Builtin(*b),
            Value::Lambda(l) => Value::Lambda(Lambda {
                formals: l.formals.clone(),
                body: l.body.clone(),
                env: l.env.deep_clone(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => a.structurally_eq(b),
            _ => false,
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::SExpr(items) => {
                write!(f, "(")?;
                write_children(f, items)?;
                write!(f, ")")
            }
            Value::QExpr(items) => {
                write!(f, "{{")?;
                write_children(f, items)?;
                write!(f, "}}")
            }
            Value::Builtin(_) => write!(f, "<function>"),
            Value::Lambda(l) => {
                write!(f, "(\\ {{")?;
                for (i, formal) in l.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", formal)?;
                }
                write!(f, "}} {{")?;
                write_children(f, &l.body)?;
                write!(f, "}})")
            }
        }
    }
}
