// ABOUTME: Error types for builtin and evaluation failures

use thiserror::Error;

// Arity constant strings, reused across builtins so message wording stays consistent.
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_THREE: &str = "3";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";

/// Structured failure produced by a builtin or the evaluator.
///
/// `LispError` is a Rust-level convenience for building consistent messages with `?`
/// inside builtin bodies; it never unwinds the evaluator. At the point a builtin is
/// dispatched, `Result<Value, LispError>` collapses into a plain `Value`: on `Err`,
/// `Value::Error(err.to_string())`. Runtime errors are first-class values that flow
/// through `eval`/`eval_sexpr`, not exceptions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LispError {
    #[error("Unbound Symbol: '{0}'")]
    UnboundSymbol(String),

    #[error("Function '{function}' passed {value} for argument {position}.")]
    BadType {
        function: String,
        value: String,
        position: usize,
    },

    #[error("Function '{function}' passed incorrect number of arguments. Got {actual}, Expected {expected}.")]
    ArityMismatch {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("Cannot Divide by Zero!")]
    DivideByZero,

    #[error("Invalid Number")]
    BadNumber,

    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function")]
    BadApply { got: String },

    #[error("Function passed too many arguments. Got {given}, Expected {total}")]
    LambdaArity { given: usize, total: usize },
}
