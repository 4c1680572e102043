// ABOUTME: Grammar and parser for turning source text into an untyped concrete syntax tree
//!
//! ```text
//! number : /-?[0-9]+/
//! symbol : /[a-zA-Z0-9_+\-*^\/\\=<>!&%]+/
//! sexpr  : '(' expr* ')'
//! qexpr  : '{' expr* '}'
//! expr   : number | symbol | sexpr | qexpr
//! program: expr*
//! ```
//!
//! Parsing is pure and total for well-formed input: the same source string always
//! produces the same tree, and no two nodes share substructure. The tree is generic:
//! `SyntaxNode` carries no evaluation semantics, only the shape the grammar matched;
//! [`crate::reader`] is what turns it into a [`crate::value::Value`].

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace1, one_of},
    combinator::{opt, recognize},
    multi::many0,
    IResult, Parser,
};

/// A node of the concrete syntax tree, tagged the way the grammar names it.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    Number(String),
    Symbol(String),
    SExpr(Vec<SyntaxNode>),
    QExpr(Vec<SyntaxNode>),
}

const SYMBOL_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&^%";

fn ws(input: &str) -> IResult<&str, ()> {
    many0(multispace1).map(|_| ()).parse(input)
}

fn parse_number(input: &str) -> IResult<&str, SyntaxNode> {
    recognize((opt(char('-')), digit1))
        .map(|s: &str| SyntaxNode::Number(s.to_string()))
        .parse(input)
}

fn parse_symbol(input: &str) -> IResult<&str, SyntaxNode> {
    recognize(nom::multi::many1(one_of(SYMBOL_CHARS)))
        .map(|s: &str| SyntaxNode::Symbol(s.to_string()))
        .parse(input)
}

fn parse_sexpr(input: &str) -> IResult<&str, SyntaxNode> {
    let (input, _) = char('(')(input)?;
    let (input, children) = parse_children(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, SyntaxNode::SExpr(children)))
}

fn parse_qexpr(input: &str) -> IResult<&str, SyntaxNode> {
    let (input, _) = char('{')(input)?;
    let (input, children) = parse_children(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, SyntaxNode::QExpr(children)))
}

fn parse_children(mut input: &str) -> IResult<&str, Vec<SyntaxNode>> {
    let mut children = Vec::new();
    loop {
        let (rest, _) = ws(input)?;
        match parse_expr(rest) {
            Ok((rest, node)) => {
                children.push(node);
                input = rest;
            }
            Err(_) => {
                input = rest;
                break;
            }
        }
    }
    Ok((input, children))
}

fn parse_expr(input: &str) -> IResult<&str, SyntaxNode> {
    alt((parse_sexpr, parse_qexpr, parse_number, parse_symbol)).parse(input)
}

/// Parses every top-level expression in `input` (`program: expr*`).
///
/// On failure, the message locates the first unexpected character rather than
/// surfacing raw `nom` error internals, per the grammar's diagnostic contract.
pub fn parse_program(input: &str) -> Result<Vec<SyntaxNode>, String> {
    let mut remaining = input;
    let mut program = Vec::new();

    loop {
        let (rest, _) = ws(remaining).unwrap_or((remaining, ()));
        if rest.is_empty() {
            return Ok(program);
        }
        match parse_expr(rest) {
            Ok((rest, node)) => {
                program.push(node);
                remaining = rest;
            }
            Err(_) => {
                let offset = input.len() - rest.len();
                let unexpected = rest.chars().next().unwrap_or('\0');
                return Err(format!(
                    "Parse error: unexpected character '{}' at position {}",
                    unexpected, offset
                ));
            }
        }
    }
}
