//! Grammar for parenthesized arithmetic expressions
//!
//! ```text
//! <var>    ::= 'item1' | 'item2'
//! <atom>   ::= <literal> | <var>
//! <pexpr>  ::= '(' <expr> ')'
//! <op>     ::= '+' | '-' | '*' | '/' | '^'
//! <opexpr> ::= <pexpr> <op> <pexpr>
//!            | <pexpr> <op> <atom>
//!            | <atom>  <op> <pexpr>
//!            | <atom>  <op> <atom>
//! <expr>   ::= <opexpr> | <pexpr> | <atom>
//! ```
//!
//! Every alternation is ordered: the first alternative to succeed wins and
//! later ones are never consulted. Because either side of an `<opexpr>` must
//! be an atom or a parenthesized expression, `1+2+3` is not a complete
//! expression; it has to be written `1+(2+3)` or `(1+2)+3`.
//!
//! A parenthesized expression always starts with `(` and an atom never
//! does, so at any position at most one of `<pexpr>` and `<atom>` can
//! match. The four `<opexpr>` shapes therefore collapse to
//! `(<pexpr> | <atom>) <op> (<pexpr> | <atom>)`, and `<expr>` to "an
//! operand, then `<op> <operand>` if present". Both forms give identical
//! results; the collapsed one parses each operand once instead of retrying
//! it per alternative, which keeps nesting linear rather than exponential.

use crate::language::*;
use crate::maybe::{Just, Nothing};

use super::literal::literal;
use super::parser::*;
use super::stack::ensure_sufficient_stack;

thread_local! {
    static EXPR: Parser<Expression> = build_expr();
}

pub fn atom() -> Parser<Atom> {
    literal().map(Atom::Literal)
        | text("item1").map(|_| Atom::Variable(Variable::Item1))
        | text("item2").map(|_| Atom::Variable(Variable::Item2))
}

/// `'(' <expr> ')'`, as a parenthesized expression.
pub fn pexpr() -> Parser<Expression> {
    parenthesized().map(Expression::Parenthesized)
}

pub fn op() -> Parser<Operator> {
    character('+').map(|_| Operator::Add)
        | character('-').map(|_| Operator::Subtract)
        | character('*').map(|_| Operator::Multiply)
        | character('/').map(|_| Operator::Divide)
        | character('^').map(|_| Operator::Power)
}

/// A binary operation between two operands. Equivalent to trying, in
/// order: parenthesized on both sides, parenthesized then atom, atom then
/// parenthesized, and finally atom on both sides.
pub fn opexpr() -> Parser<Expression> {
    chain3(operand(), op(), operand())
        .map(|(left, operator, right)| Expression::Binary(left, operator, right))
}

/// Any expression. Trailing input is left in the remainder for the caller
/// to deal with.
///
/// The parser is built once per thread and shared; it holds no state, so
/// every caller sees the same answer for the same input.
pub fn expr() -> Parser<Expression> {
    EXPR.with(Parser::clone)
}

/// `<opexpr> | <pexpr> | <atom>`. The leading operand is parsed once; if
/// no operator and second operand follow it, it stands on its own.
fn build_expr() -> Parser<Expression> {
    let first = operand();
    let tail = chain(op(), operand());

    Parser::new(move |input| {
        first
            .parse(input)
            .map(|(left, rest)| match tail.parse(rest) {
                Just(((operator, right), rest)) => (Expression::Binary(left, operator, right), rest),
                Nothing => (Expression::from(left), rest),
            })
    })
}

fn operand() -> Parser<Operand> {
    parenthesized().map(Operand::Parenthesized) | atom().map(Operand::Atom)
}

fn parenthesized() -> Parser<Box<Expression>> {
    chain3(character('('), recursive(), character(')')).map(|(_, inner, _)| Box::new(inner))
}

/// Refer back to `expr` from inside its own definition. The shared parser
/// is looked up when run, not when built, so constructing it does not
/// recurse.
fn recursive() -> Parser<Expression> {
    Parser::new(|input| {
        let rule = expr();
        ensure_sufficient_stack(|| rule.parse(input))
    })
}
