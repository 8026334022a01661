//! Types representing the parse tree of an arithmetic expression

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Item1,
    Item2,
}

impl Variable {
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Item1 => "item1",
            Variable::Item2 => "item2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Variable(Variable),
    Literal(f64),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Variable(variable) => f.write_str(variable.name()),
            Atom::Literal(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

/// Either side of a binary expression. A binary expression cannot appear
/// here directly; it has to be wrapped in parentheses first.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Atom(Atom),
    Parenthesized(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Atom(Atom),
    Parenthesized(Box<Expression>),
    Binary(Operand, Operator, Operand),
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Atom(atom) => Expression::Atom(atom),
            Operand::Parenthesized(inner) => Expression::Parenthesized(inner),
        }
    }
}
