//! Turn an expression tree back into text

use crate::formatting::*;
use crate::language::*;

/// Walk the expression and emit its text as a sequence of tagged fragments.
/// Concatenating the content of the fragments gives back the source of a
/// fully consumed parse.
pub fn format_with_renderer(expression: &Expression) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();
    output.format_expression(expression);
    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_char(&mut self, syntax: Syntax, c: char) {
        self.fragments
            .push((syntax, c.to_string()));
    }

    fn format_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Atom(atom) => self.format_atom(atom),
            Expression::Parenthesized(inner) => self.format_parenthesized(inner),
            Expression::Binary(left, operator, right) => {
                self.format_operand(left);
                self.append_char(Syntax::Operator, operator.symbol());
                self.format_operand(right);
            }
        }
    }

    fn format_operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Atom(atom) => self.format_atom(atom),
            Operand::Parenthesized(inner) => self.format_parenthesized(inner),
        }
    }

    fn format_parenthesized(&mut self, inner: &Expression) {
        self.append_char(Syntax::Structure, '(');
        self.format_expression(inner);
        self.append_char(Syntax::Structure, ')');
    }

    fn format_atom(&mut self, atom: &Atom) {
        match atom {
            Atom::Variable(variable) => self.append(Syntax::Variable, variable.name()),
            Atom::Literal(_) => self.append(Syntax::Numeric, &atom.to_string()),
        }
    }
}
