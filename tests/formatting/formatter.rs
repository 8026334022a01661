#[cfg(test)]
mod verify {
    use pexpr::formatting::*;
    use pexpr::language::*;
    use pexpr::rendering::{render, render_with};

    fn combine(fragments: Vec<(Syntax, String)>) -> String {
        let mut result = String::new();
        for fragment in fragments {
            result.push_str(&fragment.1);
        }
        result
    }

    /// Wraps every fragment in brackets naming its syntax, so tests can
    /// see which tag each piece of output received.
    struct Tagged;

    impl Render for Tagged {
        fn style(&self, syntax: Syntax, content: &str) -> String {
            format!("[{:?}:{}]", syntax, content)
        }
    }

    #[test]
    fn atoms() {
        assert_eq!(
            render(&Expression::Atom(Atom::Variable(Variable::Item1))),
            "item1"
        );
        assert_eq!(render(&Expression::Atom(Atom::Literal(1.0))), "1");
        assert_eq!(render(&Expression::Atom(Atom::Literal(3.14))), "3.14");
        assert_eq!(render(&Expression::Atom(Atom::Literal(0.5))), "0.5");
    }

    #[test]
    fn parenthesized() {
        let expression = Expression::Parenthesized(Box::new(Expression::Parenthesized(Box::new(
            Expression::Atom(Atom::Variable(Variable::Item2)),
        ))));
        assert_eq!(render(&expression), "((item2))");
    }

    #[test]
    fn binary() {
        let expression = Expression::Binary(
            Operand::Parenthesized(Box::new(Expression::Binary(
                Operand::Atom(Atom::Variable(Variable::Item1)),
                Operator::Subtract,
                Operand::Atom(Atom::Literal(2.0)),
            ))),
            Operator::Divide,
            Operand::Atom(Atom::Variable(Variable::Item2)),
        );

        assert_eq!(render(&expression), "(item1-2)/item2");
        assert_eq!(
            combine(formatter::format_with_renderer(&expression)),
            "(item1-2)/item2"
        );
    }

    #[test]
    fn renderer_sees_every_fragment() {
        let expression = Expression::Binary(
            Operand::Atom(Atom::Literal(7.0)),
            Operator::Multiply,
            Operand::Parenthesized(Box::new(Expression::Atom(Atom::Variable(Variable::Item1)))),
        );

        assert_eq!(
            render_with(&Tagged, &expression),
            "[Numeric:7][Operator:*][Structure:(][Variable:item1][Structure:)]"
        );
        assert_eq!(render_with(&Identity, &expression), "7*(item1)");
    }

    #[test]
    fn operator_symbols() {
        let symbols: String = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Power,
        ]
        .iter()
        .map(Operator::symbol)
        .collect();

        assert_eq!(symbols, "+-*/^");
    }
}
