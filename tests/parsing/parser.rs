#[cfg(test)]
mod verify {
    use pexpr::maybe::{Just, Nothing};
    use pexpr::parsing::literal::literal;
    use pexpr::parsing::parser::*;

    #[test]
    fn result_consumes_nothing() {
        for input in ["", "abc", "(item1)"] {
            assert_eq!(result(42).parse(input), Just((42, input)));
        }
    }

    #[test]
    fn zero_always_fails() {
        let p: Parser<char> = zero();
        assert_eq!(p.parse(""), Nothing);
        assert_eq!(p.parse("abc"), Nothing);
    }

    #[test]
    fn character_matching() {
        assert_eq!(character('a').parse(""), Nothing);
        assert_eq!(character('a').parse("abc"), Just(('a', "bc")));
        assert_eq!(character('a').parse("xyz"), Nothing);
    }

    #[test]
    fn bind_threads_remainder() {
        let p = bind(digit(), |first| map(digit(), move |second| first * 10 + second));
        assert_eq!(p.parse("42!"), Just((42, "!")));
        assert_eq!(p.parse("4!"), Nothing);
        assert_eq!(p.parse("!"), Nothing);
    }

    #[test]
    fn bind_never_runs_continuation_after_failure() {
        let p = bind(character('a'), |_| -> Parser<char> { panic!("must not be built") });
        assert_eq!(p.parse("b"), Nothing);
    }

    #[test]
    fn or_prefers_first_success() {
        let p = or(text("ab"), text("a"));
        assert_eq!(p.parse("abc"), Just(("ab".to_string(), "c")));

        // first success is final even though the second alternative would
        // have matched differently
        let p = or(text("a"), text("ab"));
        assert_eq!(p.parse("abc"), Just(("a".to_string(), "bc")));
    }

    #[test]
    fn or_retries_from_original_input() {
        // the first branch consumes "a" before failing on 'x'
        let p = or(text("ax"), text("ab"));
        assert_eq!(p.parse("abc"), Just(("ab".to_string(), "c")));

        let p = or(zero(), character('q'));
        assert_eq!(p.parse("q"), Just(('q', "")));
        assert_eq!(p.parse("r"), Nothing);
    }

    #[test]
    fn operator_choice_matches_or() {
        let p = character('x') | character('y') | character('z');
        assert_eq!(p.parse("zed"), Just(('z', "ed")));
        assert_eq!(p.parse("abc"), Nothing);
    }

    #[test]
    fn many1_digits() {
        assert_eq!(many1(digit()).parse("123abc"), Just((vec![1, 2, 3], "abc")));
        assert_eq!(many1(digit()).parse("abc"), Nothing);
        assert_eq!(many1(digit()).parse(""), Nothing);
        assert_eq!(many1(digit()).parse("9"), Just((vec![9], "")));
    }

    #[test]
    fn many1_long_run() {
        let input = "7".repeat(100_000);
        match many1(digit()).parse(&input) {
            Just((digits, rest)) => {
                assert_eq!(digits.len(), 100_000);
                assert_eq!(rest, "");
            }
            Nothing => panic!("expected a match"),
        }
    }

    #[test]
    fn text_matching() {
        assert_eq!(text("").parse("abc"), Just((String::new(), "abc")));
        assert_eq!(text("item1").parse("item1+2"), Just(("item1".to_string(), "+2")));
        assert_eq!(text("item1").parse("item"), Nothing);
        assert_eq!(text("item1").parse("ite1"), Nothing);
    }

    #[test]
    fn chain3_keeps_all_values_in_order() {
        let p = chain3(character('('), digit(), character(')'));
        assert_eq!(p.parse("(5)x"), Just((('(', 5, ')'), "x")));
        assert_eq!(p.parse("(5"), Nothing);
    }

    #[test]
    fn literal_forms() {
        assert_eq!(literal().parse("3.14x"), Just((3.14, "x")));
        assert_eq!(literal().parse("3.x"), Just((3.0, ".x")));
        assert_eq!(literal().parse("12"), Just((12.0, "")));
    }

    #[test]
    fn parsers_are_reusable() {
        let p = many1(digit());
        let first = p.parse("12ab");
        let second = p
            .clone()
            .parse("12ab");
        assert_eq!(first, second);
    }
}
