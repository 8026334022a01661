//! Parser values and the combinators that compose them.
//!
//! A parser is a function from the remaining input to `Maybe` a value
//! paired with whatever input is left over. Parsers hold no state, so the
//! same parser applied to the same input always gives the same answer;
//! that is what makes backtracking in `or()` sound.

use std::ops::BitOr;
use std::rc::Rc;

use crate::maybe::{Just, Maybe, Nothing};

type ParserFn<T> = Rc<dyn for<'i> Fn(&'i str) -> Maybe<(T, &'i str)>>;

pub struct Parser<T> {
    function: ParserFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            function: Rc::clone(&self.function),
        }
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(function: F) -> Parser<T>
    where
        F: for<'i> Fn(&'i str) -> Maybe<(T, &'i str)> + 'static,
    {
        Parser {
            function: Rc::new(function),
        }
    }

    /// Run this parser. On success the remainder is always a suffix of
    /// `input`.
    pub fn parse<'i>(&self, input: &'i str) -> Maybe<(T, &'i str)> {
        (self.function)(input)
    }

    pub fn bind<U: 'static, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> Parser<U> + 'static,
    {
        bind(self, f)
    }

    pub fn or(self, other: Parser<T>) -> Parser<T> {
        or(self, other)
    }

    pub fn map<U: 'static, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> U + 'static,
    {
        map(self, f)
    }
}

/// `a | b` is ordered choice, the same as `or(a, b)`.
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        or(self, rhs)
    }
}

// === Primitive parsers ===

/// Succeed with `value` without consuming any input.
pub fn result<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input| Maybe::wrap((value.clone(), input)))
}

/// Fail on every input.
pub fn zero<T: 'static>() -> Parser<T> {
    Parser::new(|_| Nothing)
}

/// A single ASCII decimal digit, yielding its numeric value.
pub fn digit() -> Parser<u8> {
    Parser::new(|input| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c @ '0'..='9') => Maybe::wrap((c as u8 - b'0', chars.as_str())),
            _ => Nothing,
        }
    })
}

/// Exactly the character `expected`.
pub fn character(expected: char) -> Parser<char> {
    Parser::new(move |input| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c == expected => Maybe::wrap((c, chars.as_str())),
            _ => Nothing,
        }
    })
}

// === Combinators ===

/// Run `parser`, then feed its value to `f` and run the parser that
/// returns on what is left. A failure of `parser` means `f` is never
/// called.
pub fn bind<A: 'static, B: 'static, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    F: Fn(A) -> Parser<B> + 'static,
{
    Parser::new(move |input| {
        parser
            .parse(input)
            .bind(|(value, rest)| f(value).parse(rest))
    })
}

/// Ordered choice. `second` is tried against the original input only if
/// `first` fails; once `first` succeeds its answer is final.
pub fn or<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    Parser::new(move |input| match first.parse(input) {
        Nothing => second.parse(input),
        found => found,
    })
}

pub fn map<A: 'static, B: 'static, F>(parser: Parser<A>, f: F) -> Parser<B>
where
    F: Fn(A) -> B + 'static,
{
    Parser::new(move |input| {
        parser
            .parse(input)
            .map(|(value, rest)| (f(value), rest))
    })
}

/// One or more occurrences of `parser`, as many as will match. Zero
/// matches is a failure.
///
/// `parser` must consume input whenever it succeeds. A success that
/// consumes nothing ends the repetition rather than looping forever.
pub fn many1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let (first, mut rest) = match parser.parse(input) {
            Just(found) => found,
            Nothing => return Nothing,
        };

        let mut results = vec![first];
        loop {
            match parser.parse(rest) {
                Just((value, remaining)) if remaining.len() < rest.len() => {
                    results.push(value);
                    rest = remaining;
                }
                _ => break,
            }
        }

        Maybe::wrap((results, rest))
    })
}

/// Match the literal string `expected` one character at a time. The empty
/// string matches without consuming anything.
pub fn text(expected: &str) -> Parser<String> {
    expected
        .chars()
        .rev()
        .fold(result(String::new()), |tail, c| {
            bind(character(c), move |head| {
                map(tail.clone(), move |rest| {
                    let mut matched = String::with_capacity(rest.len() + head.len_utf8());
                    matched.push(head);
                    matched.push_str(&rest);
                    matched
                })
            })
        })
}

/// Two parsers in sequence, keeping both values.
pub fn chain<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)> {
    Parser::new(move |input| {
        first
            .parse(input)
            .bind(|(a, rest)| {
                second
                    .parse(rest)
                    .map(|(b, rest)| ((a, b), rest))
            })
    })
}

/// Three parsers in sequence, keeping all three values.
pub fn chain3<A: 'static, B: 'static, C: 'static>(
    first: Parser<A>,
    second: Parser<B>,
    third: Parser<C>,
) -> Parser<(A, B, C)> {
    Parser::new(move |input| {
        first
            .parse(input)
            .bind(|(a, rest)| {
                second
                    .parse(rest)
                    .bind(|(b, rest)| {
                        third
                            .parse(rest)
                            .map(|(c, rest)| ((a, b, c), rest))
                    })
            })
    })
}
