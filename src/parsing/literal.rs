//! Numeric literals: digits, optionally followed by a point and more
//! digits.

use super::parser::*;

/// A decimal number such as `42` or `3.14`. The fractional form is tried
/// first; it needs at least one digit after the point, so `3.` matches
/// only the `3` and leaves the point behind.
pub fn literal() -> Parser<f64> {
    let decimal = chain3(many1(digit()), character('.'), many1(digit())).bind(
        |(whole, point, fraction)| {
            let mut number = spell(&whole);
            number.push(point);
            number.push_str(&spell(&fraction));
            to_number(&number)
        },
    );

    let integral = many1(digit()).bind(|whole| to_number(&spell(&whole)));

    decimal | integral
}

fn spell(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect()
}

fn to_number(number: &str) -> Parser<f64> {
    match number.parse::<f64>() {
        Ok(value) => result(value),
        Err(_) => zero(),
    }
}
