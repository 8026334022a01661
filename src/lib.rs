//! Monadic parser combinators, and a grammar for small parenthesized
//! arithmetic expressions built with them.
//!
//! Parsing an input goes through these stages:
//!
//! ```text
//! text (&str)
//!     ↓
//! [parsing::expr] → Maybe<(Expression, remainder)>
//!     ↓
//! [rendering::render] → reconstructed text
//!     ↓
//! [problem::validate] → Verdict, described by problem::report
//! ```

pub mod formatting;
pub mod language;
pub mod maybe;
pub mod parsing;
pub mod problem;
pub mod rendering;
