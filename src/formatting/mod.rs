//! Formatting expression trees into tagged text fragments

pub mod formatter;
mod syntax;

pub use syntax::*;
