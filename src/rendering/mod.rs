//! Rendering expressions back to text, optionally highlighted

mod renderer;
mod terminal;

pub use renderer::{render, render_with};
pub use terminal::Terminal;
