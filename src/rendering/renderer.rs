use crate::formatting::*;
use crate::language::*;

/// Rendering happens in two passes. First we convert the expression tree
/// into a Vec of "fragments" (Syntax tag, String pairs). Then we apply the
/// specified renderer to each pair to result in a highlighted String.
pub fn render_with(renderer: &dyn Render, expression: &Expression) -> String {
    // Pass 1: Format tree to tagged fragments
    let fragments = formatter::format_with_renderer(expression);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Reconstruct the text of an expression, without any markup.
pub fn render(expression: &Expression) -> String {
    render_with(&Identity, expression)
}

fn render_to_string(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
