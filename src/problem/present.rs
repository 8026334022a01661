use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::formatting::{Render, Syntax};
use crate::problem::Verdict;
use crate::rendering::render_with;

static TEMPLATE: &'static str = "input: {input}
{{ if parsed }}parsed: {rendered}
{{ if complete }}parsed everything
valid{{ else }}left: {remaining}
parse error after: {rendered}
invalid{{ endif }}{{ else }}parsed: nothing
left: {remaining}{{ endif }}";

#[derive(Serialize)]
struct Context<'a> {
    input: &'a str,
    parsed: bool,
    complete: bool,
    rendered: String,
    remaining: String,
}

/// Describe the outcome of validating `input`, one fact per line. The
/// parsed expression is highlighted with the given renderer.
pub fn report(
    input: &str,
    verdict: &Verdict,
    renderer: &dyn Render,
) -> Result<String, tinytemplate::error::Error> {
    let context = Context {
        input,
        parsed: verdict
            .expression()
            .is_some(),
        complete: verdict.is_valid(),
        rendered: match verdict.expression() {
            Some(expression) => render_with(renderer, expression),
            None => String::new(),
        },
        remaining: renderer.style(Syntax::Neutral, verdict.remaining()),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("report", TEMPLATE)?;

    tt.render("report", &context)
}
