use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use pexpr::formatting::{Identity, Render};
use pexpr::maybe::{Just, Nothing};
use pexpr::parsing;
use pexpr::problem;
use pexpr::rendering::{self, Terminal};

const SEPARATOR: &str = "|=========||=========||=========||=========";

static DEMONSTRATION: &[&str] = &[
    "ite1+3.a14",
    "item1a3.a14",
    "1)",
    "item1(+1",
    "(item1)+(1)",
    "(item1+(1)",
    "(item1+(1))*1",
    "(item1+(1+(item2^(7+itm1))))*1",
    "(item1+(1+(item2^(7+item1))))*1",
];

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let raw_control_chars = || {
        Arg::new("raw-control-chars")
            .short('R')
            .long("raw-control-chars")
            .action(ArgAction::SetTrue)
            .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file.")
    };

    let matches = Command::new("pexpr")
        .version(VERSION)
        .propagate_version(true)
        .about("Check and reformat small parenthesized arithmetic expressions.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug output."),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the given expressions, reporting how much of each was parsed")
                .arg(raw_control_chars())
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .action(ArgAction::Set)
                        .help("A file containing one expression per line. Use '-' to read from standard input."),
                )
                .arg(
                    Arg::new("expressions")
                        .action(ArgAction::Append)
                        .help("The expressions you want to check."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Parse the given expression and print it as reconstructed from the parse tree")
                .arg(raw_control_chars())
                .arg(
                    Arg::new("expression")
                        .required(true)
                        .help("The expression you want to format."),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Run a fixed set of sample inputs through the checker")
                .arg(raw_control_chars()),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let success = match matches.subcommand() {
        Some(("check", submatches)) => {
            info!("Checking expressions");
            let mut inputs: Vec<String> = Vec::new();

            if let Some(filename) = submatches.get_one::<String>("file") {
                let filename = Path::new(filename);
                match parsing::load(filename) {
                    Ok(content) => inputs.extend(
                        content
                            .lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string),
                    ),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                }
            }

            if let Some(expressions) = submatches.get_many::<String>("expressions") {
                inputs.extend(expressions.cloned());
            }

            if inputs.is_empty() {
                eprintln!(
                    "{}: no expressions given; supply them as arguments or with --file",
                    "error".bright_red()
                );
                std::process::exit(1);
            }

            let renderer = select_renderer(submatches);
            check(&inputs, renderer.as_ref(), false)
        }
        Some(("format", submatches)) => {
            let renderer = select_renderer(submatches);
            match submatches.get_one::<String>("expression") {
                Some(input) => format(input, renderer.as_ref()),
                None => false,
            }
        }
        Some(("demo", submatches)) => {
            let inputs: Vec<String> = DEMONSTRATION
                .iter()
                .map(|input| input.to_string())
                .collect();

            let renderer = select_renderer(submatches);
            check(&inputs, renderer.as_ref(), true);
            true
        }
        Some(_) => {
            println!("No valid subcommand was used");
            false
        }
        None => {
            println!("usage: pexpr [COMMAND] ...");
            println!("Try '--help' for more information.");
            false
        }
    };

    if !success {
        std::process::exit(1);
    }
}

fn select_renderer(submatches: &ArgMatches) -> Box<dyn Render> {
    if submatches.get_flag("raw-control-chars")
        || std::io::stdout().is_terminal()
    {
        Box::new(Terminal)
    } else {
        Box::new(Identity)
    }
}

/// Validate each input and print its report. Returns whether every input
/// was consumed entirely.
fn check(inputs: &[String], renderer: &dyn Render, separated: bool) -> bool {
    let mut all_valid = true;

    if separated {
        println!("{}", SEPARATOR);
    }

    for input in inputs {
        let verdict = problem::validate(input);

        match problem::report(input, &verdict, renderer) {
            Ok(report) => println!("{}", report),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }

        if separated {
            println!("{}", SEPARATOR);
        }

        all_valid &= verdict.is_valid();
    }

    all_valid
}

fn format(input: &str, renderer: &dyn Render) -> bool {
    match parsing::parse(input) {
        Just((expression, "")) => {
            println!("{}", rendering::render_with(renderer, &expression));
            true
        }
        Just((expression, rest)) => {
            eprintln!(
                "{}: input not fully parsed after '{}', left: '{}'",
                "error".bright_red(),
                rendering::render(&expression),
                rest
            );
            false
        }
        Nothing => {
            debug!(input, "nothing parsed");
            eprintln!("{}: unable to parse '{}'", "error".bright_red(), input);
            false
        }
    }
}
