use std::fs;

use clap::{Parser, ValueEnum};
use skit::{Syntax, run};

/// skit is a pocket-size imperative scripting language with braced and
/// indented surface syntaxes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the argument as script text instead of a path.
    #[arg(short, long)]
    command: bool,

    /// Picks the surface syntax, overriding the file extension.
    #[arg(short, long, value_enum)]
    syntax: Option<SyntaxArg>,

    contents: String,
}

/// Command-line spelling of the surface syntax choice.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SyntaxArg {
    /// Braced syntax with `;`-terminated statements.
    Stream,
    /// Indented syntax with one statement per line.
    Line,
}

impl From<SyntaxArg> for Syntax {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Stream => Self::Stream,
            SyntaxArg::Line => Self::Line,
        }
    }
}

/// Chooses the surface syntax from a script path.
///
/// `.spaces.skit` selects the indented syntax and any other `.skit` path the
/// braced one.
fn syntax_for_path(path: &str) -> Option<Syntax> {
    if path.ends_with(".spaces.skit") {
        return Some(Syntax::Line);
    }
    if path.ends_with(".skit") {
        return Some(Syntax::Stream);
    }
    None
}

fn main() {
    let args = Args::parse();

    let (script, syntax) = if args.command {
        let syntax = args.syntax.map_or(Syntax::Stream, Syntax::from);
        (args.contents, syntax)
    } else {
        let syntax = match args.syntax.map(Syntax::from) {
            Some(syntax) => syntax,
            None => syntax_for_path(&args.contents).unwrap_or_else(|| {
                eprintln!("Cannot tell the syntax of '{}'. Use --syntax or a known extension.",
                          &args.contents);
                std::process::exit(1);
            }),
        };
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the script file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });
        (script, syntax)
    };

    if let Err(e) = run(&script, syntax) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
