use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use jsonsmith::{dom_from_value, print_compact, print_pretty, DEFAULT_RECURSION_LIMIT};

/// Reprint JSON documents in compact or pretty form.
///
/// jsmith reads JSON from stdin or files and writes it back out through the
/// jsonsmith document model. By default output is pretty-printed when stdout
/// is a terminal and minified when piped; --pretty and --compact force a mode.
#[derive(Parser, Debug)]
#[command(name = "jsmith")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Minify output (remove all whitespace).
    #[arg(short, long, conflicts_with = "pretty")]
    compact: bool,

    /// Pretty-print output (tab-indented object members).
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jsmith: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = if args.files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        vec![buffer]
    } else {
        let mut contents = Vec::with_capacity(args.files.len());
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            contents.push(content);
        }
        contents
    };

    let pretty = if args.compact {
        false
    } else if args.pretty {
        true
    } else {
        io::stdout().is_terminal()
    };

    let mut output = String::new();
    for input in &inputs {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let doc = dom_from_value(&value, DEFAULT_RECURSION_LIMIT)?;
        let text = if pretty { print_pretty(&doc)? } else { print_compact(&doc)? };
        output.push_str(&text);
        output.push('\n');
    }

    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
