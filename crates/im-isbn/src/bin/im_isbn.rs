//! Command line interface for im-isbn
//!
//! Built only with the `cli` feature:
//! `cargo install im-isbn --features cli`

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use im_isbn::{extract_isbns_with_positions, parse, to_isbn10, to_isbn13, to_sbn};

#[derive(Parser)]
#[command(
    name = "im-isbn",
    version,
    about = "Validate, normalize, and convert book numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a book number and print its canonical ISBN-13
    Validate {
        /// SBN, ISBN-10, or ISBN-13; hyphens and a urn:isbn: prefix allowed
        input: String,
    },
    /// Convert a book number to another form
    Convert {
        input: String,
        /// Target form
        #[arg(long, value_enum, default_value = "isbn13")]
        to: Form,
    },
    /// Show the structural parts of a book number
    Parts {
        input: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Extract valid ISBNs from text (reads stdin when no text is given)
    Extract {
        text: Option<String>,
        /// Emit JSON records with match positions
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Form {
    Isbn13,
    Isbn10,
    Sbn,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Validate { input } => {
            println!("{}", to_isbn13(&input)?);
        }
        Command::Convert { input, to } => {
            let converted = match to {
                Form::Isbn13 => to_isbn13(&input)?,
                Form::Isbn10 => to_isbn10(&input)?,
                Form::Sbn => to_sbn(&input)?,
            };
            println!("{converted}");
        }
        Command::Parts { input, json } => {
            let parts = parse(&input)?.parts();
            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                println!("prefix: {}", parts.gs1_prefix);
                println!("group:  {}", parts.registration_group);
                println!("body:   {}", parts.body);
                println!("check:  {}", parts.check_digit);
            }
        }
        Command::Extract { text, json } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let found = extract_isbns_with_positions(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                for hit in &found {
                    println!("{}", hit.canonical);
                }
            }
        }
    }
    Ok(())
}
