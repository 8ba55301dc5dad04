use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use matchbox::{Mode, Regex, WriteTrace};

const EXIT_MATCHED: u8 = 0;
const EXIT_NOT_MATCHED: u8 = 1;
const EXIT_INVALID_PATTERN: u8 = 4;
const EXIT_FAILURE: u8 = 3;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pattern to match (prompted for if omitted)
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Text to match against (prompted for if omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Match anywhere in the text instead of the whole text
    #[arg(short, long)]
    search: bool,

    /// Print each match attempt to stderr
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: Args) -> Result<u8> {
    let pattern = match args.pattern {
        Some(pattern) => pattern,
        None => prompt("Enter regex: ")?,
    };
    let text = match args.text {
        Some(text) => text,
        None => prompt("Enter text: ")?,
    };

    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("  {pattern}");
            eprintln!("  {}^", " ".repeat(err.pos()));
            return Ok(EXIT_INVALID_PATTERN);
        }
    };

    let mode = if args.search {
        Mode::Search
    } else {
        Mode::Fullmatch
    };

    let matched = if args.trace {
        regex.is_match_with(&text, mode, WriteTrace::new(io::stderr().lock()))
    } else {
        regex.is_match(&text, mode)
    };

    if matched {
        println!("Matched");
        Ok(EXIT_MATCHED)
    } else {
        println!("Not matched");
        Ok(EXIT_NOT_MATCHED)
    }
}

fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(label.as_bytes())?;
    stdout.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read stdin")?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
