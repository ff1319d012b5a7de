use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use gematria_engine::alphabet::parse_alphabet_toml;
use gematria_engine::{encode, format_detailed, format_simple, trace_init, Alphabet};

#[derive(Parser)]
#[command(name = "gemtool", about = "Gematria encoding diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the gematria value of a text
    Value {
        /// Text to encode (may include spaces and punctuation)
        text: String,
        /// Print a single sentence instead of the full breakdown
        #[arg(long)]
        simple: bool,
        /// Output the raw result as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Path to a custom alphabet TOML file
        #[arg(long)]
        alphabet: Option<String>,
    },

    /// Encode a file with one phrase per line, printing value<TAB>text
    Batch {
        /// Path to the input file
        input_file: String,
        /// Path to a custom alphabet TOML file
        #[arg(long)]
        alphabet: Option<String>,
    },

    /// Dump the letter table in traditional order
    Letters {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Path to a custom alphabet TOML file
        #[arg(long)]
        alphabet: Option<String>,
    },
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn load_alphabet(path: Option<&str>) -> Alphabet {
    match path {
        Some(p) => {
            let toml_str = die!(fs::read_to_string(p), "Error reading alphabet file: {}");
            die!(parse_alphabet_toml(&toml_str), "Error in alphabet file: {}")
        }
        None => Alphabet::standard().clone(),
    }
}

fn value_cmd(text: &str, simple: bool, json: bool, alphabet: Option<&str>) {
    let alphabet = load_alphabet(alphabet);
    let result = die!(encode(&alphabet, text), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "JSON error: {}");
        println!("{}", out);
    } else if simple {
        println!("{}", format_simple(&result));
    } else {
        print!("{}", format_detailed(&result));
    }
}

fn batch_cmd(input_file: &str, alphabet: Option<&str>) {
    let alphabet = load_alphabet(alphabet);
    let content = die!(fs::read_to_string(input_file), "Error reading input: {}");
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match encode(&alphabet, line) {
            Ok(result) => println!("{}\t{}", result.total, line),
            Err(e) => eprintln!("skipping '{}': {}", line, e),
        }
    }
}

#[derive(Serialize)]
struct LetterRow<'a> {
    letter: char,
    name: &'a str,
    value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_of: Option<char>,
}

fn letters_cmd(json: bool, alphabet: Option<&str>) {
    let alphabet = load_alphabet(alphabet);
    let rows: Vec<LetterRow> = alphabet
        .iter()
        .map(|(letter, entry)| LetterRow {
            letter,
            name: &entry.name,
            value: entry.value,
            final_of: entry.final_of,
        })
        .collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "JSON error: {}");
        println!("{}", out);
        return;
    }

    let name_w = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in rows {
        let base = row
            .final_of
            .map(|b| format!("  (form of {})", b))
            .unwrap_or_default();
        println!(
            "  {}  {:<name_w$}  {:>3}{}",
            row.letter, row.name, row.value, base
        );
    }
}

fn main() {
    trace_init::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Value {
            text,
            simple,
            json,
            alphabet,
        } => value_cmd(&text, simple, json, alphabet.as_deref()),
        Command::Batch {
            input_file,
            alphabet,
        } => batch_cmd(&input_file, alphabet.as_deref()),
        Command::Letters { json, alphabet } => letters_cmd(json, alphabet.as_deref()),
    }
}
