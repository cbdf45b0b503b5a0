use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use romakana::romaji::{default_toml, parse_romaji_toml};
use romakana::RomajiConverter;

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji transliteration diagnostics")]
struct Cli {
    /// Path to a custom mapping table (TOML with a [mappings] section)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Directory for trace logs (requires the `trace` build feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert romaji text to kana
    Convert {
        /// Text to convert (reads stdin lines when omitted)
        text: Option<String>,
        /// Emit katakana instead of hiragana
        #[arg(long)]
        katakana: bool,
        /// Treat input as still being typed (leaves a trailing `n` unresolved)
        #[arg(long)]
        incremental: bool,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Convert a file of inputs (one per line) and write JSONL records
    Batch {
        /// Path to the input file (one romaji text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Emit katakana instead of hiragana
        #[arg(long)]
        katakana: bool,
        /// Treat inputs as still being typed
        #[arg(long)]
        incremental: bool,
    },

    /// Dump the active mapping table
    Table {
        /// Output as JSON instead of an aligned listing
        #[arg(long)]
        json: bool,
    },
}

/// One converted input, as written to JSON output.
#[derive(Serialize)]
struct ConvertRecord {
    input: String,
    output: String,
}

fn load_table_toml(table: Option<&PathBuf>) -> String {
    match table {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read table {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => default_toml().to_string(),
    }
}

fn read_inputs(input_file: &str) -> Vec<String> {
    let file = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        romakana::trace_init::init_tracing(dir);
    }

    let table_toml = load_table_toml(cli.table.as_ref());
    let converter = RomajiConverter::from_toml(&table_toml).unwrap_or_else(|e| {
        eprintln!("Invalid mapping table: {}", e);
        process::exit(1);
    });

    match cli.command {
        Command::Convert {
            text,
            katakana,
            incremental,
            json,
        } => {
            let inputs: Vec<String> = match text {
                Some(t) => vec![t],
                None => io::stdin()
                    .lock()
                    .lines()
                    .map(|l| {
                        l.unwrap_or_else(|e| {
                            eprintln!("Failed to read stdin: {}", e);
                            process::exit(1);
                        })
                    })
                    .collect(),
            };

            for input in inputs {
                let output = converter.romaji_to_kana(&input, !incremental, katakana);
                if json {
                    let record = ConvertRecord { input, output };
                    println!(
                        "{}",
                        serde_json::to_string(&record).expect("JSON serialization failed")
                    );
                } else {
                    println!("{}", output);
                }
            }
        }

        Command::Batch {
            input_file,
            output_file,
            katakana,
            incremental,
        } => {
            let inputs = read_inputs(&input_file);

            let file = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for input in &inputs {
                let record = ConvertRecord {
                    input: input.clone(),
                    output: converter.romaji_to_kana(input, !incremental, katakana),
                };
                let line = serde_json::to_string(&record).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!(
                "Converted: {} inputs -> {}",
                inputs.len(),
                output_file
            );
        }

        Command::Table { json } => {
            let mappings = parse_romaji_toml(&table_toml).unwrap_or_else(|e| {
                eprintln!("Invalid mapping table: {}", e);
                process::exit(1);
            });

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&mappings).expect("JSON serialization failed")
                );
            } else {
                // Kana column first; pad by display width, since kana are
                // double-width in a terminal.
                let kana_width = mappings.values().map(|k| k.width()).max().unwrap_or(0);
                for (romaji, kana) in &mappings {
                    println!("{}{}  {}", kana, " ".repeat(kana_width - kana.width()), romaji);
                }
                eprintln!("{} mappings", mappings.len());
            }
        }
    }
}
