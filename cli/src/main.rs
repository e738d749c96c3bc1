use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use flowline::{parse_with, schema_from_json, DecodeOptions, FlowError, DEFAULT_DELIMITER};

#[derive(Parser)]
#[command(name = "flowline")]
#[command(about = "Decode prefix-tagged delimited line files into record trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a line file against a schema and print the tree as JSON
    Decode {
        /// Schema file (JSON mapping form: object or array of objects)
        #[arg(short, long)]
        schema: PathBuf,

        /// Input file, one record per line
        #[arg(short, long)]
        input: PathBuf,

        /// Field delimiter character
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,

        /// Drop unmatched lines instead of failing on them
        #[arg(long)]
        skip_unmatched: bool,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate a schema file, reporting the first problem found
    Check {
        /// Schema file (JSON mapping form)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> Result<(), FlowError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Decode {
            schema,
            input,
            delimiter,
            skip_unmatched,
            output,
        } => {
            let schema_text = fs::read_to_string(schema).map_err(FlowError::Io)?;
            let forest = schema_from_json(&schema_text)?;

            let content = fs::read_to_string(input).map_err(FlowError::Io)?;
            // Blank lines are file-layout noise, not records.
            let lines = content.lines().filter(|l| !l.is_empty());

            let options = DecodeOptions {
                delimiter: *delimiter,
                skip_unmatched: *skip_unmatched,
            };
            let root = parse_with(&forest, lines, &options)?;
            let json = serde_json::to_string_pretty(&root)?;

            if let Some(out_path) = output {
                fs::write(out_path, &json).map_err(FlowError::Io)?;
                println!("Decoded {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Check { schema } => {
            let schema_text = fs::read_to_string(schema).map_err(FlowError::Io)?;
            let forest = schema_from_json(&schema_text)?;
            println!(
                "{}: ok ({} root prefix{})",
                schema.display(),
                forest.len(),
                if forest.len() == 1 { "" } else { "es" }
            );
            Ok(())
        }
    }
}
