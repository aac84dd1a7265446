use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};

mod logging;

use logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "rblex",
    about = "Tokenize a script file and write one {lexeme, kind, line} per line",
    version
)]
struct Cli {
    /// Source file to tokenize
    #[arg(value_name = "INPUT", default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the tokens (`-` for stdout)
    #[arg(short, long, value_name = "OUTPUT", default_value = "output.txt")]
    output: PathBuf,

    /// Log level when RUST_LOG is not set: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: Level,

    /// Log output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "compact")]
    log_format: LogFormat,

    /// Print token and error counts to stderr
    #[arg(long)]
    summary: bool,

    /// Exit with status 1 when the input contains malformed lexemes
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level, cli.log_format);

    let tokens = match rblex::io::run(&cli.input, &cli.output) {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(target: "rblex::cli", "{e}");
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let errors = tokens.iter().filter(|t| t.is_error()).count();
    if cli.summary {
        eprintln!("{} tokens, {} malformed", tokens.len(), errors);
    }

    if cli.strict && errors > 0 {
        for token in tokens.iter().filter(|t| t.is_error()) {
            eprintln!("line {}: malformed lexeme {:?}", token.line(), token.lexeme());
        }
        process::exit(1);
    }
}
