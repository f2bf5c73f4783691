//! asciify CLI - Convert an image to ASCII art and save it as text

use asciify::prompt::{prompt, INPUT_QUESTION, OUTPUT_QUESTION};
use asciify::{convert_file, Converter, Result, DEFAULT_WIDTH};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "asciify", about = "Convert an image to ASCII art")]
struct Args {
    /// Input image file (asked for interactively when omitted)
    input: Option<PathBuf>,
    /// Text file to save the art to (asked for interactively when omitted)
    output: Option<PathBuf>,
    /// Output width in characters
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let input = match args.input {
        Some(path) => path,
        None => prompt(&mut stdin, &mut stdout, INPUT_QUESTION)?,
    };
    let output = match args.output {
        Some(path) => path,
        None => prompt(&mut stdin, &mut stdout, OUTPUT_QUESTION)?,
    };

    let converter = Converter::new().with_width(args.width);
    convert_file(&converter, &input, &output, &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
