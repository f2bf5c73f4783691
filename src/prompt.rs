//! Interactive path prompts.

use crate::{AsciiError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const INPUT_QUESTION: &str = "Enter the name of the image you want to make an ASCII image out of.";
pub const OUTPUT_QUESTION: &str = "What do you want to save the ASCII art as?";

/// Ask `question` on `output` and read a path from one line of `input`.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &'static str,
) -> Result<PathBuf> {
    writeln!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AsciiError::MissingAnswer(question));
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.trim().is_empty() {
        return Err(AsciiError::MissingAnswer(question));
    }
    Ok(PathBuf::from(answer))
}
