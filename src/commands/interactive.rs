use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::split::default_prefix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// All selected pages go to one file
    Single { output: PathBuf },
    /// One file per range, named from the prefix
    Multi { prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub input: PathBuf,
    pub ranges: String,
    pub mode: OutputMode,
}

pub fn print_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Usage: splitpdf <input.pdf> <ranges> <output.pdf>")?;
    writeln!(out)?;
    writeln!(out, "Range examples:")?;
    writeln!(out, "  - Single pages: 1,5,10")?;
    writeln!(out, "  - Ranges: 1-10,15-20")?;
    writeln!(out, "  - Combined: 1-10,15,20-25")?;
    writeln!(out)?;
    Ok(())
}

/// Ask for whatever the command line did not provide.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    known_path: Option<PathBuf>,
    known_ranges: Option<String>,
) -> Result<Request> {
    let path = match known_path {
        Some(path) => path,
        None => PathBuf::from(ask(input, out, "Input PDF file: ")?),
    };
    let ranges = match known_ranges {
        Some(ranges) => ranges,
        None => ask(input, out, "Pages to extract (e.g. 1-34,56-58,60-90): ")?,
    };

    writeln!(out, "Output mode:")?;
    writeln!(out, "  1) one file with all the pages")?;
    writeln!(out, "  2) one file per range")?;
    let mode = match ask(input, out, "Choose [1]: ")?.as_str() {
        "" | "1" => {
            let output = ask(input, out, "Output file name: ")?;
            if output.is_empty() {
                bail!("No output file name given");
            }
            OutputMode::Single {
                output: PathBuf::from(output),
            }
        }
        "2" => OutputMode::Multi {
            prefix: ask_prefix(input, out, &path)?,
        },
        other => bail!("Invalid choice: {}", other),
    };

    Ok(Request {
        input: path,
        ranges,
        mode,
    })
}

fn ask_prefix<R: BufRead, W: Write>(input: &mut R, out: &mut W, path: &Path) -> Result<String> {
    let default = default_prefix(path);
    let answer = ask(input, out, &format!("Output file prefix [{}]: ", default))?;
    Ok(if answer.is_empty() { default } else { answer })
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        bail!("Input ended before all questions were answered");
    }
    Ok(line.trim().to_string())
}
