use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitpdf")]
#[command(about = "Extract page ranges from a PDF into one or more new PDFs")]
#[command(
    long_about = "Extract page ranges from a PDF into one or more new PDFs.\n\n\
    With INPUT, RANGES and OUTPUT all given, the selected pages are written to OUTPUT. \
    With --multi, every comma-separated range is written to a file of its own. \
    Otherwise the missing values are asked for interactively."
)]
#[command(version)]
pub struct Cli {
    /// PDF file to extract from
    pub input: Option<PathBuf>,

    /// Page ranges (e.g., "1-10,15,20-25")
    pub ranges: Option<String>,

    /// Output file (".pdf" is appended when missing)
    pub output: Option<PathBuf>,

    /// Write one file per range, named PREFIX_paginas_RANGE.pdf
    #[arg(short, long, requires = "ranges", conflicts_with = "output")]
    pub multi: bool,

    /// File name prefix for --multi (defaults to the input file name)
    #[arg(short, long, requires = "multi")]
    pub prefix: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every page as it is copied
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

pub enum Invocation {
    Single {
        input: PathBuf,
        ranges: String,
        output: PathBuf,
    },
    Multi {
        input: PathBuf,
        ranges: String,
        prefix: Option<String>,
    },
    Interactive {
        input: Option<PathBuf>,
        ranges: Option<String>,
    },
}

impl Cli {
    /// Default log level for the crate, before `RUST_LOG` is consulted
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn invocation(self) -> Invocation {
        match (self.input, self.ranges, self.output) {
            (Some(input), Some(ranges), _) if self.multi => Invocation::Multi {
                input,
                ranges,
                prefix: self.prefix,
            },
            (Some(input), Some(ranges), Some(output)) => Invocation::Single {
                input,
                ranges,
                output,
            },
            (input, ranges, _) => Invocation::Interactive { input, ranges },
        }
    }
}
