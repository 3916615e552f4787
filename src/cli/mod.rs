//! CLI for citecheck.
//!
//! Uses clap for argument parsing and owo-colors for terminal output.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// citecheck - citation validation and scoring
///
/// Parses free-text citations, checks them against a citation style's
/// structural rules, probes any referenced URL for reachability, and reports
/// a confidence score with a rationale for every citation.
#[derive(Parser, Debug)]
#[command(
    name = "citecheck",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Validate, verify, and score bibliographic citations",
    after_help = "EXAMPLES:\n    \
                  citecheck refs.txt                    # Score citations from a file\n    \
                  citecheck --style mla refs.txt        # Validate against MLA rules\n    \
                  citecheck --json refs.txt             # Emit the full report as JSON\n    \
                  citecheck --no-verify refs.txt        # Skip URL probes (offline)\n    \
                  cat refs.txt | citecheck -            # Read citations from stdin"
)]
pub struct Cli {
    /// File containing citations, or '-' for stdin
    pub input: PathBuf,

    /// Citation style to validate against
    #[arg(short, long, default_value = "apa")]
    pub style: String,

    /// Path to the configuration file
    #[arg(short, long, default_value = "citecheck.toml")]
    pub config: PathBuf,

    /// Override the URL probe timeout (seconds)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Skip URL reachability probes (no network calls; reachability reported unknown)
    #[arg(long)]
    pub no_verify: bool,

    /// Emit the full batch report as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
