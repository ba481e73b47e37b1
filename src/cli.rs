// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// ---

/// One-line usage hint printed when the command line cannot be parsed.
pub const USAGE: &str = "Usage: class-finder <names-file> <pattern>";

/// Finds fully-qualified class names by camelCase abbreviation.
///
/// Upper-case letters in the pattern must appear in the class name in the same order, e.g. 'FB',
/// 'FoBa' and 'FBar' all find 'a.b.FooBarBaz'. A pattern without upper-case letters is matched
/// ignoring case. A trailing space requires the class name to end with the last word of the
/// pattern, and '*' stands for one or more missing letters.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// File with fully-qualified class names, one per line, use '-' for standard input.
    #[arg(value_name = "NAMES_FILE")]
    pub names_file: PathBuf,

    /// Search pattern, e.g. 'FBar', 'fbb', 'a.u.HaMa' or 'FBar '.
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Configuration file overriding the defaults.
    #[arg(long, env = "CLASS_FINDER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of names to print.
    #[arg(long, short = 'n', env = "CLASS_FINDER_LIMIT", overrides_with = "limit")]
    pub limit: Option<usize>,

    /// Print names in input order instead of sorting them by class name.
    #[arg(long)]
    pub no_sort: bool,

    /// Drop repeated input lines.
    #[arg(long, short = 'u')]
    pub unique: bool,
}

#[cfg(test)]
mod tests;
