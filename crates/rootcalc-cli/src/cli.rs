use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// rootcalc - prints the square root of a number.
///
/// Malformed numbers are read like C `atof` (longest numeric prefix, or 0)
/// unless `--strict` is given. Hyphen-leading values such as `-.5`, `-inf`
/// or `-abc` are taken as the number unless they spell only known short
/// flags.
#[derive(Parser, Debug)]
#[command(name = "rootcalc", version, about, long_about = None)]
pub struct Args {
    /// Prefix printed at the start of every output line
    #[arg(short, long, value_name = "LABEL")]
    pub label: Option<String>,

    /// JSON settings file (label, strict, precision)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject malformed numbers instead of reading them as 0
    #[arg(long)]
    pub strict: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Number whose square root is printed
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub number: Option<OsString>,

    /// Anything after the number is ignored
    #[arg(
        value_name = "IGNORED",
        hide = true,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub extra: Vec<OsString>,
}
