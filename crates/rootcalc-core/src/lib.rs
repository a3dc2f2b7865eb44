//! # rootcalc-core
//!
//! Square-root computation behind the `rootcalc` command-line utility.
//!
//! ## Features
//! - Number parsing with C `atof` semantics (longest numeric prefix, `0` when
//!   there is none), plus a strict variant
//! - `%g`-style general float formatting
//! - Rendering of the result and usage lines, optionally prefixed by a label
//! - JSON-loadable settings
//!
//! ## Output
//! ```text
//! <label> The square root of <in> is <out>
//! <label> Usage: <program> number
//! ```

pub mod error;
pub mod format;
pub mod parse;
pub mod settings;

pub use error::{InputError, SettingsError};
pub use format::{format_general, DEFAULT_PRECISION, MAX_PRECISION};
pub use parse::{parse_number, parse_number_strict};
pub use settings::RootSettings;

/// Number of argv entries the utility needs: program name and one number.
pub const REQUIRED_ARGS: usize = 2;

/// Program name and arguments of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// argv[0] exactly as received.
    pub program: String,
    /// The number text, if one was given.
    pub number: Option<String>,
    /// Arguments after the number. Ignored.
    pub extra: Vec<String>,
}

impl Invocation {
    /// Builds an invocation from a raw argv list.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_default();
        let number = args.next();
        Self {
            program,
            number,
            extra: args.collect(),
        }
    }

    /// Count of argv entries, program name included.
    pub fn argc(&self) -> usize {
        1 + usize::from(self.number.is_some()) + self.extra.len()
    }
}

/// One computed square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRoot {
    pub input: f64,
    pub output: f64,
}

/// Square root of `input`. Negative input gives NaN, no error.
pub fn compute(input: f64) -> SquareRoot {
    SquareRoot {
        input,
        output: input.sqrt(),
    }
}

/// Exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

/// What a run prints on stdout and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub status: Status,
}

fn labeled(label: Option<&str>, body: &str) -> String {
    match label {
        Some(label) => format!("{label} {body}\n"),
        None => format!("{body}\n"),
    }
}

pub fn render_usage(label: Option<&str>, program: &str) -> String {
    labeled(label, &format!("Usage: {program} number"))
}

pub fn render_result(label: Option<&str>, root: &SquareRoot, precision: usize) -> String {
    labeled(
        label,
        &format!(
            "The square root of {} is {}",
            format_general(root.input, precision),
            format_general(root.output, precision)
        ),
    )
}

pub fn render_invalid(label: Option<&str>, text: &str) -> String {
    labeled(label, &format!("Invalid number: {text}"))
}

/// Parses the number of `invocation` and computes its square root.
///
/// Fails with [`InputError::MissingArgument`] when there is no number, and
/// with [`InputError::InvalidNumber`] for malformed text when
/// `settings.strict` is set. Without `strict` malformed text degrades the
/// way `atof` does.
pub fn evaluate(invocation: &Invocation, settings: &RootSettings) -> Result<SquareRoot, InputError> {
    if invocation.argc() < REQUIRED_ARGS {
        return Err(InputError::MissingArgument);
    }
    let text = invocation.number.as_deref().ok_or(InputError::MissingArgument)?;

    if !invocation.extra.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", invocation.extra);
    }

    let input = if settings.strict {
        parse_number_strict(text)?
    } else {
        parse_number(text)
    };
    Ok(compute(input))
}

/// Runs the utility once: parse, compute, render.
pub fn run(invocation: &Invocation, settings: &RootSettings) -> Outcome {
    let label = settings.label();
    match evaluate(invocation, settings) {
        Ok(root) => Outcome {
            stdout: render_result(label, &root, settings.precision),
            status: Status::Success,
        },
        Err(InputError::MissingArgument) => Outcome {
            stdout: render_usage(label, &invocation.program),
            status: Status::Failure,
        },
        Err(InputError::InvalidNumber { text }) => Outcome {
            stdout: render_invalid(label, &text),
            status: Status::Failure,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_settings(label: &str) -> RootSettings {
        RootSettings::default().with_overrides(Some(label.to_string()), false)
    }

    fn run_args(args: &[&str], settings: &RootSettings) -> Outcome {
        run(&Invocation::from_args(args.iter().copied()), settings)
    }

    #[test]
    fn test_invocation_from_args() {
        let inv = Invocation::from_args(["./prog", "4", "x", "y"]);
        assert_eq!(inv.program, "./prog");
        assert_eq!(inv.number.as_deref(), Some("4"));
        assert_eq!(inv.extra, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(inv.argc(), 4);

        let inv = Invocation::from_args(["./prog"]);
        assert_eq!(inv.number, None);
        assert_eq!(inv.argc(), 1);

        let inv = Invocation::from_args(Vec::<String>::new());
        assert_eq!(inv.program, "");
    }

    #[test]
    fn test_evaluate_reports_input_errors() {
        let strict = RootSettings::default().with_overrides(None, true);

        let missing = evaluate(&Invocation::from_args(["prog"]), &strict);
        assert!(matches!(missing, Err(InputError::MissingArgument)));

        let invalid = evaluate(&Invocation::from_args(["prog", "-abc"]), &strict);
        match invalid {
            Err(InputError::InvalidNumber { text }) => assert_eq!(text, "-abc"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }

        let root = evaluate(&Invocation::from_args(["prog", "-.5"]), &RootSettings::default())
            .unwrap();
        assert_eq!(root.input, -0.5);
        assert!(root.output.is_nan());
    }

    #[test]
    fn test_compute() {
        assert_eq!(compute(4.0).output, 2.0);
        assert_eq!(compute(0.0).output, 0.0);
        assert!(compute(-1.0).output.is_nan());
    }

    #[test]
    fn test_square_root_of_four() {
        let out = run_args(&["prog", "4"], &labeled_settings("1"));
        assert_eq!(out.stdout, "1 The square root of 4 is 2\n");
        assert_eq!(out.status, Status::Success);
        assert_eq!(out.status.code(), 0);
    }

    #[test]
    fn test_square_root_of_two_uses_six_digits() {
        let out = run_args(&["prog", "2"], &labeled_settings("2"));
        assert_eq!(out.stdout, "2 The square root of 2 is 1.41421\n");
    }

    #[test]
    fn test_missing_argument_prints_usage() {
        let out = run_args(&["./build/program1"], &labeled_settings("1"));
        assert_eq!(out.stdout, "1 Usage: ./build/program1 number\n");
        assert_eq!(out.status, Status::Failure);
        assert_eq!(out.status.code(), 1);
    }

    #[test]
    fn test_negative_input_gives_nan() {
        let out = run_args(&["prog", "-1"], &RootSettings::default());
        assert_eq!(out.status, Status::Success);
        assert!(out.stdout.starts_with("The square root of -1 is "));
        assert!(out.stdout.contains("nan"));
    }

    #[test]
    fn test_malformed_input_degrades_to_zero() {
        let out = run_args(&["prog", "abc"], &RootSettings::default());
        assert_eq!(out.stdout, "The square root of 0 is 0\n");
        assert_eq!(out.status, Status::Success);
    }

    #[test]
    fn test_strict_mode_rejects_malformed_input() {
        let settings = RootSettings::default().with_overrides(Some("1".into()), true);
        let out = run_args(&["prog", "12abc"], &settings);
        assert_eq!(out.stdout, "1 Invalid number: 12abc\n");
        assert_eq!(out.status, Status::Failure);

        let out = run_args(&["prog", "9"], &settings);
        assert_eq!(out.stdout, "1 The square root of 9 is 3\n");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let out = run_args(&["prog", "16", "extra"], &RootSettings::default());
        assert_eq!(out.stdout, "The square root of 16 is 4\n");
    }

    #[test]
    fn test_runs_are_repeatable() {
        let settings = labeled_settings("1");
        let first = run_args(&["prog", "3.7"], &settings);
        let second = run_args(&["prog", "3.7"], &settings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_precision_setting() {
        let settings = RootSettings {
            precision: 3,
            ..RootSettings::default()
        };
        let out = run_args(&["prog", "2"], &settings);
        assert_eq!(out.stdout, "The square root of 2 is 1.41\n");
    }
}
