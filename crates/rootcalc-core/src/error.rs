use thiserror::Error;

/// Problems with the number given on the command line.
#[derive(Debug, Error)]
pub enum InputError {
    /// No number was given on the command line.
    #[error("missing numeric argument")]
    MissingArgument,

    /// The argument is not a complete number (strict mode only).
    #[error("invalid number: {text}")]
    InvalidNumber { text: String },
}

/// Problems with a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("precision must be between 1 and {max}, got {value}")]
    InvalidPrecision { value: usize, max: usize },

    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
}
