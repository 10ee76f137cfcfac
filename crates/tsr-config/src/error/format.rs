//! Error formatting with colors and context

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Format error with colors and context
pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

impl ErrorFormatter {
    /// Create a new error formatter, coloring only when stderr is a terminal
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Create a formatter that never emits escape codes
    pub fn plain(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: false,
        }
    }

    /// The wrapped error
    pub fn error(&self) -> &ConfigError {
        &self.error
    }

    /// Format the error with colors and context
    pub fn format(&self) -> String {
        if self.use_colors {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }

    fn format_colored(&self) -> String {
        match &self.error {
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => {
                let value_str = format!("'{}'", value);
                format!(
                    "{} Invalid value {} for {}\n  {}: {}\n  {}: {}",
                    Paint::red("✗").bold(),
                    Paint::yellow(&value_str),
                    Paint::cyan(field),
                    Paint::new("Valid options").bold(),
                    options,
                    Paint::new("Hint").bold(),
                    Paint::green(hint)
                )
            }
            ConfigError::InvalidType {
                field,
                expected,
                found,
            } => format!(
                "{} Invalid type for {}\n  {}: {}\n  {}: {}",
                Paint::red("✗").bold(),
                Paint::cyan(field),
                Paint::new("Expected").bold(),
                Paint::green(expected),
                Paint::new("Found").bold(),
                Paint::yellow(found)
            ),
            ConfigError::Parse {
                location,
                message,
                context,
            } => format!(
                "{} Failed to parse JSON configuration{}\n  {}\n{}",
                Paint::red("✗").bold(),
                Paint::yellow(location),
                message,
                Paint::new(context).dim()
            ),
            ConfigError::Io { .. } => self.format_plain(),
        }
    }

    fn format_plain(&self) -> String {
        self.error.to_string()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
