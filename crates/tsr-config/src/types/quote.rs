//! Quote style used for string literals in the generated route tree

use serde::Serialize;
use std::fmt;

/// Quote character for generated string literals
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'...'`
    #[default]
    Single,
    /// `"..."`
    Double,
}

impl QuoteStyle {
    /// Accepted spellings, in declaration order
    pub const VARIANTS: [&'static str; 2] = ["single", "double"];

    /// Parse one of [`QuoteStyle::VARIANTS`]; exact match only
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }

    /// The quote character itself
    pub fn quote_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    /// Wrap `text` in this quote style, escaping embedded quotes and backslashes
    pub fn quote(self, text: &str) -> String {
        let q = self.quote_char();
        let mut out = String::with_capacity(text.len() + 2);
        out.push(q);
        for c in text.chars() {
            if c == q || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(QuoteStyle::from_name("double"), Some(QuoteStyle::Double));
        assert_eq!(QuoteStyle::from_name("Double"), None);
        assert_eq!(QuoteStyle::from_name("tabs"), None);
    }

    #[test]
    fn test_quote() {
        assert_eq!(QuoteStyle::Single.quote("./routes/index"), "'./routes/index'");
        assert_eq!(QuoteStyle::Double.quote(r#"a"b"#), r#""a\"b""#);
        assert_eq!(QuoteStyle::Single.quote("it's"), r"'it\'s'");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&QuoteStyle::Single).unwrap(),
            "\"single\""
        );
        assert_eq!(QuoteStyle::Double.to_string(), "double");
    }
}
