//! Short code identifier for pastes and shortened links.

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Length of the code portion of every identifier.
pub const CODE_LENGTH: usize = 3;

/// A 3-character alphanumeric identifier, optionally carrying a file
/// extension: `abc` or `abc.rs`.
///
/// The extension is client-side presentation only; requests always use the
/// bare code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode {
    code: String,
    extension: Option<String>,
}

impl ShortCode {
    /// The bare 3-character code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The file extension, when one was given.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

impl FromStr for ShortCode {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (code, extension) = match raw.split_once('.') {
            Some((code, extension)) => (code, Some(extension)),
            None => (raw, None),
        };

        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ClientError::validation(format!(
                "`{raw}` is not a short code ({CODE_LENGTH} letters or digits, with an optional extension)"
            )));
        }

        if let Some(extension) = extension {
            if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ClientError::validation(format!(
                    "`{extension}` is not a file extension (letters only)"
                )));
            }
        }

        Ok(Self {
            code: code.to_owned(),
            extension: extension.map(str::to_owned),
        })
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(extension) => write!(f, "{}.{}", self.code, extension),
            None => f.write_str(&self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_code() {
        let code: ShortCode = "aB3".parse().unwrap();
        assert_eq!(code.code(), "aB3");
        assert_eq!(code.extension(), None);
    }

    #[test]
    fn test_parses_code_with_extension() {
        let code: ShortCode = "abc.rs".parse().unwrap();
        assert_eq!(code.code(), "abc");
        assert_eq!(code.extension(), Some("rs"));
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["abc", "abc.rs", "A1b.toml"] {
            let code: ShortCode = raw.parse().unwrap();
            assert_eq!(code.to_string(), raw);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!("ab".parse::<ShortCode>().is_err());
        assert!("abcd".parse::<ShortCode>().is_err());
        assert!("".parse::<ShortCode>().is_err());
    }

    #[test]
    fn test_rejects_non_alphanumeric_code() {
        assert!("a-c".parse::<ShortCode>().is_err());
        assert!("a c".parse::<ShortCode>().is_err());
        assert!("ab/".parse::<ShortCode>().is_err());
    }

    #[test]
    fn test_rejects_bad_extensions() {
        assert!("abc.".parse::<ShortCode>().is_err());
        assert!("abc.r2".parse::<ShortCode>().is_err());
        assert!("abc.r-s".parse::<ShortCode>().is_err());
    }

    #[test]
    fn test_extension_split_is_at_first_dot() {
        // `abc.tar.gz` splits as code `abc`, extension `tar.gz`, which the
        // letters-only rule rejects.
        assert!("abc.tar.gz".parse::<ShortCode>().is_err());
    }
}
