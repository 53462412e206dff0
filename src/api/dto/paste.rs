//! Input and result types for the paste operations.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::Validate;

/// Compiled pattern for filetype suffixes: letters only, may be empty.
static FILETYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").unwrap());

/// A new paste before submission.
#[derive(Debug, Validate)]
pub struct CreatePasteRequest {
    /// Raw paste body.
    #[validate(length(min = 1, message = "Cannot make an empty paste"))]
    pub body: String,

    /// Display extension appended to the returned location. Empty means
    /// no extension.
    #[validate(regex(path = "*FILETYPE_REGEX", message = "File types are letters only"))]
    pub filetype: String,
}

/// Successful create-paste result.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPaste {
    /// Link or code exactly as the service returned it.
    pub location: String,
    /// Filetype chosen at submission, when any.
    pub filetype: Option<String>,
}

impl CreatedPaste {
    /// Value shown to the user: the returned location, suffixed with
    /// `.` + filetype when one was chosen.
    pub fn display_value(&self) -> String {
        match &self.filetype {
            Some(filetype) => format!("{}.{}", self.location, filetype),
            None => self.location.clone(),
        }
    }
}
