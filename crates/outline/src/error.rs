// ABOUTME: Error types for structural classification.
// ABOUTME: Provides StructureError with MissingSection and DuplicateSection variants.

use std::fmt;
use thiserror::Error;

/// The unique document section a structural error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Head,
    Body,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Section::Head => "head",
            Section::Body => "body",
        };
        write!(f, "{}", s)
    }
}

/// Errors that abort structural classification.
///
/// These are the only fatal outcomes of a build. Absent regions (no nav, no
/// main, no sidebar, no footer, no articles) are not errors; the
/// corresponding outline fields are simply left empty and extraction
/// degrades accordingly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// The tree was exhausted without finding the section.
    #[error("missing {0} section")]
    MissingSection(Section),

    /// A second occurrence of a section that must be unique.
    #[error("duplicate {0} section")]
    DuplicateSection(Section),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StructureError::MissingSection(Section::Body).to_string(),
            "missing body section"
        );
        assert_eq!(
            StructureError::DuplicateSection(Section::Head).to_string(),
            "duplicate head section"
        );
    }
}
