use thiserror::Error;

use super::section::SectionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("`{0}` is not a section of this page")]
    UnknownSection(String),

    /// The section is known but its anchor is missing from the rendered page.
    /// Navigation state has already been updated when this is returned.
    #[error("no element with id `{0}` to scroll to")]
    TargetNotFound(SectionId),
}
