//! Error types for query generation and correction.

use casecfg_settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// A correction's prerequisite external resource is missing.
    ///
    /// The bulk auto-correction harness skips these; every other variant
    /// aborts the pass.
    #[error("resource not found for `{setting}`: {path}")]
    ResourceNotFound { setting: String, path: String },

    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A correction would produce an ambiguous or colliding value.
    #[error("correction conflict on `{setting}`: {detail}")]
    CorrectionConflict { setting: String, detail: String },

    #[error("no query at index {0}")]
    NoSuchQuery(usize),

    #[error("unknown rule family: {0}")]
    UnknownFamily(String),
}

impl InspectError {
    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}
