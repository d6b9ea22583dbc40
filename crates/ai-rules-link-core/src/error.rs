use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Fatal conditions callers may want to tell apart
///
/// These travel inside `anyhow::Error`; use `downcast_ref::<RuleError>()` to
/// recover them.
#[derive(Debug, Error)]
pub enum RuleError {
    /// No rule names were given
    #[error(
        "no rules specified. Use --rule for each rule you want to link (e.g., --rule=go --rule=base)"
    )]
    NoRulesRequested,

    /// `base_only` and `lang_only` were both set
    #[error("cannot set both base-only and lang-only")]
    ConflictingPromptFlags,

    /// A bundled resource needed for prompt generation is missing
    #[error("bundled resource not found: {name}")]
    MissingResource {
        /// Resource file name
        name: String,
    },

    /// A rule could not be read during consolidation
    #[error("could not read {file_name}: {reason}")]
    RuleUnreadable {
        /// Rule file name
        file_name: String,
        /// Underlying cause
        reason: String,
    },

    /// The destination directory could not be created
    #[error("error creating {path}: {source}")]
    DestinationUnavailable {
        /// Destination directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The user's home directory could not be determined
    #[error("home directory not found")]
    HomeNotFound,
}
