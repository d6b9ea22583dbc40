//! # ai-rules-link
//!
//! Core library for materializing AI assistant rule files into a project.
//!
//! Rules are resolved from a canonical directory (`$XDG_CONFIG_HOME/ai-rules`
//! or `~/ai-rules`) and symlinked into the destination, or copied from the
//! bundled fallback set when no canonical directory exists. Selected rules can
//! also be consolidated into a single file, and a project prompt can be
//! generated from the base rules plus a language rule.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types and the crate-wide result alias
pub mod error;

/// Rule naming conventions
pub mod rule;

/// Rule source resolution and the bundled fallback set
pub mod source;

/// Symlink, copy and consolidation of rule files
pub mod materialize;

/// Prompt generation and project context bootstrap
pub mod prompt;

/// `.gitignore` management for generated context files
pub mod gitignore;

/// Inspection of materialized rule links
pub mod status;

/// Content hashing and diff generation
pub mod comparison;

/// Configuration file parsing and merging
pub mod config;

mod fs_ops;

pub use error::{Result, RuleError};
pub use materialize::{
    MaterializationOutcome, MaterializeRequest, MaterializeResult, Materializer, OutcomeReporter,
    RuleReport, consolidate,
};
pub use prompt::{ContextReport, ProjectContext, PromptGenerator, PromptParts, ToolTarget};
pub use rule::RuleName;
pub use source::{
    EmbeddedRules, MapBundle, Resolution, RuleBundle, RuleSource, SourceDescriptor,
    SourceResolver,
};
