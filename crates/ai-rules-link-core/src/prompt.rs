//! Project prompt generation
//!
//! A prompt is the bundled base rules followed immediately by the bundled
//! per-language prompt (`prompt.<language>.mdc`), or either part alone.

mod context;

pub use context::{CONTEXT_DIR, ContextReport, PROMPT_FILE, ProjectContext, ToolTarget};

use crate::error::{Result, RuleError};
use crate::rule::{BASE_RULES_FILE, prompt_file_name};
use crate::source::RuleBundle;

/// Which parts make up the generated prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptParts {
    /// Base rules only
    Base,
    /// Language prompt only
    Language,
    /// Base rules followed by the language prompt
    Combined,
}

impl PromptParts {
    /// Build from the `base_only` / `lang_only` switches
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::ConflictingPromptFlags`] when both are set.
    pub fn from_flags(base_only: bool, lang_only: bool) -> Result<Self> {
        match (base_only, lang_only) {
            (true, true) => Err(RuleError::ConflictingPromptFlags.into()),
            (true, false) => Ok(Self::Base),
            (false, true) => Ok(Self::Language),
            (false, false) => Ok(Self::Combined),
        }
    }
}

/// Generates prompt content from a rule bundle
pub struct PromptGenerator<'a> {
    bundle: &'a dyn RuleBundle,
}

impl<'a> PromptGenerator<'a> {
    /// Create a generator reading from `bundle`
    #[must_use]
    pub fn new(bundle: &'a dyn RuleBundle) -> Self {
        Self { bundle }
    }

    /// Generate the prompt for `language`
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::ConflictingPromptFlags`] before any read when
    /// both switches are set, and [`RuleError::MissingResource`] when a
    /// needed resource is not bundled.
    pub fn generate(&self, language: &str, base_only: bool, lang_only: bool) -> Result<Vec<u8>> {
        let parts = PromptParts::from_flags(base_only, lang_only)?;
        self.generate_parts(language, parts)
    }

    /// Generate the prompt from already validated parts
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingResource`] when a needed resource is not
    /// bundled.
    pub fn generate_parts(&self, language: &str, parts: PromptParts) -> Result<Vec<u8>> {
        match parts {
            PromptParts::Base => self.resource(BASE_RULES_FILE),
            PromptParts::Language => self.resource(&prompt_file_name(language)),
            PromptParts::Combined => {
                let mut prompt = self.resource(BASE_RULES_FILE)?;
                prompt.extend_from_slice(&self.resource(&prompt_file_name(language))?);
                Ok(prompt)
            }
        }
    }

    fn resource(&self, name: &str) -> Result<Vec<u8>> {
        self.bundle
            .get(name)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| {
                RuleError::MissingResource {
                    name: name.to_string(),
                }
                .into()
            })
    }
}
