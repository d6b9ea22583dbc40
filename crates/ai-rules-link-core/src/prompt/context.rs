//! Project context directory and tool-specific prompt links

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::error::Result;
use crate::fs_ops;
use crate::gitignore::{GitignoreUpdate, ensure_gitignore};

/// Project-relative directory holding generated context
pub const CONTEXT_DIR: &str = ".context";

/// Generated prompt file inside [`CONTEXT_DIR`]
pub const PROMPT_FILE: &str = "prompt.mdc";

/// Tools that get a link to the generated prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolTarget {
    /// `.gemini/context.mdc`
    Gemini,
    /// `.vscode/cursor_prompt.mdc`
    Cursor,
}

impl ToolTarget {
    /// Look up a tool by identifier; unknown identifiers yield `None`
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "gemini" => Some(Self::Gemini),
            "cursor" => Some(Self::Cursor),
            _ => None,
        }
    }

    /// Project-relative path of the tool's link
    #[must_use]
    pub fn link_path(self) -> PathBuf {
        match self {
            Self::Gemini => Path::new(".gemini").join("context.mdc"),
            Self::Cursor => Path::new(".vscode").join("cursor_prompt.mdc"),
        }
    }
}

/// What `write_prompt` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextReport {
    /// Written prompt file
    pub prompt_file: PathBuf,
    /// Tool link created, if any
    pub tool_link: Option<PathBuf>,
    /// Effect on `.gitignore`
    pub gitignore: GitignoreUpdate,
}

/// A project's generated-context area
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    /// Context for the project rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the generated prompt file
    #[must_use]
    pub fn prompt_file(&self) -> PathBuf {
        self.root.join(CONTEXT_DIR).join(PROMPT_FILE)
    }

    /// Write the prompt and, for a recognized tool, link it into the tool's location
    ///
    /// Ensures `.gitignore` ignores the context directory. An unrecognized
    /// tool identifier creates no link.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory, file or link cannot be created.
    pub fn write_prompt(&self, prompt: &[u8], tool: Option<&str>) -> Result<ContextReport> {
        let context_dir = self.root.join(CONTEXT_DIR);
        fs::create_dir_all(&context_dir)
            .with_context(|| format!("Failed to create context dir: {}", context_dir.display()))?;

        let gitignore = ensure_gitignore(&self.root).context("Failed to ensure .gitignore")?;

        let prompt_file = self.prompt_file();
        fs::write(&prompt_file, prompt)
            .with_context(|| format!("Failed to write prompt file: {}", prompt_file.display()))?;
        debug!(path = %prompt_file.display(), "wrote prompt");

        let tool_link = match tool.and_then(ToolTarget::from_id) {
            Some(target) => Some(self.link_for(target)?),
            None => {
                if let Some(id) = tool {
                    debug!(tool = id, "no prompt link for unrecognized tool");
                }
                None
            }
        };

        Ok(ContextReport {
            prompt_file,
            tool_link,
            gitignore,
        })
    }

    fn link_for(&self, target: ToolTarget) -> Result<PathBuf> {
        let relative_link = target.link_path();
        let link = self.root.join(&relative_link);

        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create symlink dir: {}", parent.display()))?;
        }

        let link_target = relative_prompt_target(&relative_link);

        if fs::symlink_metadata(&link).is_ok() {
            fs_ops::remove_entry(&link).with_context(|| {
                format!("Failed to remove existing symlink: {}", link.display())
            })?;
        }

        fs_ops::create_symlink(&link_target, &link)
            .with_context(|| format!("Failed to create symlink: {}", link.display()))?;
        debug!(link = %link.display(), target = %link_target.display(), "linked prompt");

        Ok(link)
    }
}

/// Prompt file path relative to the directory containing `relative_link`
fn relative_prompt_target(relative_link: &Path) -> PathBuf {
    let depth = relative_link
        .parent()
        .map_or(0, |parent| {
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        });

    let mut target = PathBuf::new();
    for _ in 0..depth {
        target.push("..");
    }
    target.join(CONTEXT_DIR).join(PROMPT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tool_lookup() {
        assert_eq!(ToolTarget::from_id("gemini"), Some(ToolTarget::Gemini));
        assert_eq!(ToolTarget::from_id("cursor"), Some(ToolTarget::Cursor));
        assert_eq!(ToolTarget::from_id("vim"), None);
    }

    #[test]
    fn test_relative_target() {
        assert_eq!(
            relative_prompt_target(&ToolTarget::Gemini.link_path()),
            Path::new("..").join(".context").join("prompt.mdc")
        );
        assert_eq!(
            relative_prompt_target(Path::new("a/b/link.mdc")),
            Path::new("../..").join(".context").join("prompt.mdc")
        );
    }

    #[test]
    fn test_write_prompt_without_tool() {
        let tmp = TempDir::new().unwrap();
        let context = ProjectContext::new(tmp.path());

        let report = context.write_prompt(b"prompt body", None).unwrap();

        assert_eq!(report.prompt_file, tmp.path().join(".context/prompt.mdc"));
        assert_eq!(fs::read(&report.prompt_file).unwrap(), b"prompt body");
        assert_eq!(report.tool_link, None);
        assert_eq!(report.gitignore, GitignoreUpdate::Created);
    }

    #[test]
    fn test_unknown_tool_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let report = ProjectContext::new(tmp.path())
            .write_prompt(b"x", Some("emacs"))
            .unwrap();

        assert_eq!(report.tool_link, None);
        assert!(!tmp.path().join(".gemini").exists());
        assert!(!tmp.path().join(".vscode").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_tool_link_is_relative_and_replaced() {
        let tmp = TempDir::new().unwrap();
        let context = ProjectContext::new(tmp.path());

        let link_dir = tmp.path().join(".gemini");
        fs::create_dir_all(&link_dir).unwrap();
        fs_ops::create_symlink(Path::new("/stale/target"), &link_dir.join("context.mdc")).unwrap();

        let report = context.write_prompt(b"fresh", Some("gemini")).unwrap();
        let link = report.tool_link.unwrap();

        assert_eq!(link, tmp.path().join(".gemini/context.mdc"));
        assert_eq!(
            fs::read_link(&link).unwrap(),
            Path::new("../.context/prompt.mdc")
        );
        assert_eq!(fs::read(&link).unwrap(), b"fresh");
    }

    #[test]
    fn test_rewrite_truncates_prompt() {
        let tmp = TempDir::new().unwrap();
        let context = ProjectContext::new(tmp.path());

        context.write_prompt(b"a much longer first prompt", None).unwrap();
        let report = context.write_prompt(b"short", None).unwrap();

        assert_eq!(fs::read(&report.prompt_file).unwrap(), b"short");
        assert_eq!(report.gitignore, GitignoreUpdate::AlreadyPresent);
    }
}
