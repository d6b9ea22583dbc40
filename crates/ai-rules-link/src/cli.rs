use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A CLI to manage AI context for different tools and technologies
///
/// Link rule files from ~/ai-rules (or $XDG_CONFIG_HOME/ai-rules) into a project,
/// fall back to the bundled rules when neither exists, and generate project prompts.
#[derive(Parser, Debug)]
#[command(name = "ai-rules-link")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Symlink selected rules into .cursor/rules/, or consolidate them into one file
    Rules {
        /// Rule(s) to link (e.g., --rule=go --rule=docker --rule=base)
        #[arg(long = "rule", value_name = "NAME", value_delimiter = ',')]
        rules: Vec<String>,

        /// Merge all selected rules into one file instead of linking
        #[arg(long)]
        consolidate: bool,

        /// Overwrite destination files even if they have been modified by the user
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Generate only the base rules for the project
    Base,

    /// Generate the project prompt and link it for a tool
    Init {
        /// Tool to link the prompt for (gemini, cursor)
        #[arg(long, value_name = "TOOL")]
        tool: Option<String>,

        /// Language of the technology prompt (default: go)
        #[arg(long = "lang", value_name = "LANGUAGE")]
        language: Option<String>,

        /// Only include the base rules
        #[arg(long)]
        base_only: bool,

        /// Only include the language prompt
        #[arg(long)]
        lang_only: bool,
    },

    /// List all symlinks in the rules destination and their targets
    Status {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// List rules offered by the active source
    List,

    /// Show differences between source rules and materialized files
    Diff {
        /// Rule(s) to compare
        #[arg(long = "rule", value_name = "NAME", value_delimiter = ',', required = true)]
        rules: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show active configuration
    Config,
}

/// Where rules are materialized
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Create rules in the home directory (~/) instead of the current directory
    #[arg(long)]
    pub global: bool,

    /// Destination path relative to the project (default: .cursor/rules)
    #[arg(long, value_name = "PATH", env = "DEST_RULES_PATH")]
    pub dest: Option<String>,
}
