use std::fs;
use std::io::{ErrorKind, IsTerminal};

use ai_rules_link::comparison::DiffGenerator;
use ai_rules_link::{EmbeddedRules, RuleSource};
use anyhow::Context;

use super::common::{CommandContext, rule_names};
use crate::cli::TargetArgs;

pub struct Diff;

impl Diff {
    pub fn execute(rules: &[String], target: &TargetArgs, ctx: &CommandContext) -> anyhow::Result<()> {
        let dest = ctx.dest_dir(target)?;
        let resolution = ctx.resolve_source();
        let bundle = EmbeddedRules::new();
        let source = RuleSource::new(resolution.source, &bundle);
        let color = std::io::stdout().is_terminal();

        for rule in rule_names(rules) {
            let file_name = rule.file_name();
            let dest_path = dest.join(&file_name);

            let Some(source_content) = source.read(&rule)? else {
                eprintln!("Rule file {file_name} not found in source");
                continue;
            };

            let dest_content = match fs::read(&dest_path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    println!("{file_name}: not present in {}", dest.display());
                    continue;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to read {}", dest_path.display()));
                }
            };

            if source_content == dest_content {
                println!("{file_name}: identical");
                continue;
            }

            let source_label = source.source_path(&rule);
            print!(
                "{}",
                DiffGenerator::generate(
                    &String::from_utf8_lossy(&source_content),
                    &String::from_utf8_lossy(&dest_content),
                    &source_label.display().to_string(),
                    &dest_path.display().to_string(),
                    color,
                )
            );
        }

        Ok(())
    }
}
