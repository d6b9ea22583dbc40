use ai_rules_link::{EmbeddedRules, ProjectContext, PromptGenerator, PromptParts};

use super::common::CommandContext;

/// Language whose prompt accompanies the base rules by default
const BASE_LANGUAGE: &str = "go";

pub struct Base;

impl Base {
    pub fn execute(ctx: &CommandContext) -> anyhow::Result<()> {
        let bundle = EmbeddedRules::new();
        let prompt = PromptGenerator::new(&bundle).generate_parts(BASE_LANGUAGE, PromptParts::Base)?;

        ProjectContext::new(&ctx.cwd).write_prompt(&prompt, None)?;

        println!("Successfully generated base rules in .context/prompt.mdc");
        Ok(())
    }
}
