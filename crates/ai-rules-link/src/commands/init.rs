use ai_rules_link::{EmbeddedRules, ProjectContext, PromptGenerator};

use super::common::CommandContext;

const DEFAULT_LANGUAGE: &str = "go";

pub struct Init;

impl Init {
    pub fn execute(
        tool: Option<&str>,
        language: Option<&str>,
        base_only: bool,
        lang_only: bool,
        ctx: &CommandContext,
    ) -> anyhow::Result<()> {
        let tool = tool.or(ctx.config.tool.as_deref());
        let language = language
            .or(ctx.config.language.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE);

        let bundle = EmbeddedRules::new();
        let prompt = PromptGenerator::new(&bundle).generate(language, base_only, lang_only)?;

        let report = ProjectContext::new(&ctx.cwd).write_prompt(&prompt, tool)?;

        println!("Generated {}", report.prompt_file.display());
        match (&report.tool_link, tool) {
            (Some(link), _) => println!("Linked {}", link.display()),
            (None, Some(id)) => println!("No prompt link for tool '{id}'"),
            (None, None) => {}
        }

        Ok(())
    }
}
