use ai_rules_link::{EmbeddedRules, RuleSource};

use super::common::CommandContext;

pub struct List;

impl List {
    pub fn execute(ctx: &CommandContext) -> anyhow::Result<()> {
        let resolution = ctx.resolve_source();
        let bundle = EmbeddedRules::new();
        let source = RuleSource::new(resolution.source, &bundle);

        let rules = source.available_rules()?;
        println!("Available rules ({}):", source.descriptor().describe());
        for rule in rules {
            println!("  - {rule}");
        }

        Ok(())
    }
}
