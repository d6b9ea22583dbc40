use ai_rules_link::{
    EmbeddedRules, MaterializeRequest, Materializer, OutcomeReporter, RuleError, RuleSource,
    consolidate,
};

use super::common::{CommandContext, emit, rule_names};
use crate::cli::TargetArgs;

pub struct Rules;

impl Rules {
    pub fn execute(
        rules: &[String],
        consolidate_rules: bool,
        force: bool,
        target: &TargetArgs,
        ctx: &CommandContext,
    ) -> anyhow::Result<()> {
        let rules = rule_names(rules);
        if rules.is_empty() {
            return Err(RuleError::NoRulesRequested.into());
        }

        let dest = ctx.dest_dir(target)?;
        let resolution = ctx.resolve_source();
        let bundle = EmbeddedRules::new();
        let source = RuleSource::new(resolution.source, &bundle);

        if consolidate_rules {
            let output = consolidate(&source, &rules, &dest)?;
            println!("Consolidated rules written to: {}", output.display());
            return Ok(());
        }

        let request = MaterializeRequest::new(rules, dest, force || ctx.config.force);
        let result = Materializer::new(&source).materialize(&request)?;

        for report in &result.reports {
            emit(&OutcomeReporter::line(report));
        }

        if ctx.verbose {
            print!("{}", OutcomeReporter::generate_summary(&result));
        }

        Ok(())
    }
}
