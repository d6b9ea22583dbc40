use ai_rules_link::status::inspect_links;

use super::common::CommandContext;
use crate::cli::TargetArgs;

pub struct Status;

impl Status {
    pub fn execute(target: &TargetArgs, ctx: &CommandContext) -> anyhow::Result<()> {
        let dest = ctx.dest_dir(target)?;
        let resolution = ctx.resolve_source();

        println!("Rules source: {}", resolution.source.describe());
        println!("Symlinks in {}:", dest.display());

        let links = inspect_links(&dest)?;
        if links.is_empty() {
            println!("  (none)");
        }

        for link in links {
            match (&link.target, link.broken) {
                (Some(path), false) => println!("  {} -> {}", link.name, path.display()),
                (Some(path), true) => {
                    println!("  {} -> {} [broken symlink]", link.name, path.display());
                }
                (None, _) => println!("  {} -> [broken symlink]", link.name),
            }
        }

        Ok(())
    }
}
