use super::common::CommandContext;

pub struct Config;

impl Config {
    #[allow(clippy::unnecessary_wraps)]
    pub fn execute(ctx: &CommandContext) -> anyhow::Result<()> {
        if ctx.no_config {
            println!("Config files: disabled (--no-config)");
        } else {
            let files: Vec<_> = ctx.config_files.iter().collect();
            if files.is_empty() {
                println!("Config files: none found");
            } else {
                println!("Config files (lowest precedence first):");
                for file in files {
                    println!("  {}", file.display());
                }
            }
        }

        let config = &ctx.config;
        println!(
            "dest_rules_path = {}{}",
            config.dest_rules_path_or_default(),
            if config.dest_rules_path.is_none() {
                " (default)"
            } else {
                ""
            }
        );
        println!("tool = {}", config.tool.as_deref().unwrap_or("(unset)"));
        println!(
            "language = {}",
            config.language.as_deref().unwrap_or("(unset)")
        );
        println!("force = {}", config.force);

        Ok(())
    }
}
