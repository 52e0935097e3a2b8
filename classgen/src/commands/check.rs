use std::path::PathBuf;

use classgen_codegen::validate_modules;
use classgen_manifest::Manifest;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to classgen.toml (defaults to ./classgen.toml)
    #[arg(short, long, default_value = "classgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        if let Err(err) = validate_modules(manifest.modules()) {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(1);
        }

        println!("✓ {} is valid", self.config.display());
        println!();

        let modules = manifest.modules();
        println!(
            "  {} module{}:",
            modules.len(),
            if modules.len() == 1 { "" } else { "s" }
        );
        for module in modules {
            println!(
                "    {} ({} propert{}, {} class{})",
                module.name,
                module.properties.len(),
                if module.properties.len() == 1 { "y" } else { "ies" },
                module.classes.len(),
                if module.classes.len() == 1 { "" } else { "es" },
            );
        }

        Ok(())
    }
}
