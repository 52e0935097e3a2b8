use std::path::{Path, PathBuf};

use classgen_codegen::{ClassCodegen, Error};
use classgen_java::JavaGenerator;
use classgen_manifest::Manifest;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to classgen.toml (defaults to ./classgen.toml)
    #[arg(short, long, default_value = "classgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the manifest's output-dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();
        let base_dir = self.config.parent().unwrap_or(Path::new("."));
        let config = manifest.config(base_dir).unwrap_or_exit();
        let modules = manifest.source_modules();

        let generator = JavaGenerator::new();
        let files = match generator.generate(&modules, &config) {
            Ok(files) => files,
            Err(err @ Error::NoSourceModules) => {
                // A reported condition, not a failure: the run completes
                // with zero outputs and this exact line on stdout.
                println!("{}", err);
                return Ok(());
            }
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                std::process::exit(1);
            }
        };

        if self.dry_run {
            return self.run_preview(&files);
        }

        let output = self.output.clone().unwrap_or_else(|| config.output_dir.clone());
        let written = files
            .write_to(&output)
            .wrap_err("Failed to write generated files")?;

        println!("Generated {} file(s) into {}", written.len(), output.display());
        for path in files.paths() {
            println!("  + {}", path);
        }

        Ok(())
    }

    fn run_preview(&self, files: &classgen_codegen::GeneratedFiles) -> Result<()> {
        for (path, content) in files.iter() {
            println!("── {} ──", path);
            println!("{}", content);
        }

        println!("── Summary ──");
        println!("{} file(s) would be generated", files.len());

        Ok(())
    }
}
