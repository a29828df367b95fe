use crate::config::SettingsgenConfig;
use anyhow::{Context, Result};
use clap::Args;
use settingsgen_codegen::files;
use settingsgen_codegen::{Generator, generated};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory holding `settings.json` and `{program}.settings.json`
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Program name (overrides the config file and `Cargo.toml`)
    #[arg(long, value_name = "NAME")]
    pub program_name: Option<String>,

    /// Where to write the generated files
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the generated source instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn execute(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = SettingsgenConfig::load(&args.source_dir, config_path)?;
    let program = match args.program_name {
        Some(name) => name,
        None => config.program_name(&args.source_dir)?,
    };
    tracing::info!(%program, dir = %args.source_dir.display(), "generating");

    let candidates = files::candidates(&args.source_dir)
        .with_context(|| format!("failed to list {}", args.source_dir.display()))?;
    let outcomes = Generator::new(&program).generate(&candidates);
    for outcome in &outcomes {
        if let Err(err) = &outcome.result {
            tracing::info!(variant = %outcome.variant, "skipped: {err}");
        }
    }

    let sources = generated(outcomes);
    if sources.is_empty() {
        tracing::warn!(
            %program,
            dir = %args.source_dir.display(),
            "no settings files produced any output"
        );
    }

    if args.stdout {
        let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        print!("{}", texts.join("\n"));
        return Ok(());
    }

    let out_dir = args
        .out_dir
        .unwrap_or_else(|| config.out_dir(&args.source_dir));
    let written = files::write_sources(&out_dir, &sources)
        .with_context(|| format!("failed to write to {}", out_dir.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
