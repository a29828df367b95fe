use anyhow::{Context, Result};
use clap::Args;
use settingsgen_codegen::holder;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Settings file to evaluate
    pub file: PathBuf,
}

/// Evaluate the initializer planned for the file against the file itself,
/// printing every property as JSON.
pub fn execute(args: PreviewArgs) -> Result<()> {
    let root = super::read_settings(&args.file)?;
    let (variant, program) = super::variant_for(&args.file);
    let document = settingsgen_runtime::load_file(&args.file)?;
    let values = holder(&root, variant, &program)
        .simulate(&document)
        .with_context(|| format!("{} does not match its own types", args.file.display()))?;
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
