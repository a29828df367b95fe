use anyhow::Result;
use clap::Args;
use settingsgen_codegen::output::Step;
use settingsgen_codegen::{Holder, ValueType, holder, value_types};
use std::collections::HashSet;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Settings file to inspect
    pub file: PathBuf,

    /// Print the schema tree as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let root = super::read_settings(&args.file)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&root)?);
        return Ok(());
    }

    let (variant, program) = super::variant_for(&args.file);
    print!(
        "{}",
        describe(&holder(&root, variant, &program), &value_types(&root))
    );
    Ok(())
}

/// One block per type, one indented line per member. Holder properties the
/// initializer never assigns are marked.
fn describe(holder: &Holder, types: &[ValueType]) -> String {
    let assigned: HashSet<&str> = holder
        .initializer
        .iter()
        .map(|step| match step {
            Step::Assign { property, .. } | Step::Construct { property, .. } => property.as_str(),
        })
        .collect();

    let mut out = String::new();
    writeln!(out, "{} ({})", holder.type_name, holder.file_name).unwrap();
    for property in &holder.properties {
        let note = if assigned.contains(property.ident.as_str()) {
            ""
        } else {
            " [not assigned]"
        };
        writeln!(out, "  {}: {}{note}", property.ident, property.ty).unwrap();
    }
    for ty in types {
        writeln!(out, "{} ({})", ty.name, ty.path.join(".")).unwrap();
        for field in &ty.fields {
            writeln!(out, "  {}: {}", field.ident, field.ty).unwrap();
        }
    }
    out
}
