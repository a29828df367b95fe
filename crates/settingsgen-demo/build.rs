fn main() -> Result<(), settingsgen_codegen::cargo::BuildError> {
    settingsgen_codegen::cargo::generate_for_build()?;
    Ok(())
}
