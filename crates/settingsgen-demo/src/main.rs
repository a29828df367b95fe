use std::process::ExitCode;

fn main() -> ExitCode {
    match settingsgen_demo::Settings::load() {
        Ok(settings) => {
            println!("{settings:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
