use std::process::ExitCode;

fn main() -> ExitCode {
    match capture_probe::entry::run() {
        Ok(code) => code,
        Err(err) => {
            println!("\n❌ Unexpected error: {}", err);
            ExitCode::FAILURE
        }
    }
}
