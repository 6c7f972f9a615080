use std::process::ExitCode;

fn main() -> ExitCode {
    match bank_simulator::app::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
