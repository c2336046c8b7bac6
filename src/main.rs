use std::process::ExitCode;

fn main() -> ExitCode {
    match messenger_dialogues::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
