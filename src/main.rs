use std::env;
use std::process::ExitCode;

use log::error;

fn main() -> ExitCode {
    env_logger::init();
    let base_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            error!("could not resolve the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    match mdtrend::run_all(&base_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
