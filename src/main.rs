use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match berlin_clock::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("exiting with {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
