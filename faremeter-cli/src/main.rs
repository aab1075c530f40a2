//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use faremeter_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match faremeter_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => {
            // Help and version output.
            if let Err(io_err) = err.print() {
                log::warn!("failed to print help: {io_err}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError) {
    log::debug!("faremeter failed: {err:?}");
    match serde_json::to_string(&err.report()) {
        Ok(payload) => eprintln!("{payload}"),
        Err(_) => eprintln!("faremeter: {err}"),
    }
}
