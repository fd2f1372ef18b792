use std::process::ExitCode;

use watermark_manager::{
    error::GENERIC_FAILURE_MESSAGE,
    help,
    prompt::Prompter,
    session::{Session, SessionEnd},
    settings::Settings,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    help::maybe_print_help_and_exit(env!("CARGO_PKG_NAME"));

    let mut session = match Session::new(Prompter::stdio(), Settings::default()) {
        Ok(session) => session,
        Err(error) => {
            log::error!("{error}");
            eprintln!("{GENERIC_FAILURE_MESSAGE}");
            return ExitCode::FAILURE;
        }
    };

    match session.run() {
        SessionEnd::Declined => ExitCode::SUCCESS,
        SessionEnd::Failed(_) => ExitCode::FAILURE,
    }
}
