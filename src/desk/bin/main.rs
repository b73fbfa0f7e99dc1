use std::io;
use std::process::ExitCode;
use lms_desk::core::domain::Configuration;
use lms_desk::core::library::LibraryResult;
use lms_desk::core::repository::RepositoryStore;
use lms_desk::desk::controller::Desk;
use lms_desk::desk::seed::seed_sample_data;
use lms_desk::utils::logger::setup_tracing;

fn run(config: &Configuration) -> LibraryResult<()> {
    let store = RepositoryStore::default();
    if config.seed_sample_data {
        seed_sample_data(config, &store)?;
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    Desk::new(config, &store, stdin.lock(), stdout.lock()).run()
}

fn main() -> ExitCode {
    let config = Configuration::from_args(std::env::args().skip(1));
    setup_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(branch_id = %config.branch_id, error = ?err, "desk stopped");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
