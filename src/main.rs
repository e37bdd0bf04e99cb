use anyhow::Context;
use clap::Parser;
use diary::application::DiarySession;
use diary::cli::{Cli, Prompter};
use diary::error::DiaryError;
use diary::infrastructure::{logging, Config};
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            let code = match e.downcast_ref::<DiaryError>() {
                Some(err) => {
                    eprintln!("Error: {}", err.display_with_suggestions());
                    err.exit_code()
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    1
                }
            };
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    // Command-line flags override the config file
    if cli.no_sample_data {
        config.seed_sample_data = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    logging::init(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    let mut session = DiarySession::new(&config);
    if config.seed_sample_data {
        session
            .seed_sample_data()
            .context("Failed to load sample data")?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    session.run(&mut prompter)?;

    Ok(())
}
