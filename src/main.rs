//! kube-pass-auth CLI entry point

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kube_pass_auth::auth::AuthDispatcher;
use kube_pass_auth::cli::Cli;
use kube_pass_auth::store::SecretStore;
use kube_pass_auth::error::USAGE_EXIT_CODE;
use kube_pass_auth::{config, store, ui, Error};

const LOG_ENV: &str = "KUBE_PASS_AUTH_LOG";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(USAGE_EXIT_CODE);
        }
    };

    // Logs go to stderr so stdout stays a clean JSON document
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            ui::print_error(&format!("{:#}", e));
            let code = match e.downcast_ref::<Error>() {
                Some(err) => {
                    print_hints(err);
                    err.exit_code()
                }
                None => 1,
            };
            process::exit(code);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.resolve()?;
    let config = config::load(cli.config.as_deref())?;

    store::ensure_available(&config.pass_program)?;

    let document = config.store().show(&options.entry)?;

    let json = AuthDispatcher::new(config.key_match)
        .respond(options.mode, &document)
        .with_context(|| format!("Pass entry '{}'", options.entry))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write credential")?;
    stdout.flush().context("Failed to write credential")?;

    tracing::info!("Issued {} credential for {}", options.mode, options.entry);
    Ok(())
}

fn print_hints(err: &Error) {
    match err {
        Error::MissingMode | Error::MissingEntry | Error::UnknownMode(_) => {
            ui::print_hint("usage: kube-pass-auth <pem|token> <PASS_ENTRY>");
        }
        Error::MissingFields { keys, .. } => {
            ui::print_hint(&format!(
                "the entry must contain base64-encoded lines for: {}",
                keys.join(", ")
            ));
        }
        Error::SecretUnreadable { entry, .. } => {
            ui::print_hint(&format!("check that `pass show {}` works in this shell", entry));
        }
        Error::Prerequisite(_) => {
            ui::print_warning("set \"pass_program\" in the config file to use another binary");
        }
        _ => {}
    }
}
