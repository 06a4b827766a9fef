#![allow(unused_crate_dependencies)] // false positives because there is both a library and a binary

#[macro_use]
extern crate tracing;

use anyhow::Context as _;
use hidefi_viewer::app::{self, Outcome};
use hidefi_viewer::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse_args().context("CLI arguments parsing")?;

    setup_logging(config.log_file.as_deref()).context("unable to initialize logging")?;

    debug!(command = ?config.command, "Run command");

    let mut stdout = std::io::stdout().lock();
    let outcome = app::run(&config.command, &mut stdout)?;

    match outcome {
        Outcome::Success => Ok(()),
        Outcome::IntegrityFailure { dangling } => {
            error!(dangling, "Layout data references unknown usage codes");
            proc_exit::sysexits::DATA_ERR.process_exit()
        }
    }
}

fn setup_logging(log_file: Option<&str>) -> anyhow::Result<()> {
    use std::fs::OpenOptions;

    use tracing::metadata::LevelFilter;
    use tracing_subscriber::fmt::writer::BoxMakeWriter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let writer = match log_file {
        Some(log_file) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .with_context(|| format!("couldn’t open {log_file}"))?;

            BoxMakeWriter::new(file)
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(log_file.is_none())
        .with_writer(writer);

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("HIDEFI_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .context("failed to set tracing global subscriber")?;

    Ok(())
}
