//! recordgate CLI: run interceptor pipelines against operation fixtures.
//!
//! - `recordgate run -o op.json [-r registration.toml]`: run and print the
//!   trace and resulting target; exit 1 if the operation is rejected
//! - `recordgate check [-r registration.toml]`: validate a registration
//!
//! Process logs go to stderr, filtered by `RECORDGATE_LOG` (default `info`).

mod commands;
mod format;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use recordgate::{Error, MemoryTraceSink, Operation, Pipeline, PhoneFormatInterceptor, Registration};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::build_cli;
use format::{format_error, format_outcome, format_registration, OutputMode};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let result = match matches.subcommand() {
        Some(("run", sub)) => run(sub, mode),
        Some(("check", sub)) => check(sub, mode),
        _ => Ok(String::new()),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

/// Initialize tracing with the RECORDGATE_LOG environment variable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("RECORDGATE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_registration(matches: &ArgMatches) -> Result<Registration, Error> {
    match matches.get_one::<String>("registration") {
        Some(path) => Ok(Registration::load(path)?),
        None => Ok(Registration::default()),
    }
}

fn run(matches: &ArgMatches, mode: OutputMode) -> Result<String, Error> {
    let registration = load_registration(matches)?;
    debug!(registration = %registration.name, "loaded registration");
    let path = matches
        .get_one::<String>("operation")
        .ok_or_else(|| Error::InvalidOperation("no operation file given".to_string()))?;
    let operation = Operation::from_json(&std::fs::read_to_string(path)?)?;

    let sink = Arc::new(MemoryTraceSink::new());
    let mut builder = Pipeline::builder()
        .register(PhoneFormatInterceptor::new(registration))
        .trace_sink(sink.clone());
    if let Some(secs) = matches.get_one::<u64>("timeout") {
        builder = builder.timeout(Duration::from_secs(*secs));
    }
    let pipeline = builder.build()?;

    match pipeline.run(operation) {
        Ok(outcome) => Ok(format_outcome(&outcome, &sink.lines(), mode)),
        Err(e) => {
            if mode == OutputMode::Human {
                for line in sink.lines() {
                    eprintln!("{}", line);
                }
            }
            Err(e)
        }
    }
}

fn check(matches: &ArgMatches, mode: OutputMode) -> Result<String, Error> {
    let registration = load_registration(matches)?;
    registration.validate()?;
    Ok(format_registration(&registration, mode))
}
