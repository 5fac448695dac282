//! Command-line definition.

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("recordgate")
        .about("Run pre-commit interceptors against a record operation")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Run the pipeline against an operation fixture")
                .arg(
                    Arg::new("operation")
                        .long("operation")
                        .short('o')
                        .required(true)
                        .value_name("FILE")
                        .help("JSON operation: message, parameters, pre_images"),
                )
                .arg(registration_arg())
                .arg(
                    Arg::new("timeout")
                        .long("timeout-secs")
                        .value_name("SECS")
                        .value_parser(clap::value_parser!(u64))
                        .help("Wall-clock limit for each interceptor invocation (default 120)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a registration and print it with defaults applied")
                .arg(registration_arg()),
        )
}

fn registration_arg() -> Arg {
    Arg::new("registration")
        .long("registration")
        .short('r')
        .value_name("FILE")
        .help("TOML registration; built-in defaults when omitted")
}
