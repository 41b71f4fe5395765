use std::process::ExitCode;

use clap::{arg, Command};

mod demo;
mod eval;
mod logging;

pub fn cli() -> Command {
    let mut demos = vec!["all"];
    demos.extend(demo::NAMES);

    Command::new("stacks")
        .about("LIFO stacks with pluggable storage")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log rejected operations and assignments").global(true))
        .subcommand(
            Command::new("demo")
                .about("Replay a stack demonstration")
                .arg(
                    arg!([NAME] "Demonstration to run")
                        .value_parser(demos)
                        .default_value("all"),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Apply operations to a fresh stack of integers")
                .arg(
                    arg!(-b --backing <BACKING> "Storage used by the stack")
                        .value_parser(["vec", "deque", "bounded"])
                        .default_value("vec"),
                )
                .arg(arg!(<OPS> ... "Operations: push:<integer>, pop, top, len, empty"))
                .arg_required_else_help(true),
        )
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches();
    logging::init(matches.get_flag("verbose"));
    tracing::debug!("stacks v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match matches.subcommand() {
        Some(("demo", args)) => {
            let name = args.get_one::<String>("NAME").expect("Defaulted");
            demo::run(name)
        }
        Some(("eval", args)) => {
            let backing = args.get_one::<String>("backing").expect("Defaulted");
            let ops: Vec<&str> = args
                .get_many::<String>("OPS")
                .expect("Required")
                .map(String::as_str)
                .collect();
            eval::run(backing, &ops.join(" "))
        }
        _ => return ExitCode::FAILURE,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
