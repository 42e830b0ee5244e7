use clap::Parser;
use colored::Colorize;
use ip_range_cidr::config::{init_logging, Settings};
use ip_range_cidr::{run, Cli, RangeError};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings) {
        eprintln!("{}: {e}", "warning".yellow());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let err = RangeError::from(e);
            eprint!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            let code = e.downcast_ref::<RangeError>().map_or(1, RangeError::exit_code);
            ExitCode::from(code)
        }
    }
}
