use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scorm_duration::{
    compare,
    config::LoggingConfig,
    constants::defaults,
    parse, run,
    utils::logging::init_logging,
    validate, DurationValue,
};

#[derive(Parser)]
#[command(name = "scorm-duration", about = "Validate and compare data-model duration values")]
struct Cli {
    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the data-model error code for a value
    Validate { value: String },
    /// Print whether two values are the same length of time
    Compare {
        first: String,
        second: String,
        /// Delimiter shared by both values (durations accept none)
        #[arg(short, long = "delimiter")]
        delimiters: Vec<String>,
    },
    /// Print the total seconds of a value
    Parse { value: String },
    /// Run every case in a YAML check file
    Check {
        #[arg(default_value = defaults::CHECK_CONFIG_PATH)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { value } => {
            init_cli_logging(cli.log_level);
            let code = validate(Some(value.as_str()));
            println!("{code} ({})", code.scorm_code());
            exit_code(code.is_ok())
        }
        Command::Compare {
            first,
            second,
            delimiters,
        } => {
            init_cli_logging(cli.log_level);
            let delimiters = (!delimiters.is_empty()).then_some(delimiters.as_slice());
            let equal = compare(Some(first.as_str()), Some(second.as_str()), delimiters);
            println!("{equal}");
            exit_code(equal)
        }
        Command::Parse { value } => {
            init_cli_logging(cli.log_level);
            match parse(&value) {
                Some(total) => {
                    match DurationValue::parse(&value) {
                        Ok(duration) => println!("{total} ({duration})"),
                        Err(_) => println!("{total}"),
                    }
                    ExitCode::SUCCESS
                }
                None => {
                    println!("unparsable");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Check { config } => match run(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_cli_logging(level: String) {
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig { level, ansi: true });
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
