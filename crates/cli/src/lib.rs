pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shoppingbot_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use shoppingbot_core::{ApplicationError, ConfirmationField};

#[derive(Debug, Parser)]
#[command(
    name = "shoppingbot",
    about = "Shopping bot request inspection CLI",
    long_about = "Normalize Lex events into shopping bot requests and inspect the runtime configuration.",
    after_help = "Examples:\n  shoppingbot parse --file event.json\n  cat event.json | shoppingbot parse\n  shoppingbot intents"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Override the configured log level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Normalize a Lex event read from a file or stdin and print the request")]
    Parse {
        #[arg(long, help = "Path to the Lex event JSON (stdin when omitted)")]
        file: Option<PathBuf>,
        #[arg(
            long,
            help = "currentIntent key read for confirmation status (invocation_source|confirmation_status)"
        )]
        confirmation_field: Option<ConfirmationField>,
    },
    #[command(about = "List registered intents and the slots each one reads")]
    Intents,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Intents => "intents",
            Self::Config => "config",
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let command_name = cli.command.name();

    let overrides = ConfigOverrides {
        confirmation_field: match &cli.command {
            Command::Parse { confirmation_field, .. } => *confirmation_field,
            _ => None,
        },
        log_level: cli.log_level,
        ..ConfigOverrides::default()
    };
    let load_options = LoadOptions { overrides: overrides.clone(), ..LoadOptions::default() };
    let config = match AppConfig::load(load_options) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::from_error(
                command_name,
                &ApplicationError::from(error),
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Parse { file, .. } => commands::parse::run(&config, file.as_deref()),
        Command::Intents => commands::intents::run(),
        Command::Config => {
            let output = commands::config::run(&config, &overrides);
            commands::CommandResult { exit_code: 0, output }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
