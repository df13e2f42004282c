//! Genea CLI - Render kinship relationships from the command line.

use clap::Parser;
use genea_cli::commands;
use genea_cli::repl;
use genea_cli::{Cli, Command, Config, Formatter};
use genea_namer::RelationshipNamer;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> genea_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is unreadable
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        warn!(path = %config_path.display(), error = %e, "Ignoring unreadable configuration");
        Config::default()
    });

    // Flag (or GENEA_LOCALE) overrides the configured locale
    let locale = cli.locale.unwrap_or(config.settings.locale);
    let mut namer = RelationshipNamer::new(locale);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    debug!(%locale, ?format, color_enabled, "Starting genea");

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut namer, &formatter, config.settings.history_size)?;
        }
        Some(Command::Render(args)) => {
            commands::execute_render(&args.to_descriptor(), &namer, &formatter)?;
        }
        Some(Command::Batch(args)) => {
            commands::execute_batch(args, &namer, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
