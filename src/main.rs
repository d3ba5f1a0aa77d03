use clap::Parser;
use nba_live_total::cli::{Cli, Commands, InteractiveSession};
use nba_live_total::config::Config;
use nba_live_total::data::CsvSnapshotWriter;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (config, load_error) = if Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    } else {
        (Config::default(), None)
    };

    // Initialize telemetry
    nba_live_total::telemetry::init_telemetry(&config.telemetry)?;

    if let Some(e) = load_error {
        tracing::warn!(path = %cli.config, error = %e, "Could not load config, using defaults");
    }

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            tracing::info!("Starting interactive session");
            let sink = CsvSnapshotWriter::new(&config.snapshots.path);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            InteractiveSession::new(stdin.lock(), stdout.lock(), config, &sink).run()?;
        }
        Commands::Project(args) => {
            args.execute(&config)?;
        }
        Commands::Hedge(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
