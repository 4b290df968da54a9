//! Point d'entrée CLI pour sprachkarte

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use sprachkarte::AppConfig;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// API et export GeoJSON de la carte des langues
#[derive(Parser)]
#[command(name = "sprachkarte")]
#[command(author, version)]
#[command(about = "Servir l'API de la carte des langues (défaut) ou exporter en GeoJSON statique")]
#[command(long_about = "API REST en lecture seule sur la carte des langues PostGIS.\n\nPar défaut, démarre le serveur HTTP. Utiliser 'export' pour écrire les fichiers GeoJSON statiques.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// PostgreSQL connection string (défaut : env DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Sous-commande (défaut: serve)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            info!(host = %config.host, port = config.port, "Starting API");
            cli::cmd_serve(&config).await?;
        }
        Commands::Export { output } => {
            info!(output = %output.display(), "Export vers GeoJSON");
            cli::cmd_export(&config, &output).await?;
        }
        Commands::InitSchema => {
            cli::cmd_init_schema(&config).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
