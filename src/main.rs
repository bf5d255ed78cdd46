use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use glean::config::Config;
use glean::output::terminal;
use glean::{analysis, model};

/// Glean: entities, key phrases and tags from text, plus relationship
/// scoring between two texts.
#[derive(Parser)]
#[command(name = "glean", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (POST /process, POST /relationship)
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind (default: GLEAN_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (default: GLEAN_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Extract entities, key phrases and tags from a text
    Analyze {
        /// The text to analyze
        text: String,
    },

    /// Score how closely two texts are related
    Compare {
        /// First text
        text1: String,
        /// Second text
        text2: String,
    },

    /// Download the ONNX sentence embedding model (~90 MB)
    DownloadModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("glean=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { bind, port } => {
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            let port = port.unwrap_or(config.port);

            tracing::info!(backend = ?config.vector_backend, "Loading linguistic model");
            let model = model::load(&config).await?;
            glean::web::run_server(model, &bind, port).await?;
        }

        Commands::Analyze { text } => {
            let model = model::load(&config).await?;
            let signals = analysis::analyze(model.as_ref(), &text)?;
            terminal::display_signals(&text, &signals);
        }

        Commands::Compare { text1, text2 } => {
            let model = model::load(&config).await?;
            let result = analysis::compare(model.as_ref(), &text1, &text2)?;
            terminal::display_relationship(&text1, &text2, &result);
        }

        Commands::DownloadModel => {
            let model_dir = &config.model_dir;

            println!("Downloading ONNX models...");
            println!("  Destination: {}", model_dir.display());

            model::download::download_model(model_dir).await?;

            println!("\n{}", "Models downloaded successfully.".bold());
            println!("You can now run `glean serve` or `glean analyze \"some text\"`.");
        }
    }

    Ok(())
}
