//! MoodPlaylist - Entry Point

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodplaylist::cli::{self, OutputFormat};
use moodplaylist::{config::AppConfig, server, LexiconAnalyzer, MoodPipeline};

/// Mood-based playlist suggestions from a short diary entry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a diary entry (prompts on stdin when no text is given)
    Analyze {
        /// Diary entry text
        text: Vec<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the moods and their playlists
    Moods,
    /// Run the web interface and API
    Serve {
        /// Host to bind to (overrides MOODPLAYLIST_SERVER__HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides MOODPLAYLIST_SERVER__PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config from environment: {e}, using defaults");
        AppConfig::default()
    });

    match args.command {
        Command::Analyze { text, json } => analyze(&config, text, json),
        Command::Moods => {
            print!("{}", cli::render_mood_list());
            Ok(())
        }
        Command::Serve { host, port } => serve(config, host, port).await,
    }
}

fn analyze(config: &AppConfig, text: Vec<String>, json: bool) -> anyhow::Result<()> {
    let pipeline = MoodPipeline::new(Arc::new(LexiconAnalyzer::new(&config.sentiment)));

    let entry = match cli::entry_from_args(&text) {
        Some(entry) => entry,
        None => {
            println!("{}", cli::banner());
            prompt_entry().context("Failed to read diary entry from stdin")?
        }
    };

    let report = pipeline
        .analyze(&entry)
        .context("Sentiment analysis failed")?;

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let out = cli::render_report(&report, format).context("Failed to serialize report")?;
    println!("{out}");

    Ok(())
}

fn prompt_entry() -> io::Result<String> {
    println!("How was your day? Tell me about it:");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    println!();

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    info!("Starting MoodPlaylist server");

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = config
        .server
        .socket_addr()
        .context("Invalid server address")?;

    info!(
        reject_empty = config.server.reject_empty,
        negation_factor = config.sentiment.negation_factor,
        "Configuration loaded"
    );

    let state = server::AppState::new(config);
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so CLI output on stdout stays clean.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodplaylist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
