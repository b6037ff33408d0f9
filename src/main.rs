use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokensmith_common::DEFAULT_OUTPUT_PATH;
use tokensmith_core::{
    write_descriptor, DesignInput, DesignSystem, DesignSystemExtractor, ExtractOptions,
};
use tokensmith_figma::{save_snapshot, DesignSource, FigmaClient, SnapshotSource};
use tokensmith_server::DEFAULT_BIND_ADDR;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokensmith")]
#[command(version)]
#[command(about = "Extract design tokens and component descriptors from Figma files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the file from Figma and write the design system JSON
    Extract {
        #[command(flatten)]
        output: OutputArgs,

        /// Also save the retrieved document as a snapshot
        #[arg(long)]
        save_snapshot: Option<PathBuf>,
    },

    /// Build the design system JSON from a saved snapshot (no network)
    Build {
        /// Snapshot written by `extract --save-snapshot` or `snapshot`
        #[arg(short, long)]
        snapshot: PathBuf,

        /// File key used in component deep links (defaults to the snapshot's)
        #[arg(long)]
        file_key: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch the file from Figma and save it as a snapshot
    Snapshot {
        #[arg(short, long, default_value = "figma-snapshot.json")]
        output: PathBuf,
    },

    /// Serve a design system JSON file over HTTP
    Serve {
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        file: PathBuf,

        /// Listen address (falls back to TOKENSMITH_BIND_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Where to write the design system JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Design system name
    #[arg(long)]
    name: Option<String>,

    /// Design system description
    #[arg(long)]
    description: Option<String>,
}

impl OutputArgs {
    fn options(&self, file_key: Option<String>) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            name: self.name.clone().unwrap_or(defaults.name),
            description: self.description.clone().unwrap_or(defaults.description),
            file_key: file_key.unwrap_or(defaults.file_key),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            output,
            save_snapshot,
        } => cmd_extract(output, save_snapshot).await,
        Commands::Build {
            snapshot,
            file_key,
            output,
        } => cmd_build(snapshot, file_key, output).await,
        Commands::Snapshot { output } => cmd_snapshot(output).await,
        Commands::Serve { file, addr } => cmd_serve(file, addr).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{} {}", "❌ Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn cmd_extract(output: OutputArgs, snapshot: Option<PathBuf>) -> Result<()> {
    let client = FigmaClient::from_env().context("Failed to configure Figma client")?;
    let input = client
        .fetch_input()
        .await
        .context("Failed to retrieve Figma file")?;

    if let Some(path) = snapshot {
        save_snapshot(&path, &input)
            .await
            .with_context(|| format!("Failed to save snapshot to {:?}", path))?;
    }

    extract_and_write(&input, output.options(None), &output.output)
}

async fn cmd_build(
    snapshot: PathBuf,
    file_key: Option<String>,
    output: OutputArgs,
) -> Result<()> {
    let source = SnapshotSource::load(&snapshot)
        .await
        .with_context(|| format!("Failed to load snapshot {:?}", snapshot))?;
    let input = source.fetch_input().await?;

    extract_and_write(&input, output.options(file_key), &output.output)
}

async fn cmd_snapshot(output: PathBuf) -> Result<()> {
    let client = FigmaClient::from_env().context("Failed to configure Figma client")?;
    let input = client
        .fetch_input()
        .await
        .context("Failed to retrieve Figma file")?;
    save_snapshot(&output, &input)
        .await
        .with_context(|| format!("Failed to save snapshot to {:?}", output))?;

    println!("{} Snapshot saved to {}", "✅".green(), output.display());
    Ok(())
}

async fn cmd_serve(file: PathBuf, addr: Option<SocketAddr>) -> Result<()> {
    let addr = match addr {
        Some(addr) => addr,
        None => std::env::var("TOKENSMITH_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("Invalid TOKENSMITH_BIND_ADDR")?,
    };

    println!("🌐 Serving {} on http://{}", file.display(), addr);
    println!("  GET http://{}/api/design-system[?section=tokens|components]", addr);
    tokensmith_server::serve(addr, file).await?;
    Ok(())
}

fn extract_and_write(input: &DesignInput, options: ExtractOptions, output: &Path) -> Result<()> {
    let system = DesignSystemExtractor::new()
        .with_options(options)
        .extract(input);

    write_descriptor(output, &system)
        .with_context(|| format!("Failed to write design system to {:?}", output))?;
    print_summary(&system, output);
    Ok(())
}

fn print_summary(system: &DesignSystem, output: &Path) {
    println!(
        "{} {} created with {} components and {} tokens.",
        "✅".green(),
        output.display().to_string().bold(),
        system.component_count(),
        system.token_count()
    );
}
