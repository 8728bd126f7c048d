use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optimus_img::models::{AdvisoryOutcome, AppConfig, ImageAdvisory};
use optimus_img::services::{
    exclude_progressive, find_images, Advisor, AdvisorOptions, AdvisorSummary, ImageCodec,
    PreparedOutcome, ProgressivePreparer,
};

#[derive(Parser)]
#[command(name = "optimus-img")]
#[command(about = "Find raster images that should be compressed or converted to SVG")]
struct Cli {
    /// Path to optimus.yaml
    #[arg(long, env = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse every JPEG/PNG image below a folder
    Analyse {
        /// Images folder (defaults to images_dir from the config)
        path: Option<PathBuf>,

        /// Print advisories as JSON instead of log lines
        #[arg(long)]
        json: bool,
    },
    /// Write blurred, downscaled progressive placeholders next to each image
    Prepare {
        /// Images folder (defaults to images_dir from the config)
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyse { path, json }) => {
            init_tracing();
            let config = AppConfig::load(cli.config.as_deref());
            run_analyse_command(config, path, json).await
        }
        Some(Commands::Prepare { path }) => {
            init_tracing();
            let config = AppConfig::load(cli.config.as_deref());
            run_prepare_command(config, path).await
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optimus_img=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Flag set once Ctrl-C is received. Work already in progress finishes.
fn cancellation_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let signal_flag = flag.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing the current image");
            signal_flag.store(true, Ordering::Relaxed);
        }
    });

    flag
}

/// Analyse all images under the folder and report advisories
async fn run_analyse_command(
    config: AppConfig,
    path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let options = AdvisorOptions::from_config(&config)?;
    let root = path.unwrap_or_else(|| config.images_dir.clone());
    let cancel = cancellation_flag();

    tracing::info!(folder = %root.display(), "started analysing images...");

    let advisories = tokio::task::spawn_blocking(move || {
        let images = exclude_progressive(find_images(&root), &config.progressive_marker);
        Advisor::new(ImageCodec::new(), options)
            .with_cancellation(cancel)
            .analyse(&images)
    })
    .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advisories)?);
    } else {
        for advisory in &advisories {
            log_advisory(advisory);
        }
    }

    let summary = AdvisorSummary::from_advisories(&advisories);
    tracing::info!(
        total = summary.total,
        compression = summary.compression_warnings,
        icons = summary.icon_suggestions,
        no_action = summary.no_action,
        errors = summary.errors,
        "finished analysing images"
    );

    Ok(())
}

fn log_advisory(advisory: &ImageAdvisory) {
    match advisory.outcome {
        AdvisoryOutcome::Error { .. } => tracing::error!("{advisory}"),
        AdvisoryOutcome::NoAction => tracing::info!("{advisory}"),
        _ => tracing::warn!("{advisory}"),
    }
}

/// Generate progressive placeholders for all images under the folder
async fn run_prepare_command(config: AppConfig, path: Option<PathBuf>) -> anyhow::Result<()> {
    let root = path.unwrap_or_else(|| config.images_dir.clone());
    let cancel = cancellation_flag();

    tracing::info!(folder = %root.display(), "started preparing progressive images...");

    let prepared = tokio::task::spawn_blocking(move || {
        let images = exclude_progressive(find_images(&root), &config.progressive_marker);
        ProgressivePreparer::new(config.progressive, config.progressive_marker)
            .with_cancellation(cancel)
            .prepare(&images)
    })
    .await?;

    let mut failed = 0;
    for image in &prepared {
        match &image.outcome {
            PreparedOutcome::Written { output, .. } => {
                tracing::info!(source = %image.source.display(), "wrote {}", output.display());
            }
            PreparedOutcome::Error { error } => {
                failed += 1;
                tracing::error!(source = %image.source.display(), "{error}");
            }
        }
    }

    tracing::info!(
        total = prepared.len(),
        failed,
        "finished preparing progressive images"
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("OptimusIMG v{VERSION}");
    println!("Raster image advisor for web pages\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE")
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("optimus_img=info (default)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };

    let config = match config_path {
        Some(path) => AppConfig::from_file(path).unwrap_or_default(),
        None => AppConfig::default(),
    };

    println!("\nConfiguration:");
    println!("  Source:      {config_source}");
    println!("  Images:      {}", config.images_dir.display());
    println!("  Color limit: {}", config.palette.color_limit);
    match config.palette.contrast {
        Some(contrast) => println!("  Contrast:    {contrast}"),
        None => println!("  Contrast:    off"),
    }
    println!(
        "  Placeholder: {}x scale, blur sigma {}",
        config.progressive.scale, config.progressive.blur_sigma
    );

    let images = exclude_progressive(
        find_images(&config.images_dir),
        &config.progressive_marker,
    );
    let noun = if images.len() == 1 { "image" } else { "images" };
    println!("  Found:       {} {noun}", images.len());

    println!("\nCommands:");
    println!("  optimus-img analyse [PATH]   Suggest compression or SVG conversion");
    println!("  optimus-img prepare [PATH]   Write progressive placeholders");
    println!("\nRun 'optimus-img --help' for more details.");
}
