use anyhow::Result;
use clap::Parser;
use promptlens::models::Config;
use promptlens::ui::PromptLens;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "promptlens")]
#[command(about = "Reverse-engineer generation prompts from images")]
struct CliArgs {
    /// Optional image to load on startup.
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting promptlens");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Analysis model: {}", config.analysis_model);

    iced::application("Photographer", PromptLens::update, PromptLens::view)
        .subscription(PromptLens::subscription)
        .theme(PromptLens::theme)
        .window_size(iced::Size::new(960.0, 800.0))
        .centered()
        .run_with(move || PromptLens::new(config, args.image))?;

    Ok(())
}
