use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use voice_analytics::ai::bedrock::image::STYLE_PRESETS;
use voice_analytics::app::App;
use voice_analytics::transcript;

#[derive(Debug, Parser)]
#[command(name = "voice-analytics")]
#[command(about = "Call analytics and model playground on Amazon Bedrock")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a transcript event and store the extracted analytics
    Analyze {
        /// Path to the transcript event JSON file
        #[arg(value_name = "EVENT_FILE")]
        event_file: PathBuf,
    },
    /// Generate a text block from a prompt
    GenerateText {
        prompt: String,
        /// System prompt steering the model
        #[arg(long, default_value = "You are a helpful assistant.")]
        system: String,
    },
    /// Generate an image from a prompt
    GenerateImage {
        prompt: String,
        /// Stable Diffusion style preset
        #[arg(long, value_parser = parse_style_arg)]
        style: Option<String>,
        /// Output path for the generated image (defaults to a unique name)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_style_arg(input: &str) -> std::result::Result<String, String> {
    if STYLE_PRESETS.contains(&input) {
        Ok(input.to_string())
    } else {
        Err(format!(
            "Unknown style '{}'. Expected one of: {}",
            input,
            STYLE_PRESETS.join(", ")
        ))
    }
}

async fn run(app: &App, command: Command) -> voice_analytics::Result<()> {
    match command {
        Command::Analyze { event_file } => {
            let raw = fs::read_to_string(&event_file)?;
            let event = transcript::parse_event(&raw)?;
            let analysis = app.analyze_call(&event).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::GenerateText { prompt, system } => {
            let text = app.generate_text(&system, &prompt).await?;
            println!("{}", text);
        }
        Command::GenerateImage {
            prompt,
            style,
            output,
        } => {
            let bytes = app.generate_image(&prompt, style.as_deref()).await?;
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("generated_{}.png", Uuid::new_v4())));
            fs::write(&output, &bytes)?;
            info!("Saved generated image to {}", output.display());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_analytics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    match App::new().await {
        Ok(app) => match run(&app, args.command).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Command failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
