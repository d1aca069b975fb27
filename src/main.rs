use anyhow::{bail, Context, Result};
use clap::Parser;
use demotivational_fluff::{Config, GeneratedPoster, Mood, PosterComposer};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "demotivational-fluff")]
#[command(about = "Generate a demotivational poster for your mood")]
struct CliArgs {
    /// Mood to generate a poster for (Happy, Sad, Angry, Tired, Anxious, Bored, Hungry, Overwhelmed).
    #[arg(value_name = "MOOD", value_parser = parse_mood_arg, required_unless_present = "list_moods")]
    mood: Option<Mood>,

    /// Write the generated JPEG to this path.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the full result, including the image data URI, as JSON.
    #[arg(long)]
    json: bool,

    /// List the available moods and exit.
    #[arg(long)]
    list_moods: bool,
}

fn parse_mood_arg(input: &str) -> std::result::Result<Mood, String> {
    input.parse::<Mood>().map_err(|_| {
        let labels: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();
        format!("Invalid mood '{}'. Expected one of: {}", input, labels.join(", "))
    })
}

fn mood_listing() -> String {
    Mood::ALL
        .iter()
        .map(|mood| format!("{} {}", mood.style().emoji, mood))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_image(poster: &GeneratedPoster, path: &Path) -> Result<()> {
    let bytes = poster.image_bytes()?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    info!("Saved image ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}

async fn run(args: CliArgs) -> Result<()> {
    if args.list_moods {
        println!("{}", mood_listing());
        return Ok(());
    }

    let Some(mood) = args.mood else {
        bail!("A mood is required");
    };

    let config = Config::from_env()?;
    let composer = PosterComposer::from_config(&config);

    let poster = composer.generate(mood).await?;

    if let Some(path) = &args.output {
        write_image(&poster, path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&poster)?);
    } else {
        println!("{} \"{}\"", mood.style().emoji, poster.quote);
        println!();
        println!("{}", poster.visual_description);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demotivational_fluff=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Poster generation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
