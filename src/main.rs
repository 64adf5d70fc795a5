use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcriber::cli::{Cli, Commands, OutputFormat};
use yt_transcriber::config::Config;
use yt_transcriber::pipeline::TranscriptionPipeline;
use yt_transcriber::{extract_video_id, output, utils, TranscriberError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "yt_transcriber=debug"
    } else {
        "yt_transcriber=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Transcribe {
            url,
            api_key,
            output,
            format,
            languages,
        } => {
            let config = Config::load(cli.config.as_deref())?;

            let api_key = match utils::first_non_blank([api_key, config.youtube.api_key.clone()]) {
                Some(key) => Some(key),
                None if url.is_some() => utils::prompt_api_key()?,
                None => None,
            };

            let format = match format {
                Some(format) => format,
                None => OutputFormat::from_name(&config.app.default_output_format)
                    .unwrap_or(OutputFormat::Text),
            };
            let languages = (!languages.is_empty()).then_some(languages);

            let pipeline = TranscriptionPipeline::from_config(&config, languages)?
                .with_progress(!cli.quiet);

            let result = pipeline.run(api_key.as_deref(), url.as_deref()).await?;

            if !result.transcript.is_available() && format != OutputFormat::Text {
                eprintln!("{} {}", style("warning:").yellow().bold(), result.transcript);
            }

            match output {
                Some(path) => {
                    output::save_to_file(&result, &path, &format)?;
                    println!("Output saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&result, &format)?;
                }
            }
        }
        Commands::Id { url } => {
            let video_id = extract_video_id(&url).ok_or(TranscriberError::InvalidUrl(url))?;
            println!("{}", video_id);
        }
        Commands::Config { show } => {
            if show {
                Config::load(cli.config.as_deref())?.display();
            } else {
                let (path, created) = Config::init(cli.config.as_deref())?;
                if created {
                    println!("Default configuration written to: {}", path.display());
                } else {
                    println!("Configuration already exists at: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
