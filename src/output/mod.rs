use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::pipeline::TranscriptionResult;
use crate::transcribe::Transcript;

/// Save result to file
pub fn save_to_file(
    result: &TranscriptionResult,
    path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    let content = render(result, format, false)?;

    fs_err::write(path, content).context("Failed to write output file")?;
    Ok(())
}

/// Print result to console
pub fn print_to_console(result: &TranscriptionResult, format: &OutputFormat) -> Result<()> {
    let content = render(result, format, true)?;

    println!("{}", content);
    Ok(())
}

/// Render a result in the requested format
pub fn render(result: &TranscriptionResult, format: &OutputFormat, styled: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_as_text(result, styled),
        OutputFormat::Json => format_as_json(result)?,
        OutputFormat::Transcript => match &result.transcript {
            Transcript::Text(text) => text.clone(),
            Transcript::Unavailable(_) => String::new(),
        },
    })
}

pub fn format_as_text(result: &TranscriptionResult, styled: bool) -> String {
    let label = |text: &str| {
        if styled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    };

    let details = &result.details;
    let mut out = format!("{} {}\n", label("Title:"), details.title);
    if let Some(channel) = &details.channel_title {
        out.push_str(&format!("{} {}\n", label("Channel:"), channel));
    }
    out.push_str(&format!("{} {}\n\n", label("Description:"), details.description));

    match &result.transcript {
        Transcript::Text(text) => {
            out.push_str(&label("Transcript:"));
            out.push('\n');
            out.push_str(text);
        }
        Transcript::Unavailable(_) => {
            let notice = result.transcript.to_string();
            if styled {
                out.push_str(&style(notice).yellow().to_string());
            } else {
                out.push_str(&notice);
            }
        }
    }

    out
}

pub fn format_as_json(result: &TranscriptionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result")
}
