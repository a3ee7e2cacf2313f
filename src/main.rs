mod app;
mod config;
mod report;
mod timing;
mod validate;

use anyhow::Result;
use app::{App, EasingMode, FormEvent, FormField};
use clap::Parser;
use config::{Config, OutputFormat};
use log::{info, warn};
use std::process::ExitCode;

/// Object visibility windows for stop-motion style animation.
///
/// Unset flags fall back to the saved defaults.
#[derive(Debug, Parser)]
#[command(name = "stopframe", version)]
struct Cli {
    /// Frame rate (FPS)
    #[arg(long, allow_hyphen_values = true)]
    fps: Option<String>,

    /// Animation length (seconds)
    #[arg(long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Frame duration (seconds)
    #[arg(long, allow_hyphen_values = true)]
    duration: Option<String>,

    /// Easing preset
    #[arg(long, value_enum)]
    preset: Option<EasingMode>,

    /// First control point, used with --preset custom
    #[arg(long, allow_hyphen_values = true)]
    p1: Option<String>,

    /// Second control point, used with --preset custom
    #[arg(long, allow_hyphen_values = true)]
    p2: Option<String>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Store these values as the new defaults
    #[arg(long)]
    save_defaults: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn loaded_or_default(loaded: Result<Config>) -> Config {
    match loaded {
        Ok(config) => {
            info!(
                "Loaded config: {} fps, {}s long, {}s per object, {}",
                config.frame_rate,
                config.animation_length,
                config.frame_duration,
                config.preset.label()
            );
            config
        }
        Err(e) => {
            warn!("Ignoring unreadable config: {:#}", e);
            Config::default()
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = loaded_or_default(Config::load());
    let format = cli.format.unwrap_or(config.format);
    let mut app = App::new(config);

    let fields = [
        (FormField::FrameRate, cli.fps),
        (FormField::AnimationLength, cli.length),
        (FormField::FrameDuration, cli.duration),
        (FormField::P1, cli.p1),
        (FormField::P2, cli.p2),
    ];
    for (field, text) in fields {
        if let Some(text) = text {
            app.handle_event(FormEvent::SetField(field, text));
        }
    }
    if let Some(preset) = cli.preset {
        app.handle_event(FormEvent::SelectPreset(preset));
    }

    app.handle_event(FormEvent::Calculate);
    if let Some(err) = app.error.take() {
        return Err(err.into());
    }

    if let Some(report) = &app.report {
        match format {
            OutputFormat::Text => print!("{report}"),
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
    }

    if cli.save_defaults {
        app.remember_defaults()?;
        app.config.format = format;
        let path = app.config.save()?;
        info!("Saved defaults to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn raw_text_reaches_the_form() {
        let cli = Cli::try_parse_from([
            "stopframe", "--fps", "-3", "--preset", "ease-in-out", "--p1", "abc", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.fps.as_deref(), Some("-3"));
        assert_eq!(cli.preset, Some(EasingMode::EaseInOut));
        assert_eq!(cli.p1.as_deref(), Some("abc"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(!cli.save_defaults);
    }

    #[test]
    fn config_load_falls_back_on_error() {
        let loaded = Config {
            frame_rate: 12.0,
            ..Config::default()
        };
        assert_eq!(loaded_or_default(Ok(loaded.clone())), loaded);
        assert_eq!(loaded_or_default(Err(anyhow::anyhow!("bad toml"))), Config::default());
    }
}
