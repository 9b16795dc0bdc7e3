//! Handlers for the convert run and config actions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::args::{Args, ConfigAction};
use super::error::CliError;
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG_TEMPLATE};
use crate::convert::{image_to_ascii, ConvertOptions};
use crate::source::{AutoSource, HttpSource, DEFAULT_TIMEOUT};

/// Effective settings for one run after merging CLI flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: ConvertOptions,
    pub timeout: Duration,
    pub max_bytes: u64,
}

/// Load configuration for a run.
///
/// If a path was given explicitly the file must exist and parse. Otherwise
/// a broken default config is reported and built-in defaults are used.
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return Config::load_from_explicit(path);
    }

    match Config::load(None) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Failed to load config file: {}. Using default settings.", e);
            Ok(Config::default())
        }
    }
}

/// Merge settings: CLI args > config file > built-in defaults.
pub fn resolve_settings(args: &Args, config: &Config) -> Settings {
    let options = ConvertOptions {
        chunk_width: args.chunk_width.or(config.render.chunk_width),
        chunk_height: args.chunk_height.or(config.render.chunk_height),
        reverse: args.reverse || config.render.reverse,
    };

    let timeout = args
        .timeout
        .or(Some(config.fetch.timeout_secs))
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    Settings {
        options,
        timeout,
        max_bytes: config.fetch.max_bytes,
    }
}

/// Convert the image named on the command line and write the art out.
pub async fn run_convert(args: &Args) -> Result<(), CliError> {
    let reference = args.image.as_deref().ok_or(CliError::MissingImage)?;
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(args, &config);

    let (chunk_width, chunk_height) = settings.options.chunk_size();
    log::info!(
        "Converting {} with {}x{} chunks (reverse: {})",
        reference,
        chunk_width,
        chunk_height,
        settings.options.reverse
    );

    let http = HttpSource::with_limits(settings.timeout, settings.max_bytes)?;
    let source = AutoSource::with_http(http);
    let art = image_to_ascii(&source, reference, &settings.options).await?;

    write_output(&art, args.output.as_deref())
}

fn write_output(art: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, art).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Wrote {} bytes to {}", art.len(), path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(art.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show { config } => {
            let config_path = config.clone().unwrap_or_else(default_path);
            let cfg = load_config(config.as_deref())?;
            let options = ConvertOptions {
                chunk_width: cfg.render.chunk_width,
                chunk_height: cfg.render.chunk_height,
                reverse: cfg.render.reverse,
            };
            let (chunk_width, chunk_height) = options.chunk_size();

            println!("Current configuration:");
            println!("  Chunk width: {}", chunk_width);
            println!("  Chunk height: {}", chunk_height);
            println!("  Reverse: {}", if options.reverse { "yes" } else { "no" });
            println!("  HTTP timeout: {}s", cfg.fetch.timeout_secs);
            println!("  Max download: {} bytes", cfg.fetch.max_bytes);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init { config } => {
            let config_path = config.unwrap_or_else(default_path);
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Write the default config template, refusing to overwrite an existing file.
fn init_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }

    let write_err = |source: std::io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)
}
