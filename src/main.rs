//! Folio - a personal portfolio in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use folio_app::config::default_config_dir;
use folio_tui::RunOptions;
use tracing::info;

/// Folio - a personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Browse services, projects and articles, and get in touch", long_about = None)]
struct Args {
    /// Directory holding config.toml and preferences.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Start in dark mode and remember it
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode and remember it
    #[arg(long)]
    light: bool,
}

impl Args {
    fn forced_dark(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    folio_core::logging::init()?;
    info!("Folio starting");

    let options = RunOptions {
        forced_dark: args.forced_dark(),
        config_dir: args.config_dir.unwrap_or_else(default_config_dir),
    };
    folio_tui::run(options).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_theme_flags() {
        let args = Args::parse_from(["folio", "--dark"]);
        assert_eq!(args.forced_dark(), Some(true));

        let args = Args::parse_from(["folio", "--light"]);
        assert_eq!(args.forced_dark(), Some(false));

        let args = Args::parse_from(["folio"]);
        assert_eq!(args.forced_dark(), None);
    }

    #[test]
    fn test_args_dark_and_light_conflict() {
        assert!(Args::try_parse_from(["folio", "--dark", "--light"]).is_err());
    }

    #[test]
    fn test_args_config_dir() {
        let args = Args::parse_from(["folio", "--config-dir", "/tmp/folio"]);
        assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/folio")));
    }
}
