//! External link targets and the platform opener
//!
//! Project links and the résumé are handed to the operating system's opener
//! (`xdg-open`, `open` or `start`), or to a custom command from `[site]
//! opener` in `config.toml`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use url::Url;

/// Something the platform opener can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A web address
    Url(Url),
    /// A local file
    File(PathBuf),
}

impl LinkTarget {
    /// Classify a raw link.
    ///
    /// `http`, `https`, `mailto` and `tel` values are URLs. Anything else is a
    /// file path; relative paths are resolved against `base_dir`. Blank input
    /// yields `None`.
    pub fn parse(raw: &str, base_dir: &Path) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(url) = Url::parse(raw) {
            if matches!(url.scheme(), "http" | "https" | "mailto" | "tel") {
                return Some(LinkTarget::Url(url));
            }
            if url.scheme() == "file" {
                if let Ok(path) = url.to_file_path() {
                    return Some(LinkTarget::File(path));
                }
            }
        }

        let path = PathBuf::from(raw);
        if path.is_absolute() {
            Some(LinkTarget::File(path))
        } else {
            Some(LinkTarget::File(base_dir.join(path)))
        }
    }

    /// The argument passed to the opener
    pub fn as_arg(&self) -> String {
        match self {
            LinkTarget::Url(url) => url.to_string(),
            LinkTarget::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_arg())
    }
}

/// The program that will be launched for `custom` (empty = platform default)
pub fn opener_program(custom: &str) -> Option<&str> {
    if !custom.is_empty() {
        return Some(custom);
    }

    if cfg!(target_os = "macos") {
        Some("open")
    } else if cfg!(target_os = "linux") {
        Some("xdg-open")
    } else if cfg!(target_os = "windows") {
        Some("cmd")
    } else {
        None
    }
}

/// Open `target` with the custom opener or the platform default.
///
/// Fails with `NotFound` when the opener is not on `PATH`, and with
/// `NotFound` when a local file does not exist.
pub fn open_target(target: &LinkTarget, opener: &str) -> std::io::Result<()> {
    if let LinkTarget::File(path) = target {
        if !path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }

    let Some(program) = opener_program(opener) else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no opener available for this platform",
        ));
    };
    if which::which(program).is_err() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("opener '{}' not found on PATH", program),
        ));
    }

    open_with(&target.as_arg(), opener)
}

/// Spawn the opener for `arg` without waiting for it.
///
/// If `opener` is non-empty it is used as the command; otherwise the
/// platform default is used.
fn open_with(arg: &str, opener: &str) -> std::io::Result<()> {
    if !opener.is_empty() {
        Command::new(opener).arg(arg).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(arg).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(arg).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", arg]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
