//! Where the demo keeps its config file and logs.
//!
//! Uses XDG on Linux and the platform locations elsewhere.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DROPSELECT_CONFIG";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides the current one.
const KEPT_ARCHIVES: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "dropselect", "dropselect-demo")
}

/// Default options file.
///
/// - Linux: `~/.config/dropselect-demo/options.toml`
/// - macOS: `~/Library/Application Support/dev.dropselect.dropselect-demo/options.toml`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("options.toml"))
}

/// Log of the current run.
///
/// - Linux: `~/.cache/dropselect-demo/latest.log`
/// - macOS: `~/Library/Caches/dev.dropselect.dropselect-demo/latest.log`
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Call before the logger opens the new file. Failures are ignored: the demo
/// runs without a log rather than not at all.
pub fn rotate_logs() {
    if let Some(latest) = log_file() {
        let _ = rotate(&latest, KEPT_ARCHIVES);
    }
}

fn rotate(latest: &Path, keep: usize) -> io::Result<()> {
    let Some(dir) = latest.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir)?;

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(latest, dir.join(format!("{}.log", stamp)))?;
    }

    prune_archives(dir, keep)
}

/// Delete all but the `keep` newest archives in `dir`. Archive names are
/// timestamps, so name order is age order.
fn prune_archives(dir: &Path, keep: usize) -> io::Result<()> {
    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();

    // Newest first
    archives.sort_by(|a, b| b.cmp(a));
    for path in archives.iter().skip(keep) {
        fs::remove_file(path)?;
    }
    Ok(())
}
