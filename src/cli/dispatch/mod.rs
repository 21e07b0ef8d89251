use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{ARG_PORT, ARG_STATIC_DIR};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if the static directory is set but does not exist.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5000);
    let static_dir = matches.get_one::<PathBuf>(ARG_STATIC_DIR).cloned();

    if let Some(dir) = &static_dir {
        if !dir.is_dir() {
            bail!("static directory not found: {}", dir.display());
        }
    }

    Ok(Action::Server(Args { port, static_dir }))
}
