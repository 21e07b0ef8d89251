use crate::{api, cli::telemetry};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let result = api::new(args.port, args.static_dir).await;

    telemetry::shutdown_tracer();

    result
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "static_dir",
            args.static_dir
                .as_ref()
                .map_or_else(|| "none".to_string(), |dir| dir.display().to_string()),
        ),
    ];
    info!("{}", startup_message("Startup configuration", &entries));
}

fn startup_message(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    message
}

fn banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    BANNER.replace(
        "{VERSION}",
        &format!("- {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const BANNER: &str = r"
  ____              _    ___ ____
 | __ )  __ _ _ __ | | _|_ _|  _ \
 |  _ \ / _` | '_ \| |/ /| || | | |
 | |_) | (_| | | | |   < | || |_| |
 |____/ \__,_|_| |_|_|\_\___|____/  M O C K {VERSION}";
