//! Main application entry point.

use inkmark_app::{App, AppError, AppResult};
use std::path::PathBuf;

const USAGE: &str = "inkmark <events.json> [--config <config.json>]";

fn main() {
    env_logger::init();
    log::info!("Starting InkMark");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let mut script: Option<PathBuf> = None;
    let mut config: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| AppError::Usage(format!("--config needs a path\n{USAGE}")))?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => return Err(AppError::Usage(format!("unexpected argument {arg}\n{USAGE}"))),
        }
    }
    let script = script.ok_or_else(|| AppError::Usage(USAGE.to_string()))?;

    let mut app = App::with_config(App::load_config(config.as_deref())?);
    let report = app.replay_file(&script)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
