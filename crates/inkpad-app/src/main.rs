//! Replays a recorded session against a headless drawing surface and prints
//! the captured ink as JSON.
//!
//! Usage: `inkpad-replay <session.json> [config.json]`

use inkpad_app::{AppConfig, AppError, AppResult, HeadlessHost, Session};
use inkpad_core::InkRecorder;

fn main() {
    env_logger::init();
    log::info!("Starting InkPad replay");

    if let Err(e) = run() {
        log::error!("Replay failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let mut args = std::env::args().skip(1);
    let session_path = args
        .next()
        .ok_or_else(|| AppError::Session("usage: inkpad-replay <session.json> [config.json]".to_string()))?;
    let config = match args.next() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let session = Session::load(&session_path)?;
    log::info!("Replaying {} pointer samples", session.pointer_count());
    let mut host = HeadlessHost::new(&config, InkRecorder::new())?;
    host.run(&session.events)?;

    let ink = host.surface().sink().ink();
    log::info!("Recorded {} strokes", ink.strokes.len());
    let json = ink.to_json().map_err(|e| AppError::Session(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
