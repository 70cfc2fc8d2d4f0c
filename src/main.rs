use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use mazewalk::core::config;
use mazewalk::tui;

#[derive(Parser)]
#[command(name = "mazewalk", about = "Terminal maze walk — WASD to move, Ctrl-C to quit")]
struct Args {
    /// Maze seed (default: derived from current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between frame starts
    #[arg(long)]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the frame stream
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("mazewalk.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.seed, args.tick_ms);
    log::info!("Mazewalk starting up (tick={:?})", resolved.tick);

    tui::run(resolved).await?;
    Ok(())
}
