use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tuido::core::config;
use tuido::tui;

#[derive(Parser)]
#[command(name = "tuido", about = "A tiny persistent to-do list for the terminal")]
struct Args {
    /// Path of the task store file (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    store: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to tuido.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tuido.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("tuido starting up");

    let file_config = config::load_or_default();
    let resolved = config::resolve(&file_config, args.store.as_deref());
    log::info!("Task store: {}", resolved.tasks_file.display());

    tui::run(resolved)
}
