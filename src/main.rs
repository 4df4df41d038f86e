use clap::Parser;
use etch::Generator;
use etch::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "etch", about = "ASCII art explorer for the terminal")]
struct Args {
    /// Starting topic to sketch (overrides config default)
    topic: Option<String>,

    /// Art generator to use
    #[arg(short, long, value_enum)]
    generator: Option<Generator>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to etch.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("etch.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config error, falling back to defaults: {e}");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.topic.as_deref(),
        args.generator.as_ref().map(|g| g.as_str()),
    );

    log::info!(
        "Etch starting up (generator: {}, topic: {})",
        resolved.generator,
        resolved.topic
    );

    etch::tui::run(resolved)
}
