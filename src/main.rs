use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;
use treasure_hunter::Page;
use treasure_hunter::core::config;
use treasure_hunter::tui;

const LOG_FILE: &str = "treasure-hunter.log";

#[derive(Parser)]
#[command(name = "treasure-hunter", about = "Look up countries and hunt for hidden gems")]
struct Args {
    /// Page to open after the welcome screen
    #[arg(short, long, value_enum)]
    page: Option<Page>,

    /// Skip the welcome screen
    #[arg(long)]
    skip_welcome: bool,

    /// Log level written to treasure-hunter.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to treasure-hunter.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(log_file) = open_log_file(Path::new(LOG_FILE)) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::TreasureConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.page, args.skip_welcome);

    log::info!(
        "Treasure Hunter starting up on page {:?} (welcome: {})",
        resolved.start_page,
        resolved.show_welcome
    );

    tui::run(resolved)
}

/// Create the log file, telling stderr when logging has to be skipped.
fn open_log_file(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Logging disabled: cannot create {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_disables_logging() {
        let dir = std::env::temp_dir().join("treasure-hunter-missing-dir-for-log");
        let _ = std::fs::remove_dir_all(&dir);
        assert!(open_log_file(&dir.join("treasure-hunter.log")).is_none());
    }

    #[test]
    fn test_log_file_is_created() {
        let path = std::env::temp_dir().join("treasure-hunter-test.log");
        assert!(open_log_file(&path).is_some());
        let _ = std::fs::remove_file(&path);
    }
}
