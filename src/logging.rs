use core::str::FromStr;

use embassy_time::Instant;
use esp32_lettersign::Stamp;
use esp_println::println;
use log::{LevelFilter, Log, Metadata, Record};

/// Serial logger prefixing every line with the uptime.
struct StampLogger;

static LOGGER: StampLogger = StampLogger;

impl Log for StampLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!(
            "{}: {} - {}",
            Stamp(Instant::now()),
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Installs the logger. `ESP_LOG` at build time sets the level.
pub fn init() {
    let level = option_env!("ESP_LOG")
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(LevelFilter::Info);
    // Only fails if a logger is already installed.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
