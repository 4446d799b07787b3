use embassy_time::Duration;

use crate::clock::{ClockCell, ClockPeriods};
use crate::color::{ColorSource, NoiseStrategy};
use crate::column::Column;
use crate::error::ConfigError;
use crate::letter::{Extent, Letter, LetterConf, WaitTime};
use crate::palette::{PALETTES, PALETTE_COUNT};

/// Global brightness scale applied to every computed color.
pub const ALPHA: u8 = 64;
pub const MAX_ITERATION: u8 = 24;

pub const ITERATION_PERIOD_MS: u64 = 250;
pub const PALETTE_PERIOD_MS: u64 = 60_000;
pub const NOISE_PERIOD_MS: u64 = 120_000;

pub const CLOCK_PERIODS: ClockPeriods = ClockPeriods {
    iteration: Duration::from_millis(ITERATION_PERIOD_MS),
    palette: Duration::from_millis(PALETTE_PERIOD_MS),
    noise: Duration::from_millis(NOISE_PERIOD_MS),
};

pub const NOISE_STRATEGY: NoiseStrategy = NoiseStrategy::ClockToggle;

/// Capacity of a column frame.
pub const MAX_FRAME_LEDS: usize = 64;
pub const RENDER_QUEUE_DEPTH: usize = 4;
/// Redraw cap for rejection sampled random ranges.
pub const MAX_BOUNDED_DRAWS: usize = 8;

pub static COLOR_SOURCE: ColorSource<'static> =
    ColorSource::new(&PALETTES, NOISE_STRATEGY, ALPHA);

pub static CLOCK: ClockCell = ClockCell::new(MAX_ITERATION, PALETTE_COUNT as u8);

const fn letter(
    identifier: &'static str,
    offset: usize,
    count: usize,
    blink_threshold: u8,
    wait: WaitTime,
) -> Letter {
    Letter::new(LetterConf {
        identifier,
        extent: Extent::new(offset, count),
        blink_threshold,
        wait,
    })
}

static SIGN_GPIO16: [Letter; 2] = [
    letter("G", 0, 14, 1, WaitTime::fixed_ms(250)),
    letter("C", 14, 14, 5, WaitTime::fixed_ms(255)),
];
static SIGN_GPIO17: [Letter; 2] = [
    letter("L", 0, 8, 2, WaitTime::fixed_ms(240)),
    letter("H", 8, 13, 6, WaitTime::fixed_ms(245)),
];
static SIGN_GPIO18: [Letter; 2] = [
    letter("O", 0, 14, 3, WaitTime::fixed_ms(230)),
    letter("I", 14, 10, 7, WaitTime::fixed_ms(235)),
];
static SIGN_GPIO19: [Letter; 2] = [
    letter("W", 0, 14, 4, WaitTime::fixed_ms(260)),
    letter("C2", 14, 11, 8, WaitTime::fixed_ms(265)),
];

/// Four columns, one RMT channel each (ESP32).
pub static SIGN_COLUMNS: [Column<'static>; 4] = [
    Column::new("GPIO16", &SIGN_GPIO16),
    Column::new("GPIO17", &SIGN_GPIO17),
    Column::new("GPIO18", &SIGN_GPIO18),
    Column::new("GPIO19", &SIGN_GPIO19),
];

static DESK_GPIO0: [Letter; 2] = [
    letter("G", 0, 14, 1, WaitTime::between_ms(230, 265)),
    letter("C", 14, 14, 5, WaitTime::between_ms(230, 265)),
];
static DESK_GPIO2: [Letter; 2] = [
    letter("L", 0, 8, 2, WaitTime::between_ms(230, 265)),
    letter("H", 8, 13, 6, WaitTime::between_ms(230, 265)),
];

/// Two columns on the two RMT TX channels of the ESP32-C6.
pub static DESK_COLUMNS: [Column<'static>; 2] = [
    Column::new("GPIO0", &DESK_GPIO0),
    Column::new("GPIO2", &DESK_GPIO2),
];

#[cfg(feature = "sign")]
pub use self::SIGN_COLUMNS as COLUMNS;

#[cfg(all(feature = "desk", not(feature = "sign")))]
pub use self::DESK_COLUMNS as COLUMNS;

/// Checks a letter table before any task starts.
pub fn validate(columns: &[Column<'_>], max_iteration: u8) -> Result<(), ConfigError> {
    for column in columns {
        let letters = column.letters();
        if letters.is_empty() {
            return Err(ConfigError::EmptyColumn {
                column: column.label(),
            });
        }
        for (idx, letter) in letters.iter().enumerate() {
            let conf = letter.conf();
            if conf.extent.count == 0 {
                return Err(ConfigError::EmptyLetter {
                    letter: conf.identifier,
                });
            }
            if conf.extent.end() > MAX_FRAME_LEDS {
                return Err(ConfigError::ExceedsFrame {
                    letter: conf.identifier,
                    end: conf.extent.end(),
                    capacity: MAX_FRAME_LEDS,
                });
            }
            if conf.blink_threshold > max_iteration {
                return Err(ConfigError::ThresholdOutOfRange {
                    letter: conf.identifier,
                    threshold: conf.blink_threshold,
                    max_iteration,
                });
            }
            if !conf.wait.is_valid() {
                return Err(ConfigError::InvalidInterval {
                    letter: conf.identifier,
                });
            }
            if let Some(other) = letters[..idx]
                .iter()
                .find(|other| other.extent().overlaps(&conf.extent))
            {
                return Err(ConfigError::Overlap {
                    column: column.label(),
                    first: other.identifier(),
                    second: conf.identifier,
                });
            }
        }
    }
    Ok(())
}
