use core::fmt;

use embassy_time::Instant;

/// Uptime formatted as `HH:MM:SS.fffff` for log line prefixes.
///
/// Hours wrap at 24; the fraction has 10 µs resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stamp(pub Instant);

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = self.0.as_micros();
        let secs = micros / 1_000_000;
        write!(
            f,
            "{:02}:{:02}:{:02}.{:05}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60,
            (micros % 1_000_000) / 10
        )
    }
}
