use core::fmt::Debug;

/// Problems in the static letter table. Detected once before any task starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("column {column} has no letters")]
    EmptyColumn { column: &'static str },
    #[error("letter {letter} has no LEDs")]
    EmptyLetter { letter: &'static str },
    #[error("column {column}: letters {first} and {second} overlap")]
    Overlap {
        column: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("letter {letter} ends at LED {end}, frames hold {capacity} LEDs")]
    ExceedsFrame {
        letter: &'static str,
        end: usize,
        capacity: usize,
    },
    #[error("letter {letter}: blink threshold {threshold} above max iteration {max_iteration}")]
    ThresholdOutOfRange {
        letter: &'static str,
        threshold: u8,
        max_iteration: u8,
    },
    #[error("letter {letter}: wait interval is zero or its bounds are inverted")]
    InvalidInterval { letter: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("random source unavailable")]
pub struct RandomSourceError;

/// A column frame could not be pushed to its device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("column {column}: failed to write colors: {cause:?}")]
pub struct DeviceWriteError<E: Debug> {
    pub column: &'static str,
    pub cause: E,
}
