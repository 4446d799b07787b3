use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;
use smart_leds::{colors, RGB8};

use crate::random::{bounded, RandomSource};

/// Contiguous LED range of a letter inside its column frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Extent {
    pub offset: usize,
    pub count: usize,
}

impl Extent {
    pub const fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.count
    }

    pub fn overlaps(&self, other: &Extent) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

/// Tick period of a letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaitTime {
    Fixed(Duration),
    /// Drawn once at startup, both bounds inclusive.
    Between { min: Duration, max: Duration },
}

impl WaitTime {
    pub const fn fixed_ms(ms: u64) -> Self {
        WaitTime::Fixed(Duration::from_millis(ms))
    }

    pub const fn between_ms(min: u64, max: u64) -> Self {
        WaitTime::Between {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            WaitTime::Fixed(period) => period.as_ticks() > 0,
            WaitTime::Between { min, max } => min.as_ticks() > 0 && min <= max,
        }
    }

    /// Resolves the period, drawing from the random source if needed.
    ///
    /// Random periods have millisecond granularity.
    pub fn resolve<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            WaitTime::Fixed(period) => period,
            WaitTime::Between { min, max } => {
                let min_ms = min.as_millis().min(u64::from(u32::MAX)) as u32;
                let max_ms = max.as_millis().min(u64::from(u32::MAX)) as u32;
                Duration::from_millis(u64::from(bounded(rng, min_ms, max_ms)))
            }
        }
    }
}

/// Static description of one letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LetterConf {
    /// Label for logs and the noise seed.
    pub identifier: &'static str,
    pub extent: Extent,
    /// Iteration at which the letter shows black.
    pub blink_threshold: u8,
    pub wait: WaitTime,
}

/// What a letter currently shows.
///
/// `Unlit` is the state before the first tick; `Blink` is the deliberate
/// black of the blink moment. Both render as black but stay distinguishable
/// from a palette that happened to yield black.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Shade {
    #[default]
    Unlit,
    Lit(RGB8),
    Blink,
}

impl Shade {
    pub fn rgb(self) -> RGB8 {
        match self {
            Shade::Lit(color) => color,
            Shade::Unlit | Shade::Blink => colors::BLACK,
        }
    }
}

/// A letter and its current shade.
///
/// The shade is written only by the letter's own task and read by the
/// column render actor. The cell keeps each access race free; a render may
/// still see one letter's old shade next to a sibling's new one.
pub struct Letter {
    conf: LetterConf,
    shade: Mutex<Cell<Shade>>,
}

impl Letter {
    pub const fn new(conf: LetterConf) -> Self {
        Self {
            conf,
            shade: Mutex::new(Cell::new(Shade::Unlit)),
        }
    }

    pub fn conf(&self) -> &LetterConf {
        &self.conf
    }

    pub fn identifier(&self) -> &'static str {
        self.conf.identifier
    }

    pub fn extent(&self) -> Extent {
        self.conf.extent
    }

    pub fn shade(&self) -> Shade {
        critical_section::with(|cs| self.shade.borrow(cs).get())
    }

    pub(crate) fn set_shade(&self, shade: Shade) {
        critical_section::with(|cs| self.shade.borrow(cs).set(shade));
    }
}
