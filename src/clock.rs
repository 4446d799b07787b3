//! Global animation clock: blink iteration, palette rotation and noise flag.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};
use log::debug;

/// Copy of the clock taken by a letter at the start of its tick.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    /// Cycles over `[0, max_iteration]`.
    pub iteration: u8,
    /// Index into the palette rotation list.
    pub palette: u8,
    /// Noise coloring flag, flipped on its own period.
    pub noise: bool,
}

impl ClockState {
    pub fn next_iteration(self, max_iteration: u8) -> Self {
        let iteration = if self.iteration >= max_iteration {
            0
        } else {
            self.iteration + 1
        };
        Self { iteration, ..self }
    }

    pub fn next_palette(self, palette_count: u8) -> Self {
        let palette = if self.palette.saturating_add(1) >= palette_count {
            0
        } else {
            self.palette + 1
        };
        Self { palette, ..self }
    }

    pub fn toggled_noise(self) -> Self {
        Self {
            noise: !self.noise,
            ..self
        }
    }
}

/// Periods of the three clock triggers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockPeriods {
    pub iteration: Duration,
    pub palette: Duration,
    pub noise: Duration,
}

/// Shared clock cell.
///
/// Letters only take snapshots. The state is advanced by [`run_clock`]
/// alone, so there is a single writer.
pub struct ClockCell {
    state: Mutex<Cell<ClockState>>,
    max_iteration: u8,
    palette_count: u8,
}

impl ClockCell {
    pub const fn new(max_iteration: u8, palette_count: u8) -> Self {
        Self {
            state: Mutex::new(Cell::new(ClockState {
                iteration: 0,
                palette: 0,
                noise: false,
            })),
            max_iteration,
            palette_count,
        }
    }

    pub fn snapshot(&self) -> ClockState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    pub fn max_iteration(&self) -> u8 {
        self.max_iteration
    }

    fn update(&self, f: impl FnOnce(ClockState) -> ClockState) -> ClockState {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }

    pub(crate) fn advance_iteration(&self) -> ClockState {
        let max_iteration = self.max_iteration;
        self.update(|state| state.next_iteration(max_iteration))
    }

    pub(crate) fn rotate_palette(&self) -> ClockState {
        let palette_count = self.palette_count;
        self.update(|state| state.next_palette(palette_count))
    }

    pub(crate) fn toggle_noise(&self) -> ClockState {
        self.update(ClockState::toggled_noise)
    }
}

/// Clock control loop. Never returns.
///
/// Each trigger keeps its own ticker; the loop only serializes their
/// updates and never renders.
pub async fn run_clock(clock: &ClockCell, periods: ClockPeriods) {
    let mut iteration_ticker = Ticker::every(periods.iteration);
    let mut palette_ticker = Ticker::every(periods.palette);
    let mut noise_ticker = Ticker::every(periods.noise);
    loop {
        match select3(
            iteration_ticker.next(),
            palette_ticker.next(),
            noise_ticker.next(),
        )
        .await
        {
            Either3::First(()) => {
                clock.advance_iteration();
            }
            Either3::Second(()) => {
                let state = clock.rotate_palette();
                debug!("rotated to palette {}", state.palette);
            }
            Either3::Third(()) => {
                let state = clock.toggle_noise();
                debug!("noise coloring: {}", state.noise);
            }
        }
    }
}
