//! Per-letter tick tasks.

use embassy_time::{Instant, Ticker};
use log::{debug, info};

use crate::clock::{ClockCell, ClockState};
use crate::color::ColorSource;
use crate::column::Column;
use crate::letter::{Letter, Shade};
use crate::random::RandomSource;

/// A letter together with the column it belongs to.
#[derive(Copy, Clone)]
pub struct LetterHandle<'a> {
    column: &'a Column<'a>,
    index: usize,
}

impl<'a> LetterHandle<'a> {
    pub fn new(column: &'a Column<'a>, index: usize) -> Option<Self> {
        (index < column.letters().len()).then_some(Self { column, index })
    }

    pub fn column(&self) -> &'a Column<'a> {
        self.column
    }

    pub fn letter(&self) -> &'a Letter {
        &self.column.letters()[self.index]
    }

    /// One scheduler firing: new shade, stored, render requested.
    pub fn tick<R: RandomSource + ?Sized>(
        &self,
        clock: ClockState,
        source: &ColorSource<'_>,
        now: Instant,
        rng: &mut R,
    ) -> Shade {
        let letter = self.letter();
        let shade = source.next_shade(letter.conf(), clock, now, rng);
        letter.set_shade(shade);
        if !self.column.request_render(self.index) {
            debug!(
                "column {}: render queue full, {} rides along",
                self.column.label(),
                letter.identifier()
            );
        }
        shade
    }
}

/// Tick loop of one letter. Never returns.
///
/// The period is resolved once, before the first tick.
pub async fn run_letter<R: RandomSource>(
    handle: LetterHandle<'_>,
    clock: &ClockCell,
    source: &ColorSource<'_>,
    mut rng: R,
) {
    let letter = handle.letter();
    let period = letter.conf().wait.resolve(&mut rng);
    info!(
        "letter {} on column {} ticks every {} ms",
        letter.identifier(),
        handle.column().label(),
        period.as_millis()
    );
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        handle.tick(clock.snapshot(), source, Instant::now(), &mut rng);
    }
}
