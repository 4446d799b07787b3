//! Picks the next color of a letter from the active palette or from noise.

use embassy_time::Instant;
use log::info;
use smart_leds::{
    colors,
    hsv::{hsv2rgb, Hsv},
    RGB8,
};

use crate::clock::ClockState;
use crate::letter::{LetterConf, Shade};
use crate::noise::noise2;
use crate::palette::Palette16;
use crate::random::{word_or, RandomSource};

/// When the noise generator replaces the palette draw.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoiseStrategy {
    /// Palette only.
    Disabled,
    /// Noise while the clock's noise flag is set, palette otherwise.
    #[default]
    ClockToggle,
    /// Palette, but a draw that is black after alpha scaling is replaced
    /// by noise.
    BlackPassthrough,
}

/// Scales every channel by `alpha / 255`.
pub fn apply_alpha(color: RGB8, alpha: u8) -> RGB8 {
    let scale = |channel: u8| (u16::from(channel) * u16::from(alpha) / 255) as u8;
    RGB8::new(scale(color.r), scale(color.g), scale(color.b))
}

/// Stable per-letter seed (FNV-1a over the identifier bytes).
pub fn identity_seed(identifier: &str) -> u32 {
    identifier
        .bytes()
        .fold(0x811c_9dc5u32, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
        })
}

/// Noise x coordinate: uptime in roughly 4 ms buckets.
pub fn time_bucket(now: Instant) -> u32 {
    (now.as_micros() >> 12) as u32
}

pub struct ColorSource<'a> {
    palettes: &'a [Palette16],
    strategy: NoiseStrategy,
    alpha: u8,
}

impl<'a> ColorSource<'a> {
    pub const fn new(palettes: &'a [Palette16], strategy: NoiseStrategy, alpha: u8) -> Self {
        Self {
            palettes,
            strategy,
            alpha,
        }
    }

    /// Computes the shade a letter shows for this tick.
    ///
    /// The blink test is the only deterministic part: a letter whose
    /// threshold equals the current iteration blinks. Everything else is a
    /// fresh random draw.
    pub fn next_shade<R: RandomSource + ?Sized>(
        &self,
        letter: &LetterConf,
        clock: ClockState,
        now: Instant,
        rng: &mut R,
    ) -> Shade {
        if clock.iteration == letter.blink_threshold {
            info!(
                "blinking {} iter count: {} current iter: {}",
                letter.identifier, letter.blink_threshold, clock.iteration
            );
            return Shade::Blink;
        }
        let color = match self.strategy {
            NoiseStrategy::ClockToggle if clock.noise => self.noise_color(letter, now, rng),
            NoiseStrategy::BlackPassthrough => {
                let drawn = apply_alpha(self.palette_draw(clock, rng), self.alpha);
                if drawn == colors::BLACK {
                    self.noise_color(letter, now, rng)
                } else {
                    drawn
                }
            }
            _ => apply_alpha(self.palette_draw(clock, rng), self.alpha),
        };
        Shade::Lit(color)
    }

    /// Uniform palette position in the currently active palette, unscaled.
    fn palette_draw<R: RandomSource + ?Sized>(&self, clock: ClockState, rng: &mut R) -> RGB8 {
        let Some(palette) = self
            .palettes
            .get(usize::from(clock.palette))
            .or_else(|| self.palettes.first())
        else {
            return colors::BLACK;
        };
        let position = (word_or(rng, 0) >> 8) as u16;
        palette.color_at(position)
    }

    fn noise_color<R: RandomSource + ?Sized>(
        &self,
        letter: &LetterConf,
        now: Instant,
        rng: &mut R,
    ) -> RGB8 {
        let jitter = word_or(rng, 0) >> 24;
        let seed = identity_seed(letter.identifier).wrapping_add(jitter);
        let hue = (noise2(time_bucket(now), seed) >> 8) as u8;
        let color = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
        apply_alpha(color, self.alpha)
    }
}
