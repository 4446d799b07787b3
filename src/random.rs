//! Random words for palette draws, noise jitter and startup intervals.

use log::warn;

use crate::conf::MAX_BOUNDED_DRAWS;
use crate::error::RandomSourceError;

/// Uniform generator over 32-bit words.
///
/// No seeding or reproducibility contract. Hardware generators usually
/// cannot fail, but the trait leaves room for sources that can.
pub trait RandomSource {
    fn next_u32(&mut self) -> Result<u32, RandomSourceError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> Result<u32, RandomSourceError> {
        (**self).next_u32()
    }
}

/// Draws a word, or logs the failure and returns `fallback`.
pub fn word_or<R: RandomSource + ?Sized>(rng: &mut R, fallback: u32) -> u32 {
    match rng.next_u32() {
        Ok(word) => word,
        Err(e) => {
            warn!("{}, using pinned value {}", e, fallback);
            fallback
        }
    }
}

/// Draws a value in `[min, max]` (inclusive) by rejection sampling.
///
/// Words that would bias the modulo reduction are redrawn at most
/// [`MAX_BOUNDED_DRAWS`] times. After that the last word is reduced anyway,
/// so the result is always inside the bounds. A failing source pins the
/// result to `min`. Inverted bounds are swapped.
pub fn bounded<R: RandomSource + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let span = u64::from(max - min) + 1;
    // Largest multiple of `span` that fits into the word range.
    let zone = (1u64 << 32) - ((1u64 << 32) % span);
    let mut last = 0u64;
    for _ in 0..MAX_BOUNDED_DRAWS {
        let word = match rng.next_u32() {
            Ok(word) => u64::from(word),
            Err(e) => {
                warn!("{}, pinning bounded draw to {}", e, min);
                return min;
            }
        };
        if word < zone {
            return min + (word % span) as u32;
        }
        last = word;
    }
    warn!(
        "no unbiased draw in [{}, {}] after {} tries, reducing last word",
        min, max, MAX_BOUNDED_DRAWS
    );
    min + (last % span) as u32
}
