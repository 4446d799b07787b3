#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod color;
pub mod column;
pub mod conf;
pub mod error;
pub mod letter;
pub mod noise;
pub mod palette;
pub mod random;
pub mod scheduler;
pub mod stamp;

pub use clock::{run_clock, ClockCell, ClockPeriods, ClockState};
pub use color::{ColorSource, NoiseStrategy};
pub use column::{run_column, Column, Frame, FrameWriter, RenderRequest};
pub use error::{ConfigError, DeviceWriteError, RandomSourceError};
pub use letter::{Extent, Letter, LetterConf, Shade, WaitTime};
pub use random::RandomSource;
pub use scheduler::{run_letter, LetterHandle};
pub use stamp::Stamp;
