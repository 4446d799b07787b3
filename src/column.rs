//! Columns: letters sharing one LED strip and the render actor that owns
//! the strip.

use core::fmt::{self, Debug, Display};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{error, trace};
use smart_leds::{colors, RGB8};

use crate::conf::{MAX_FRAME_LEDS, RENDER_QUEUE_DEPTH};
use crate::error::DeviceWriteError;
use crate::letter::{Extent, Letter};
use crate::scheduler::LetterHandle;

/// Output device of one column, e.g. a WS2812 strip on an RMT channel.
#[allow(async_fn_in_trait)]
pub trait FrameWriter {
    type Error: Debug;

    /// Pushes a whole frame in one call.
    async fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), Self::Error>;
}

/// Composite colors of one column, in strip order.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    leds: [RGB8; MAX_FRAME_LEDS],
    len: usize,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            leds: [colors::BLACK; MAX_FRAME_LEDS],
            len: 0,
        }
    }

    pub fn as_slice(&self) -> &[RGB8] {
        &self.leds[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fills the letter's range and grows the frame to cover it. Anything
    /// skipped stays off. Ranges beyond the frame capacity are cut.
    fn paint(&mut self, extent: Extent, color: RGB8) {
        let end = extent.end().min(MAX_FRAME_LEDS);
        let start = extent.offset.min(end);
        self.leds[start..end].fill(color);
        self.len = self.len.max(end);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, led) in self.as_slice().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "R: {} G: {} B: {}", led.r, led.g, led.b)?;
        }
        write!(f, "]")
    }
}

impl Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Render request sent by a letter after it changed its shade.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRequest {
    pub letter: usize,
}

pub struct Column<'a> {
    label: &'static str,
    letters: &'a [Letter],
    requests: Channel<CriticalSectionRawMutex, RenderRequest, RENDER_QUEUE_DEPTH>,
}

impl<'a> Column<'a> {
    /// The letter order is fixed from here on.
    pub const fn new(label: &'static str, letters: &'a [Letter]) -> Self {
        Self {
            label,
            letters,
            requests: Channel::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn letters(&self) -> &'a [Letter] {
        self.letters
    }

    pub fn handle(&'a self, index: usize) -> Option<LetterHandle<'a>> {
        LetterHandle::new(self, index)
    }

    pub fn handles(&'a self) -> impl Iterator<Item = LetterHandle<'a>> + 'a {
        (0..self.letters.len()).filter_map(move |index| self.handle(index))
    }

    /// Queues a render for the actor. Returns `false` if the queue is full;
    /// a pending render then picks up the new shade anyway.
    pub fn request_render(&self, letter: usize) -> bool {
        self.requests.try_send(RenderRequest { letter }).is_ok()
    }

    pub fn pending_renders(&self) -> usize {
        self.requests.len()
    }

    /// Flattens the current letter shades into one frame.
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new();
        for letter in self.letters {
            frame.paint(letter.extent(), letter.shade().rgb());
        }
        frame
    }

    /// Waits for the next render request, renders and writes the frame.
    ///
    /// A failed write is returned but not retried. The next request is the
    /// retry.
    pub async fn serve_next<W: FrameWriter>(
        &self,
        device: &mut W,
    ) -> Result<RenderRequest, DeviceWriteError<W::Error>> {
        let request = self.requests.receive().await;
        let frame = self.render();
        device
            .write_frame(frame.as_slice())
            .await
            .map_err(|cause| DeviceWriteError {
                column: self.label,
                cause,
            })?;
        trace!("column {}: {}", self.label, frame);
        Ok(request)
    }
}

/// Render actor of one column. Never returns.
///
/// It is the only owner of the device, so writes of sibling letters can
/// not interleave.
pub async fn run_column<W: FrameWriter>(column: &Column<'_>, mut device: W) {
    loop {
        if let Err(e) = column.serve_next(&mut device).await {
            error!("{}", e);
        }
    }
}
