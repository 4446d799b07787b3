#![allow(dead_code)]

use std::cell::RefCell;

use esp32_lettersign::{
    Extent, FrameWriter, Letter, LetterConf, RandomSource, RandomSourceError, WaitTime,
};
use smart_leds::RGB8;

/// Replays a fixed list of words, starting over at the end.
pub struct ScriptedRng {
    words: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
            next: 0,
        }
    }

    pub fn constant(word: u32) -> Self {
        Self::new(&[word])
    }

    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> Result<u32, RandomSourceError> {
        let word = self.words[self.next % self.words.len()];
        self.next += 1;
        Ok(word)
    }
}

pub struct FailingRng;

impl RandomSource for FailingRng {
    fn next_u32(&mut self) -> Result<u32, RandomSourceError> {
        Err(RandomSourceError)
    }
}

/// Records every frame it is asked to write.
#[derive(Default)]
pub struct RecordingWriter {
    pub frames: Vec<Vec<RGB8>>,
}

impl FrameWriter for RecordingWriter {
    type Error = ();

    async fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), Self::Error> {
        embassy_futures::yield_now().await;
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

/// Fails every other write and logs the outcome of each attempt.
pub struct FlakyWriter<'a> {
    pub outcomes: &'a RefCell<Vec<Result<Vec<RGB8>, ()>>>,
}

impl FrameWriter for FlakyWriter<'_> {
    type Error = &'static str;

    async fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), Self::Error> {
        let mut outcomes = self.outcomes.borrow_mut();
        if outcomes.len() % 2 == 1 {
            outcomes.push(Err(()));
            return Err("transport busy");
        }
        outcomes.push(Ok(frame.to_vec()));
        Ok(())
    }
}

pub struct BrokenWriter;

impl FrameWriter for BrokenWriter {
    type Error = &'static str;

    async fn write_frame(&mut self, _frame: &[RGB8]) -> Result<(), Self::Error> {
        Err("line stuck low")
    }
}

pub fn letter(identifier: &'static str, offset: usize, count: usize, blink_threshold: u8) -> Letter {
    Letter::new(LetterConf {
        identifier,
        extent: Extent::new(offset, count),
        blink_threshold,
        wait: WaitTime::fixed_ms(250),
    })
}
