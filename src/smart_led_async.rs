use core::slice::IterMut;

use esp32_lettersign::FrameWriter;
use esp_hal::{
    clock::Clocks,
    gpio::PeripheralOutput,
    peripheral::Peripheral,
    rmt::{asynch::TxChannelAsync, PulseCode, TxChannelConfig, TxChannelCreatorAsync},
};
use esp_hal_smartled::LedAdapterError;
use smart_leds::RGB8;

const WS2812_CODE_PERIOD: u32 = 1250;
const WS2812_T0H_NS: u32 = 400;
const WS2812_T0L_NS: u32 = WS2812_CODE_PERIOD - WS2812_T0H_NS;
const WS2812_T1H_NS: u32 = 800;
const WS2812_T1L_NS: u32 = WS2812_CODE_PERIOD - WS2812_T1H_NS;

/// RMT codes per LED: 24 data bits and one end marker.
const CODES_PER_LED: usize = 25;

pub const fn buffer_size(num_leds: usize) -> usize {
    num_leds * CODES_PER_LED
}

/// WS2812 column strip driven by one RMT TX channel.
pub struct StripDriver<Tx, const BUFFER_SIZE: usize> {
    channel: Tx,
    rmt_buffer: [u32; BUFFER_SIZE],
    pulses: (u32, u32),
}

impl<'d, Tx: TxChannelAsync, const BUFFER_SIZE: usize> StripDriver<Tx, BUFFER_SIZE> {
    pub fn new<C, O>(
        channel: C,
        pin: impl Peripheral<P = O> + 'd,
    ) -> Result<StripDriver<Tx, BUFFER_SIZE>, LedAdapterError>
    where
        O: PeripheralOutput + 'd,
        C: TxChannelCreatorAsync<'d, Tx, O>,
    {
        let config = TxChannelConfig {
            clk_divider: 1,
            idle_output_level: false,
            carrier_modulation: false,
            idle_output: true,

            ..TxChannelConfig::default()
        };

        let channel = channel
            .configure(pin, config)
            .map_err(LedAdapterError::TransmissionError)?;
        // Assume the RMT peripheral is set up to use the APB clock
        let clocks = Clocks::get();
        let src_clock = clocks.apb_clock.to_MHz();

        Ok(Self {
            channel,
            rmt_buffer: [0; BUFFER_SIZE],
            pulses: (
                u32::from(PulseCode {
                    level1: true,
                    length1: ((WS2812_T0H_NS * src_clock) / 1000) as u16,
                    level2: false,
                    length2: ((WS2812_T0L_NS * src_clock) / 1000) as u16,
                }),
                u32::from(PulseCode {
                    level1: true,
                    length1: ((WS2812_T1H_NS * src_clock) / 1000) as u16,
                    level2: false,
                    length2: ((WS2812_T1L_NS * src_clock) / 1000) as u16,
                }),
            ),
        })
    }

    /// Encodes the frame and returns the number of RMT codes used.
    fn encode(&mut self, frame: &[RGB8]) -> Result<usize, LedAdapterError> {
        let mut codes = self.rmt_buffer.iter_mut();
        for led in frame {
            encode_led(*led, &mut codes, self.pulses)?;
        }
        Ok(frame.len() * CODES_PER_LED)
    }
}

fn encode_led(
    value: RGB8,
    codes: &mut IterMut<u32>,
    pulses: (u32, u32),
) -> Result<(), LedAdapterError> {
    // WS2812 expects GRB order.
    for channel_value in [value.g, value.r, value.b] {
        for position in [128, 64, 32, 16, 8, 4, 2, 1] {
            *codes.next().ok_or(LedAdapterError::BufferSizeExceeded)? =
                match channel_value & position {
                    0 => pulses.0,
                    _ => pulses.1,
                }
        }
    }
    *codes.next().ok_or(LedAdapterError::BufferSizeExceeded)? = 0;
    Ok(())
}

impl<Tx: TxChannelAsync, const BUFFER_SIZE: usize> FrameWriter for StripDriver<Tx, BUFFER_SIZE> {
    type Error = LedAdapterError;

    async fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), Self::Error> {
        let used = self.encode(frame)?;
        for chunk in self.rmt_buffer[..used].chunks(CODES_PER_LED) {
            self.channel
                .transmit(chunk)
                .await
                .map_err(LedAdapterError::TransmissionError)?;
        }
        Ok(())
    }
}
