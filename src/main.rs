#![no_std]
#![no_main]
mod logging;
mod smart_led_async;

use embassy_executor::Spawner;
use esp32_lettersign::{
    conf::{self, CLOCK, CLOCK_PERIODS, COLOR_SOURCE, COLUMNS, MAX_FRAME_LEDS},
    run_clock, run_column, run_letter, Column, LetterHandle, RandomSource, RandomSourceError,
};
use esp_backtrace as _;
use esp_hal::{
    gpio::{Io, Level, Output},
    prelude::*,
    rmt::{self, Rmt},
    rng::Rng,
    timer::timg,
    Async,
};
use esp_println as _;
use log::info;
use smart_led_async::{buffer_size, StripDriver};

#[cfg(not(any(feature = "sign", feature = "desk")))]
compile_error!(
    "at least one board feature must be active. Boards:
    - sign
    - desk
"
);

const STRIP_BUFFER: usize = buffer_size(MAX_FRAME_LEDS);

type Strip<const CHANNEL: u8> = StripDriver<rmt::Channel<Async, CHANNEL>, STRIP_BUFFER>;

#[derive(Clone, Copy)]
struct HwRng(Rng);

impl RandomSource for HwRng {
    fn next_u32(&mut self) -> Result<u32, RandomSourceError> {
        Ok(self.0.random())
    }
}

// Tasks can not be generic and every RMT channel has its own type.
macro_rules! column_task {
    ($name:ident, $channel:literal) => {
        #[embassy_executor::task]
        async fn $name(column: &'static Column<'static>, strip: Strip<$channel>) {
            run_column(column, strip).await
        }
    };
}

column_task!(column0_task, 0);
column_task!(column1_task, 1);
#[cfg(feature = "sign")]
column_task!(column2_task, 2);
#[cfg(feature = "sign")]
column_task!(column3_task, 3);

#[embassy_executor::task(pool_size = 8)]
async fn letter_task(handle: LetterHandle<'static>, rng: HwRng) {
    run_letter(handle, &CLOCK, &COLOR_SOURCE, rng).await
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    logging::init();
    info!(
        "-- ESP32 Lettersign Application {} --",
        env!("CARGO_PKG_VERSION")
    );
    conf::validate(&COLUMNS, CLOCK.max_iteration()).expect("invalid letter table");

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let rng = HwRng(Rng::new(peripherals.RNG));
    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    let timg0 = timg::TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let rmt = Rmt::new_async(peripherals.RMT, 80.MHz()).expect("RMT init failed");

    #[cfg(feature = "sign")]
    {
        let strip0: Strip<0> =
            StripDriver::new(rmt.channel0, Output::new(io.pins.gpio16, Level::Low))
                .expect("configuring RMT channel 0 failed");
        let strip1: Strip<1> =
            StripDriver::new(rmt.channel1, Output::new(io.pins.gpio17, Level::Low))
                .expect("configuring RMT channel 1 failed");
        let strip2: Strip<2> =
            StripDriver::new(rmt.channel2, Output::new(io.pins.gpio18, Level::Low))
                .expect("configuring RMT channel 2 failed");
        let strip3: Strip<3> =
            StripDriver::new(rmt.channel3, Output::new(io.pins.gpio19, Level::Low))
                .expect("configuring RMT channel 3 failed");
        spawner
            .spawn(column0_task(&COLUMNS[0], strip0))
            .expect("spawning column task failed");
        spawner
            .spawn(column1_task(&COLUMNS[1], strip1))
            .expect("spawning column task failed");
        spawner
            .spawn(column2_task(&COLUMNS[2], strip2))
            .expect("spawning column task failed");
        spawner
            .spawn(column3_task(&COLUMNS[3], strip3))
            .expect("spawning column task failed");
    }

    #[cfg(all(feature = "desk", not(feature = "sign")))]
    {
        let strip0: Strip<0> =
            StripDriver::new(rmt.channel0, Output::new(io.pins.gpio0, Level::Low))
                .expect("configuring RMT channel 0 failed");
        let strip1: Strip<1> =
            StripDriver::new(rmt.channel1, Output::new(io.pins.gpio2, Level::Low))
                .expect("configuring RMT channel 1 failed");
        spawner
            .spawn(column0_task(&COLUMNS[0], strip0))
            .expect("spawning column task failed");
        spawner
            .spawn(column1_task(&COLUMNS[1], strip1))
            .expect("spawning column task failed");
    }

    for column in COLUMNS.iter() {
        for handle in column.handles() {
            spawner
                .spawn(letter_task(handle, rng))
                .expect("spawning letter task failed");
        }
    }

    // The clock loop owns the shared clock state for the program lifetime.
    run_clock(&CLOCK, CLOCK_PERIODS).await;
}
