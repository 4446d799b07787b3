mod common;

mod tests {
    use std::cell::RefCell;

    use embassy_futures::{
        block_on,
        join::join,
        select::{select, Either},
    };
    use embassy_time::{Duration, Timer};
    use esp32_lettersign::{
        palette::Palette16, run_clock, run_column, run_letter, ClockCell, ClockPeriods,
        ClockState, ColorSource, Column, Extent, Letter, LetterConf, NoiseStrategy, Shade,
        WaitTime,
    };
    use smart_leds::colors;

    use crate::common::{FlakyWriter, ScriptedRng};

    static GREEN: [Palette16; 1] = [Palette16([colors::GREEN; 16])];

    #[test]
    fn clock_triggers_fire_on_their_own_periods() {
        let clock = ClockCell::new(3, 3);
        let periods = ClockPeriods {
            iteration: Duration::from_millis(40),
            palette: Duration::from_millis(130),
            noise: Duration::from_millis(170),
        };
        let outcome = block_on(select(
            run_clock(&clock, periods),
            Timer::after(Duration::from_millis(300)),
        ));
        assert!(matches!(outcome, Either::Second(())));
        // Seven iteration ticks wrap 0..=3 once, two rotations of three
        // palettes, one noise flip.
        assert_eq!(
            clock.snapshot(),
            ClockState {
                iteration: 3,
                palette: 2,
                noise: true
            }
        );
    }

    #[test]
    fn letter_keeps_ticking_past_failed_writes() {
        let letters = [Letter::new(LetterConf {
            identifier: "A",
            extent: Extent::new(0, 3),
            blink_threshold: 9,
            wait: WaitTime::between_ms(15, 25),
        })];
        let column = Column::new("flaky", &letters);
        let clock = ClockCell::new(24, 1);
        let source = ColorSource::new(&GREEN, NoiseStrategy::Disabled, 255);
        let outcomes = RefCell::new(Vec::new());
        let handle = column.handle(0).unwrap();

        let outcome = block_on(select(
            join(
                run_letter(handle, &clock, &source, ScriptedRng::new(&[3, 0])),
                run_column(&column, FlakyWriter { outcomes: &outcomes }),
            ),
            Timer::after(Duration::from_millis(400)),
        ));
        assert!(matches!(outcome, Either::Second(())));

        let outcomes = outcomes.into_inner();
        assert!(outcomes.len() >= 5, "only {} writes", outcomes.len());
        let first_failure = outcomes
            .iter()
            .position(Result::is_err)
            .expect("a write failed");
        assert!(outcomes[first_failure..].iter().any(Result::is_ok));
        for frame in outcomes.iter().flatten() {
            assert_eq!(frame, &vec![colors::GREEN; 3]);
        }
        assert_eq!(letters[0].shade(), Shade::Lit(colors::GREEN));
    }
}
