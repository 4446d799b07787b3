mod common;

mod tests {
    use embassy_time::Instant;
    use esp32_lettersign::{
        palette::Palette16, ClockState, ColorSource, Column, NoiseStrategy, Shade,
    };
    use smart_leds::colors;

    use crate::common::{letter, ScriptedRng};

    static PALETTES: [Palette16; 2] = [
        Palette16([colors::ORANGE; 16]),
        Palette16([colors::SKY_BLUE; 16]),
    ];

    #[test]
    fn two_letters_blink_at_their_own_iteration() {
        let letters = [letter("G", 0, 14, 1), letter("C", 14, 14, 5)];
        let column = Column::new("GPIO16", &letters);
        let source = ColorSource::new(&PALETTES, NoiseStrategy::ClockToggle, 64);
        let mut rng = ScriptedRng::new(&[0x0123_4567, 0x89ab_cdef, 0x0f0f_0f0f]);

        for palette in 0..2u8 {
            for noise in [false, true] {
                for iteration in 0..=24u8 {
                    let clock = ClockState {
                        iteration,
                        palette,
                        noise,
                    };
                    let now = Instant::from_millis(250 * u64::from(iteration));
                    for handle in column.handles() {
                        handle.tick(clock, &source, now, &mut rng);
                    }
                    let frame = column.render();
                    assert_eq!(frame.len(), 28);
                    let (g, c) = frame.as_slice().split_at(14);
                    let g_black = g.iter().all(|led| *led == colors::BLACK);
                    let c_black = c.iter().all(|led| *led == colors::BLACK);
                    let context = format!("iteration {iteration} palette {palette} noise {noise}");
                    match iteration {
                        1 => {
                            assert!(g_black, "{context}");
                            assert!(!c_black, "{context}");
                            assert_eq!(letters[0].shade(), Shade::Blink);
                        }
                        5 => {
                            assert!(!g_black, "{context}");
                            assert!(c_black, "{context}");
                            assert_eq!(letters[1].shade(), Shade::Blink);
                        }
                        _ => {
                            assert!(g.iter().all(|led| *led != colors::BLACK), "{context}");
                            assert!(c.iter().all(|led| *led != colors::BLACK), "{context}");
                        }
                    }
                    // Drain what the ticks queued.
                    while column.pending_renders() > 0 {
                        embassy_futures::block_on(column.serve_next(&mut NullWriter)).unwrap();
                    }
                }
            }
        }
    }

    struct NullWriter;

    impl esp32_lettersign::FrameWriter for NullWriter {
        type Error = ();

        async fn write_frame(&mut self, _frame: &[smart_leds::RGB8]) -> Result<(), ()> {
            Ok(())
        }
    }
}
