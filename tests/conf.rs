mod common;

mod tests {
    use esp32_lettersign::{
        conf::{validate, DESK_COLUMNS, MAX_FRAME_LEDS, MAX_ITERATION, SIGN_COLUMNS},
        Column, ConfigError, Extent, Letter, LetterConf, WaitTime,
    };

    use crate::common::letter;

    #[test]
    fn board_tables_are_valid() {
        assert_eq!(validate(&SIGN_COLUMNS, MAX_ITERATION), Ok(()));
        assert_eq!(validate(&DESK_COLUMNS, MAX_ITERATION), Ok(()));
    }

    #[test]
    fn board_tables_are_contiguous() {
        for column in SIGN_COLUMNS.iter().chain(DESK_COLUMNS.iter()) {
            let mut next = 0;
            for letter in column.letters() {
                assert_eq!(letter.extent().offset, next, "{}", letter.identifier());
                next = letter.extent().end();
            }
        }
    }

    #[test]
    fn overlap_is_rejected() {
        let letters = [letter("A", 0, 10, 1), letter("B", 9, 4, 2)];
        let columns = [Column::new("gpio", &letters)];
        assert_eq!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::Overlap {
                column: "gpio",
                first: "A",
                second: "B"
            })
        );
    }

    #[test]
    fn touching_extents_are_fine() {
        let letters = [letter("A", 5, 5, 1), letter("B", 0, 5, 2)];
        let columns = [Column::new("gpio", &letters)];
        assert_eq!(validate(&columns, MAX_ITERATION), Ok(()));
    }

    #[test]
    fn letter_past_frame_capacity_is_rejected() {
        let letters = [letter("A", MAX_FRAME_LEDS - 2, 3, 1)];
        let columns = [Column::new("gpio", &letters)];
        assert_eq!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::ExceedsFrame {
                letter: "A",
                end: MAX_FRAME_LEDS + 1,
                capacity: MAX_FRAME_LEDS
            })
        );
    }

    #[test]
    fn threshold_above_max_iteration_is_rejected() {
        let letters = [letter("A", 0, 3, MAX_ITERATION + 1)];
        let columns = [Column::new("gpio", &letters)];
        assert!(matches!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::ThresholdOutOfRange { letter: "A", .. })
        ));
    }

    #[test]
    fn empty_column_and_letter_are_rejected() {
        let columns = [Column::new("bare", &[])];
        assert_eq!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::EmptyColumn { column: "bare" })
        );

        let letters = [letter("A", 0, 0, 1)];
        let columns = [Column::new("gpio", &letters)];
        assert_eq!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::EmptyLetter { letter: "A" })
        );
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let letters = [Letter::new(LetterConf {
            identifier: "A",
            extent: Extent::new(0, 4),
            blink_threshold: 1,
            wait: WaitTime::between_ms(300, 200),
        })];
        let columns = [Column::new("gpio", &letters)];
        assert_eq!(
            validate(&columns, MAX_ITERATION),
            Err(ConfigError::InvalidInterval { letter: "A" })
        );
    }

    #[test]
    fn errors_name_the_offenders() {
        let err = ConfigError::Overlap {
            column: "GPIO16",
            first: "G",
            second: "C",
        };
        assert_eq!(err.to_string(), "column GPIO16: letters G and C overlap");
    }
}
