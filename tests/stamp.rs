mod tests {
    use embassy_time::Instant;
    use esp32_lettersign::Stamp;

    #[test]
    fn formats_hours_minutes_seconds_and_fraction() {
        assert_eq!(
            Stamp(Instant::from_micros(3_723_456_789)).to_string(),
            "01:02:03.45678"
        );
    }

    #[test]
    fn starts_at_zero_and_wraps_daily() {
        assert_eq!(Stamp(Instant::from_ticks(0)).to_string(), "00:00:00.00000");
        assert_eq!(
            Stamp(Instant::from_secs(25 * 3600 + 5)).to_string(),
            "01:00:05.00000"
        );
    }
}
