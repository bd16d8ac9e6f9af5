mod tests {
    use embassy_time::Duration;
    use led_strip_patterns::color::Rgb;
    use led_strip_patterns::pattern::{Direction, Pattern, PatternId};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_pattern_id_raw_round_trip() {
        for raw in 0..6u8 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(id as u8, raw);
        }
        assert_eq!(PatternId::from_raw(6), None);
        assert_eq!(PatternId::from_raw(255), None);
    }

    #[test]
    fn test_pattern_id_str_round_trip() {
        for id in [
            PatternId::RainbowCycle,
            PatternId::TheaterChase,
            PatternId::ColorWipe,
            PatternId::Scanner,
            PatternId::Pulsar,
            PatternId::Fade,
        ] {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(PatternId::parse_from_str("marquee"), None);
    }

    #[test]
    fn test_pattern_id_names() {
        assert_eq!(PatternId::RainbowCycle.as_str(), "rainbow_cycle");
        assert_eq!(PatternId::Scanner.as_str(), "scanner");
    }

    #[test]
    fn test_pattern_reports_its_id() {
        let interval = Duration::from_millis(10);
        assert_eq!(
            Pattern::rainbow_cycle(interval, Direction::Forward).id(),
            PatternId::RainbowCycle
        );
        assert_eq!(
            Pattern::theater_chase(interval, RED, BLUE, 8, Direction::Forward).id(),
            PatternId::TheaterChase
        );
        assert_eq!(
            Pattern::color_wipe(interval, RED, 8, Direction::Forward).id(),
            PatternId::ColorWipe
        );
        assert_eq!(
            Pattern::scanner(interval, RED, 8, false).id(),
            PatternId::Scanner
        );
        assert_eq!(Pattern::pulsar(interval, RED, BLUE).id(), PatternId::Pulsar);
        assert_eq!(
            Pattern::fade(interval, RED, BLUE, 10, Direction::Forward).id(),
            PatternId::Fade
        );
    }
}
