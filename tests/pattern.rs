mod tests {
    use embassy_time::{Duration, Instant};
    use led_strip_patterns::pattern::{Direction, Pattern, StepEvent, elapsed_millis};
    use led_strip_patterns::color::Rgb;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn ten_step_fade(interval_ms: u64, direction: Direction) -> Pattern {
        Pattern::fade(
            Duration::from_millis(interval_ms),
            RED,
            BLUE,
            10,
            direction,
        )
    }

    #[test]
    fn test_starts_at_index_zero() {
        let pattern = ten_step_fade(10, Direction::Forward);
        assert_eq!(pattern.index(), 0);
        assert_eq!(pattern.total_steps(), 10);
        assert_eq!(pattern.direction(), Direction::Forward);
    }

    #[test]
    fn test_is_due_strictly_after_interval() {
        let pattern = ten_step_fade(10, Direction::Forward);
        assert!(!pattern.is_due(Instant::from_millis(5)));
        assert!(!pattern.is_due(Instant::from_millis(10)));
        assert!(pattern.is_due(Instant::from_millis(11)));
    }

    #[test]
    fn test_zero_interval_due_every_tick() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        assert!(pattern.is_due(Instant::from_millis(1)));
        pattern.mark_updated(Instant::from_millis(1));
        assert!(!pattern.is_due(Instant::from_millis(1)));
        assert!(pattern.is_due(Instant::from_millis(2)));
    }

    #[test]
    fn test_mark_updated_rearms_interval() {
        let mut pattern = ten_step_fade(10, Direction::Forward);
        assert_eq!(
            pattern.mark_updated(Instant::from_millis(100)),
            StepEvent::Advanced
        );
        assert_eq!(pattern.index(), 1);
        assert!(!pattern.is_due(Instant::from_millis(110)));
        assert!(pattern.is_due(Instant::from_millis(111)));
    }

    #[test]
    fn test_reset_rewinds_index_and_clock() {
        let mut pattern = ten_step_fade(10, Direction::Forward);
        pattern.mark_updated(Instant::from_millis(100));
        pattern.mark_updated(Instant::from_millis(200));
        assert_eq!(pattern.index(), 2);

        pattern.reset();
        assert_eq!(pattern.index(), 0);
        // Last update rewinds to the epoch, so the next check is due again.
        assert!(pattern.is_due(Instant::from_millis(11)));
    }

    #[test]
    fn test_forward_full_cycle_wraps_once() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        let mut wraps = 0;
        for _ in 0..10 {
            if pattern.advance() == StepEvent::Wrapped {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(pattern.index(), 0);
    }

    #[test]
    fn test_forward_first_advance_is_not_completion() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        assert_eq!(pattern.advance(), StepEvent::Advanced);
        assert_eq!(pattern.index(), 1);
    }

    #[test]
    fn test_reverse_walk_wraps_to_far_boundary() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        pattern.reverse();
        assert_eq!(pattern.direction(), Direction::Reverse);
        assert_eq!(pattern.index(), 9);

        let mut wraps = 0;
        for _ in 0..9 {
            if pattern.advance() == StepEvent::Wrapped {
                wraps += 1;
            }
        }
        // 9 -> 8 -> ... -> 1, then wrap back to 9. Index 0 belongs to the
        // forward start and is skipped on the reverse walk.
        assert_eq!(wraps, 1);
        assert_eq!(pattern.index(), 9);
    }

    #[test]
    fn test_double_reverse_restores_direction_not_index() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        for _ in 0..3 {
            pattern.advance();
        }
        assert_eq!(pattern.index(), 3);

        pattern.reverse();
        pattern.reverse();
        // Direction always round-trips; a mid-cycle index does not.
        assert_eq!(pattern.direction(), Direction::Forward);
        assert_eq!(pattern.index(), 0);
    }

    #[test]
    fn test_double_reverse_at_boundary_restores_index() {
        let mut pattern = ten_step_fade(0, Direction::Forward);
        pattern.reverse();
        pattern.reverse();
        assert_eq!(pattern.direction(), Direction::Forward);
        assert_eq!(pattern.index(), 0);
    }

    #[test]
    fn test_elapsed_millis_survives_counter_wraparound() {
        // Stamp taken just before a free-running counter overflows.
        let before_wrap = u64::MAX - 5;
        assert_eq!(elapsed_millis(2, before_wrap), 8);
        assert_eq!(elapsed_millis(before_wrap, before_wrap), 0);
        assert_eq!(elapsed_millis(u64::MAX, before_wrap), 5);
    }

    #[test]
    fn test_pulsar_and_rainbow_step_spaces() {
        let pulsar = Pattern::pulsar(Duration::from_millis(500), RED, BLUE);
        assert_eq!(pulsar.total_steps(), 2);

        let rainbow = Pattern::rainbow_cycle(Duration::from_millis(5), Direction::Forward);
        assert_eq!(rainbow.total_steps(), 255);

        let scanner = Pattern::scanner(Duration::from_millis(50), RED, 8, false);
        assert_eq!(scanner.total_steps(), 16);

        let split_scanner = Pattern::scanner(Duration::from_millis(50), RED, 8, true);
        assert_eq!(split_scanner.total_steps(), 8);
    }
}
