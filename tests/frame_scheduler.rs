mod tests {
    use embassy_time::Instant;
    use hallowgrove::frame_scheduler::{DEFAULT_FRAME_DURATION, FrameScheduler};
    use hallowgrove::{Buttons, Director, HEIGHT, OutputDriver, Rgb, WIDTH};

    /// Stand-in panel that checks every frame is full-size.
    struct PanelStub;

    impl OutputDriver for PanelStub {
        fn write(&mut self, colors: &[Rgb]) {
            assert_eq!(colors.len(), (WIDTH * HEIGHT) as usize);
        }
    }

    #[test]
    fn test_tick_writes_full_frames() {
        let mut scheduler = FrameScheduler::new(Director::new(1), PanelStub);

        let buttons = Buttons::default();
        let mut now = 0;
        for _ in 0..10 {
            let result = scheduler.tick(Instant::from_millis(now), &buttons);
            assert!(!result.exit);
            assert!(result.sleep_duration <= DEFAULT_FRAME_DURATION);
            now += DEFAULT_FRAME_DURATION.as_millis();
        }
    }

    #[test]
    fn test_exit_propagates() {
        let mut scheduler = FrameScheduler::new(Director::new(2), PanelStub);

        let result = scheduler.tick(Instant::from_millis(0), &Buttons::default());
        assert!(!result.exit);

        let d = Buttons {
            d: true,
            ..Buttons::default()
        };
        let result = scheduler.tick(Instant::from_millis(33), &d);
        assert!(result.exit);
    }

    #[test]
    fn test_deadlines_advance() {
        let mut scheduler = FrameScheduler::new(Director::new(3), PanelStub);

        let first = scheduler.tick(Instant::from_millis(0), &Buttons::default());
        let second = scheduler.tick(first.next_deadline, &Buttons::default());
        assert!(second.next_deadline.as_millis() > first.next_deadline.as_millis());
    }
}
