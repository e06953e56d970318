mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_time::{Duration, Instant};
    use flamewick::color::{BLACK_BODY, packed};
    use flamewick::effect::{EMBER_HEAT, EffectId};
    use flamewick::engine::FlameVariant;
    use flamewick::renderer::{LampConfig, Renderer};
    use flamewick::switch::ModeChannel;
    use flamewick::{FrameScheduler, OutputDriver};

    const LEDS: usize = 60;
    const CHANNEL_SIZE: usize = 4;

    #[derive(Default)]
    struct Log {
        pixels: Vec<(usize, u32)>,
        flushes: usize,
    }

    /// Driver stub that records what the scheduler pushes.
    #[derive(Clone, Default)]
    struct RecordingDriver {
        log: Rc<RefCell<Log>>,
    }

    impl OutputDriver for RecordingDriver {
        fn set_pixel(&mut self, index: usize, color: u32) {
            self.log.borrow_mut().pixels.push((index, color));
        }

        fn flush(&mut self) {
            self.log.borrow_mut().flushes += 1;
        }
    }

    fn ember_renderer(
        channel: &ModeChannel<CHANNEL_SIZE>,
    ) -> Renderer<'_, LEDS, CHANNEL_SIZE> {
        Renderer::new(
            channel.receiver(),
            &LampConfig {
                mode: EffectId::Ember,
                variant: FlameVariant::Torch,
                palette: &BLACK_BODY,
                brightness: 255,
            },
        )
    }

    #[test]
    fn test_tick_pushes_pixels_in_order_then_flushes_once() {
        let channel = ModeChannel::<CHANNEL_SIZE>::new();
        let driver = RecordingDriver::default();
        let log = driver.log.clone();
        let mut scheduler = FrameScheduler::new(ember_renderer(&channel), driver);

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.renderer().mode(), EffectId::Ember);

        let log = log.borrow();
        assert_eq!(log.flushes, 1);
        assert_eq!(log.pixels.len(), LEDS);
        let expected = packed(BLACK_BODY.color_at(EMBER_HEAT));
        for (i, (index, color)) in log.pixels.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(*color, expected);
        }
    }

    #[test]
    fn test_tick_schedules_the_next_frame() {
        let channel = ModeChannel::<CHANNEL_SIZE>::new();
        let mut scheduler =
            FrameScheduler::new(ember_renderer(&channel), RecordingDriver::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(40));
    }

    #[test]
    fn test_drift_reset_after_a_long_stall() {
        let channel = ModeChannel::<CHANNEL_SIZE>::new();
        let mut scheduler =
            FrameScheduler::new(ember_renderer(&channel), RecordingDriver::default());

        scheduler.tick(Instant::from_millis(0));
        // Far past the deadline: the backlog is skipped, not replayed.
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1040));
        assert_eq!(result.sleep_duration, Duration::from_millis(40));
    }

    #[test]
    fn test_custom_frame_duration() {
        let channel = ModeChannel::<CHANNEL_SIZE>::new();
        let mut scheduler = FrameScheduler::with_frame_duration(
            ember_renderer(&channel),
            RecordingDriver::default(),
            Duration::from_millis(100),
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(100));
    }
}
