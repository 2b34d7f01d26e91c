mod tests {
    use embassy_time::Duration;
    use picofx::color::{BLACK, BLUE, CYAN, GREEN, RED};
    use picofx::effect::{
        BinaryCounterFx, Binding, BlinkFx, BlinkWaveFx, Cycle, Effect, FlashFx, FlashSequenceFx,
        FlickerFx, Fx, FxValue, HsvFx, HueStepFx, Interval, Lamp, MAX_BLINK_COLOURS, PulseFx,
        PulseWaveFx, RainbowFx, RainbowWaveFx, RandomFx, RgbBlinkFx, StaticFx, TrafficLightFx,
        TrafficTimings,
    };
    use picofx::error::{ConfigError, FxError};

    fn brightness(fx: &impl Effect, binding: Binding) -> f32 {
        match fx.value(binding) {
            Ok(FxValue::Brightness(level)) => level,
            other => panic!("expected brightness, got {other:?}"),
        }
    }

    fn assert_near(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = Cycle::new(1.0);
        cycle.tick(750);
        cycle.tick(500);
        assert_near(cycle.offset(), 0.25);

        let mut reverse = Cycle::new(-1.0);
        reverse.tick(250);
        assert_near(reverse.offset(), 0.75);
    }

    #[test]
    fn test_cycle_wraps_extreme_speeds() {
        let mut fast = Cycle::new(3.0e6);
        fast.tick(1000);
        fast.tick(1000);
        assert!((0.0..1.0).contains(&fast.offset()));
        assert_near(fast.offset(), 0.294);

        let mut reverse = Cycle::new(-3.0e6);
        reverse.tick(1000);
        reverse.tick(1000);
        assert_near(reverse.offset(), 0.704);
    }

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut interval = Interval::new(Duration::from_millis(100));
        assert!(!interval.tick(60));
        assert!(interval.tick(60));
        assert!(!interval.tick(60));
        interval.reset();
        assert!(!interval.tick(60));
    }

    #[test]
    fn test_pulse_quarter_cycles() {
        let mut pulse = PulseFx::new(1.0);
        assert_near(brightness(&pulse, Binding::None), 0.5);
        pulse.tick(250);
        assert_near(brightness(&pulse, Binding::None), 1.0);
        pulse.tick(250);
        assert_near(brightness(&pulse, Binding::None), 0.5);
        pulse.tick(250);
        assert_near(brightness(&pulse, Binding::None), 0.0);

        pulse.reset();
        assert_near(brightness(&pulse, Binding::None), 0.5);
    }

    #[test]
    fn test_pulse_phase() {
        let pulse = PulseFx::new(1.0).with_phase(0.25);
        assert_near(brightness(&pulse, Binding::None), 1.0);
    }

    #[test]
    fn test_pulse_wave_positions() {
        let wave = PulseWaveFx::new(1.0, 4.0);
        assert_near(brightness(&wave, Binding::Position(0.0)), 0.5);
        assert_near(brightness(&wave, Binding::Position(1.0)), 1.0);
        assert_near(brightness(&wave, Binding::Position(3.0)), 0.0);
        assert_eq!(wave.value(Binding::None), Err(FxError::IncompatibleBinding));
    }

    #[test]
    fn test_blink_duty() {
        let mut blink = BlinkFx::new(1.0).with_brightness(0.4);
        assert_eq!(brightness(&blink, Binding::None), 0.4);
        blink.tick(500);
        assert_eq!(brightness(&blink, Binding::None), 0.0);

        let short = BlinkFx::new(1.0).with_duty(0.1).with_phase(0.2);
        assert_eq!(brightness(&short, Binding::None), 0.0);
    }

    #[test]
    fn test_blink_wave() {
        let wave = BlinkWaveFx::new(1.0, 4.0);
        assert_eq!(brightness(&wave, Binding::Position(0.0)), 1.0);
        assert_eq!(brightness(&wave, Binding::Position(2.0)), 0.0);
    }

    #[test]
    fn test_rgb_blink_colours() {
        assert_eq!(RgbBlinkFx::new(1.0, &[]).unwrap().colour(), RED);
        assert_eq!(
            RgbBlinkFx::new(1.0, &[RED; MAX_BLINK_COLOURS + 1]).unwrap_err(),
            ConfigError::TooManyColours {
                max: MAX_BLINK_COLOURS
            }
        );

        let mut blink = RgbBlinkFx::new(1.0, &[RED, GREEN, BLUE]).unwrap();
        blink.next();
        assert_eq!(blink.value(Binding::None), Ok(FxValue::Colour(GREEN)));
        blink.prev();
        blink.prev();
        assert_eq!(blink.colour(), BLUE);

        blink.tick(600);
        assert_eq!(blink.value(Binding::None), Ok(FxValue::Colour(BLACK)));
    }

    #[test]
    fn test_flash_rejects_zero_flashes() {
        assert_eq!(
            FlashFx::new(1.0, 0, 0.5).unwrap_err(),
            ConfigError::InvalidFlashCount
        );
        assert_eq!(
            FlashSequenceFx::new(1.0, 4.0, 0, 0.5).unwrap_err(),
            ConfigError::InvalidFlashCount
        );

        let mut flash = FlashFx::new(1.0, 2, 0.5).unwrap();
        assert_eq!(flash.set_flashes(0), Err(ConfigError::InvalidFlashCount));
        assert_eq!(flash.flashes(), 2);
    }

    #[test]
    fn test_flash_burst() {
        let mut flash = FlashFx::new(1.0, 2, 0.5).unwrap();
        assert_eq!(brightness(&flash, Binding::None), 1.0);
        flash.tick(125);
        assert_eq!(brightness(&flash, Binding::None), 0.0);
        flash.tick(125);
        assert_eq!(brightness(&flash, Binding::None), 1.0);
        flash.tick(250);
        assert_eq!(brightness(&flash, Binding::None), 0.0);
    }

    #[test]
    fn test_flash_sequence_positions() {
        let sequence = FlashSequenceFx::new(1.0, 4.0, 1, 0.5).unwrap();
        assert_eq!(brightness(&sequence, Binding::Position(0.0)), 1.0);
        assert_eq!(brightness(&sequence, Binding::Position(2.0)), 0.0);
    }

    #[test]
    fn test_static_effects_do_not_tick() {
        let fx = StaticFx::new(0.3);
        assert_eq!(fx.value(Binding::None), Ok(FxValue::Brightness(0.3)));
        assert!(!Fx::from(fx).ticks());
        assert!(Fx::from(PulseFx::new(1.0)).ticks());

        let hsv = HsvFx::new(0.5, 1.0, 1.0);
        assert_eq!(hsv.value(Binding::None), Ok(FxValue::Colour(CYAN)));
        assert_eq!(hsv.value(Binding::Bit(0)), Err(FxError::IncompatibleBinding));
    }

    #[test]
    fn test_binary_counter_bits() {
        let mut counter = BinaryCounterFx::new(Duration::from_millis(100)).with_count(5);
        assert_eq!(brightness(&counter, Binding::Bit(0)), 1.0);
        assert_eq!(brightness(&counter, Binding::Bit(1)), 0.0);
        assert_eq!(brightness(&counter, Binding::Bit(2)), 1.0);
        assert_eq!(brightness(&counter, Binding::Bit(40)), 0.0);

        counter.tick(100);
        assert_eq!(counter.counter(), 6);
        counter.reset();
        assert_eq!(counter.counter(), 5);

        assert_eq!(
            counter.value(Binding::None),
            Err(FxError::IncompatibleBinding)
        );
    }

    #[test]
    fn test_binary_counter_wraps() {
        let mut counter = BinaryCounterFx::new(Duration::from_millis(10)).with_step(u32::MAX);
        counter.tick(10);
        assert_eq!(counter.counter(), u32::MAX);
        counter.tick(10);
        assert_eq!(counter.counter(), u32::MAX - 1);
    }

    fn short_timings() -> TrafficTimings {
        TrafficTimings {
            red: Duration::from_millis(100),
            red_amber: Duration::from_millis(100),
            green: Duration::from_millis(100),
            amber: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_traffic_light_sequence() {
        let mut light = TrafficLightFx::new(short_timings(), 1.0, false);
        light.tick(10);
        assert_eq!(light.state(), 0);
        assert_eq!(brightness(&light, Binding::Lamp(Lamp::Red)), 1.0);
        assert_eq!(brightness(&light, Binding::Lamp(Lamp::Amber)), 0.0);

        light.tick(90);
        assert_eq!(light.state(), 1);
        assert_eq!(light.lamp(Lamp::Red), 1.0);
        assert_eq!(light.lamp(Lamp::Amber), 1.0);

        light.tick(100);
        assert_eq!(light.state(), 2);
        assert_eq!(light.lamp(Lamp::Red), 0.0);
        assert_eq!(light.lamp(Lamp::Amber), 0.0);
        assert_eq!(light.lamp(Lamp::Green), 1.0);

        light.tick(100);
        assert_eq!(light.state(), 3);
        assert_eq!(light.lamp(Lamp::Amber), 1.0);
        assert_eq!(light.lamp(Lamp::Green), 0.0);

        light.tick(100);
        assert_eq!(light.state(), 0);
        assert_eq!(
            light.value(Binding::Bit(0)),
            Err(FxError::IncompatibleBinding)
        );
    }

    #[test]
    fn test_traffic_light_fades() {
        let mut light = TrafficLightFx::new(TrafficTimings::default(), 0.01, false);
        light.tick(50);
        assert_near(light.lamp(Lamp::Red), 0.5);
        light.tick(50);
        assert_near(light.lamp(Lamp::Red), 1.0);
    }

    #[test]
    fn test_traffic_light_amber_flashing() {
        let timings = TrafficTimings {
            red: Duration::from_millis(1000),
            red_amber: Duration::from_millis(1000),
            green: Duration::from_millis(1000),
            amber: Duration::from_millis(1000),
        };
        let mut light = TrafficLightFx::new(timings, 1.0, true);
        light.tick(1000);
        assert_eq!(light.state(), 1);
        assert_eq!(light.lamp(Lamp::Red), 0.0);
        assert_eq!(light.lamp(Lamp::Amber), 1.0);

        light.tick(130);
        assert_eq!(light.lamp(Lamp::Amber), 0.0);
        light.tick(130);
        assert_eq!(light.lamp(Lamp::Amber), 1.0);
    }

    #[test]
    fn test_rainbow() {
        let mut rainbow = RainbowFx::new(1.0);
        assert_eq!(rainbow.value(Binding::None), Ok(FxValue::Colour(RED)));
        rainbow.tick(500);
        assert_eq!(rainbow.value(Binding::None), Ok(FxValue::Colour(CYAN)));

        let wave = RainbowWaveFx::new(1.0, 2.0);
        assert_eq!(
            wave.value(Binding::Position(0.0)),
            Ok(FxValue::Colour(RED))
        );
        assert_eq!(
            wave.value(Binding::Position(1.0)),
            Ok(FxValue::Colour(CYAN))
        );
    }

    #[test]
    fn test_hue_step() {
        assert_eq!(
            HueStepFx::new(Duration::from_millis(100))
                .with_steps(0)
                .unwrap_err(),
            ConfigError::InvalidStepCount
        );

        let mut step = HueStepFx::new(Duration::from_millis(100))
            .with_steps(2)
            .unwrap();
        assert_eq!(step.value(Binding::None), Ok(FxValue::Colour(RED)));
        step.tick(100);
        assert_eq!(step.step(), 1);
        assert_eq!(step.value(Binding::None), Ok(FxValue::Colour(CYAN)));
        step.tick(100);
        assert_eq!(step.value(Binding::None), Ok(FxValue::Colour(RED)));
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut random = RandomFx::new(Duration::from_millis(10), 0.2, 0.4).with_seed(7);
        for _ in 0..100 {
            let level = brightness(&random, Binding::None);
            assert!((0.2..=0.4).contains(&level), "{level} out of range");
            random.tick(10);
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = RandomFx::new(Duration::from_millis(10), 0.0, 1.0).with_seed(42);
        let mut b = RandomFx::new(Duration::from_millis(10), 0.0, 1.0).with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.value(Binding::None), b.value(Binding::None));
            a.tick(10);
            b.tick(10);
        }
    }

    #[test]
    fn test_flicker_alternates() {
        let mut flicker = FlickerFx::new(1.0, 0.5)
            .with_bright_hold(Duration::from_millis(100), Duration::from_millis(100))
            .with_dim_hold(Duration::from_millis(20), Duration::from_millis(20));
        assert_eq!(brightness(&flicker, Binding::None), 1.0);

        flicker.tick(99);
        assert!(!flicker.is_dim());
        flicker.tick(1);
        assert!(flicker.is_dim());
        assert_eq!(brightness(&flicker, Binding::None), 0.5);

        flicker.tick(20);
        assert_eq!(brightness(&flicker, Binding::None), 1.0);
    }
}
