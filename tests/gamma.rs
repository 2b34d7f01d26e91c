mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::{ErrorType, SetDutyCycle};
    use picofx::color::RED;
    use picofx::gamma::{OUTPUT_GAMMA, PwmLed, RGB_GAMMA, RgbLed, gamma_duty};

    #[derive(Debug)]
    struct Channel {
        duty: u16,
        max: u16,
    }

    impl Channel {
        fn new(max: u16) -> Self {
            Self { duty: 0, max }
        }
    }

    impl ErrorType for Channel {
        type Error = Infallible;
    }

    impl SetDutyCycle for Channel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_gamma_duty() {
        assert_eq!(gamma_duty(0.0, OUTPUT_GAMMA, u16::MAX), 0);
        assert_eq!(gamma_duty(1.0, OUTPUT_GAMMA, u16::MAX), u16::MAX);
        assert_eq!(gamma_duty(0.5, 1.0, 1000), 500);
        assert_eq!(gamma_duty(0.5, 2.0, 1000), 250);
        assert_eq!(gamma_duty(0.25, 2.0, u16::MAX), 4096);
    }

    #[test]
    fn test_gamma_duty_clamps_level() {
        assert_eq!(gamma_duty(1.5, RGB_GAMMA, 1000), 1000);
        assert_eq!(gamma_duty(-0.5, RGB_GAMMA, 1000), 0);
    }

    #[test]
    fn test_gamma_duty_matches_power_curve() {
        for step in 0..=20u8 {
            let level = f32::from(step) / 20.0;
            let expected = (level.powf(2.0) * 1000.0).round() as u16;
            assert_eq!(gamma_duty(level, 2.0, 1000), expected, "level {level}");
        }
    }

    #[test]
    fn test_pwm_led() {
        let mut led = PwmLed::new(Channel::new(1000)).with_gamma(2.0);
        led.set_brightness(0.5).unwrap();
        assert_eq!(led.brightness(), 0.5);
        assert_eq!(led.duty(), 250);

        led.set_brightness(3.0).unwrap();
        assert_eq!(led.brightness(), 1.0);
        assert_eq!(led.duty(), 1000);

        led.toggle().unwrap();
        assert_eq!(led.duty(), 0);
        led.on().unwrap();
        assert_eq!(led.release().duty, 1000);
    }

    #[test]
    fn test_rgb_led() {
        let mut led = RgbLed::new(Channel::new(255), Channel::new(255), Channel::new(255))
            .with_gamma(RGB_GAMMA);
        led.set_rgb(RED).unwrap();
        assert_eq!(led.red().duty(), 255);
        assert_eq!(led.green().duty(), 0);
        assert_eq!(led.blue().duty(), 0);

        led.set_hsv(0.5, 1.0, 1.0).unwrap();
        assert_eq!(led.red().duty(), 0);
        assert_eq!(led.green().duty(), 255);
        assert_eq!(led.blue().duty(), 255);

        led.off().unwrap();
        assert_eq!(led.green().brightness(), 0.0);
    }
}
