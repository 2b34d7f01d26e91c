mod tests {
    use picofx::color::{
        BLACK, CYAN, RED, Rgb, WHITE, grey, hsv_to_rgb, rgb_from_hsv, rgb_from_levels,
    };

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(rgb_from_hsv(0.0, 1.0, 1.0), RED);
        assert_eq!(rgb_from_hsv(0.5, 1.0, 1.0), CYAN);
    }

    fn assert_levels(actual: (f32, f32, f32), expected: (f32, f32, f32)) {
        let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
        assert!(
            close(actual.0, expected.0) && close(actual.1, expected.1) && close(actual.2, expected.2),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_hsv_thirds() {
        assert_levels(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_levels(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(rgb_from_hsv(1.0, 1.0, 1.0), RED);
        assert_eq!(rgb_from_hsv(1.5, 1.0, 1.0), CYAN);
    }

    #[test]
    fn test_hsv_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 0.5), (0.5, 0.5, 0.5));
        assert_eq!(rgb_from_hsv(0.7, 0.0, 0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_levels_truncate_and_clamp() {
        assert_eq!(rgb_from_levels(1.0, 0.5, 0.0), Rgb::new(255, 127, 0));
        assert_eq!(rgb_from_levels(2.0, -1.0, 0.999), Rgb::new(255, 0, 254));
    }

    #[test]
    fn test_grey() {
        assert_eq!(grey(1.0), WHITE);
        assert_eq!(grey(0.0), BLACK);
        assert_eq!(grey(0.2), Rgb::new(51, 51, 51));
    }
}
