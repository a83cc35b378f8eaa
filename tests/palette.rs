mod tests {
    use glowdots::color::BLACK;
    use glowdots::{AXIS_MAX, ColorSet, ColorSetError, Palette, Rgb, uniform_positions};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_uniform_positions_bounds() {
        for count in 2..=32 {
            let positions = uniform_positions(0, AXIS_MAX, count);
            assert_eq!(positions.len(), count);
            assert_eq!(positions[0], 0);
            assert_eq!(positions[count - 1], AXIS_MAX - 1);
            assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_uniform_positions_single() {
        let positions = uniform_positions(0, AXIS_MAX, 1);
        assert_eq!(positions.as_slice(), &[0]);
    }

    #[test]
    #[should_panic]
    fn test_uniform_positions_zero_count_violates_contract() {
        let _ = uniform_positions(0, AXIS_MAX, 0);
    }

    #[test]
    #[should_panic]
    fn test_uniform_positions_oversized_count_violates_contract() {
        let _ = uniform_positions(0, AXIS_MAX, 33);
    }

    #[test]
    fn test_uniform_positions_spacing() {
        let positions = uniform_positions(0, 1000, 3);
        assert_eq!(positions.as_slice(), &[0, 500, 999]);
    }

    #[test]
    fn test_color_set_rejects_empty() {
        assert_eq!(ColorSet::from_colors(&[]), Err(ColorSetError::Empty));
    }

    #[test]
    fn test_color_set_rejects_too_many() {
        let colors = [RED; 33];
        assert_eq!(ColorSet::from_colors(&colors), Err(ColorSetError::TooMany));
    }

    #[test]
    fn test_color_set_position_mismatch_falls_back_to_uniform() {
        let explicit = ColorSet::from_stops(&[RED, GREEN, BLUE], &[0, 9]).unwrap();
        let uniform = ColorSet::from_colors(&[RED, GREEN, BLUE]).unwrap();
        assert_eq!(explicit, uniform);
    }

    #[test]
    fn test_color_set_unordered_positions_fall_back_to_uniform() {
        let explicit = ColorSet::from_stops(&[RED, BLUE], &[9000, 100]).unwrap();
        let uniform = ColorSet::from_colors(&[RED, BLUE]).unwrap();
        assert_eq!(explicit, uniform);
    }

    #[test]
    fn test_single_stop_palette_pulses_to_black() {
        let colors = ColorSet::from_colors(&[RED]).unwrap();
        let palette = Palette::build(&colors);

        assert_eq!(palette.entry(0), RED);
        assert_eq!(palette.entry(255), BLACK);

        // Red channel decreases monotonically toward black.
        let mut previous = 255u8;
        for i in 0u8..=255 {
            let entry = palette.entry(i);
            assert!(entry.r <= previous);
            assert_eq!(entry.g, 0);
            assert_eq!(entry.b, 0);
            previous = entry.r;
        }
    }

    #[test]
    fn test_two_stop_palette_midpoint() {
        let colors = ColorSet::from_stops(&[RED, BLUE], &[0, AXIS_MAX]).unwrap();
        let palette = Palette::build(&colors);

        assert_eq!(palette.entry(0), RED);
        assert_eq!(palette.entry(255), BLUE);

        // Midpoint is the component-wise average, within one step of
        // rounding.
        let mid = palette.entry(127);
        assert!(mid.r.abs_diff(128) <= 1);
        assert_eq!(mid.g, 0);
        assert!(mid.b.abs_diff(128) <= 1);
    }

    #[test]
    fn test_palette_clamps_outside_stop_range() {
        let colors = ColorSet::from_stops(&[GREEN, BLUE], &[20000, 40000]).unwrap();
        let palette = Palette::build(&colors);

        // Entries below the first stop and above the last one hold the
        // boundary colors.
        assert_eq!(palette.entry(0), GREEN);
        assert_eq!(palette.entry(10), GREEN);
        assert_eq!(palette.entry(200), BLUE);
        assert_eq!(palette.entry(255), BLUE);
    }

    #[test]
    fn test_default_pair_is_red_blue() {
        let colors = ColorSet::default_pair();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.color(0), RED);
        assert_eq!(colors.color(1), BLUE);

        let palette = Palette::build(&colors);
        assert_eq!(palette.entry(0), RED);
        assert_eq!(palette.entry(255), BLUE);
    }
}
