mod tests {
    use glowdots::color::{Rgb, blend_colors, rgb_from_u32, scale_color};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 128), Rgb { r: 128, g: 128, b: 128 });
        assert_eq!(scale_color(RED, 0), BLACK);
        assert_eq!(scale_color(RED, 255), RED);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF8800), Rgb { r: 255, g: 136, b: 0 });
        assert_eq!(rgb_from_u32(0x000000), BLACK);
        assert_eq!(rgb_from_u32(0xFFFFFF), WHITE);
    }
}
