mod tests {
    use hallowgrove::color::{Rgb, blend_colors, lerp_rgb, rgb_from_u32, scale_rgb, shade};

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
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF8040), Rgb { r: 255, g: 128, b: 64 });
        assert_eq!(rgb_from_u32(0x000000), BLACK);
    }

    #[test]
    fn test_scale_rgb_clamps() {
        assert_eq!(scale_rgb(WHITE, 0.5), Rgb { r: 128, g: 128, b: 128 });
        assert_eq!(scale_rgb(WHITE, 2.0), WHITE);
        assert_eq!(scale_rgb(WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_lerp_rgb_rounds() {
        let base = Rgb { r: 80, g: 40, b: 40 };
        assert_eq!(lerp_rgb(base, RED, 0.0), base);
        assert_eq!(lerp_rgb(base, RED, 1.0), RED);
        // 80 + 175 * 0.5 = 167.5, rounds up
        assert_eq!(
            lerp_rgb(base, RED, 0.5),
            Rgb {
                r: 168,
                g: 20,
                b: 20
            }
        );
    }

    #[test]
    fn test_shade() {
        // Horizon keeps 20% brightness, foreground full
        assert_eq!(shade(Rgb { r: 100, g: 50, b: 0 }, 0.0), Rgb { r: 20, g: 10, b: 0 });
        assert_eq!(shade(WHITE, 1.0), WHITE);
    }
}
