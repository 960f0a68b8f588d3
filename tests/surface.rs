mod tests {
    use hallowgrove::color::Rgb;
    use hallowgrove::surface::{HEIGHT, Surface, WIDTH};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_new_surface_is_black() {
        let fb = Surface::new();
        assert_eq!(fb.pixels().len(), (WIDTH * HEIGHT) as usize);
        assert!(fb.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_pixel_and_get() {
        let mut fb = Surface::new();
        fb.set_pen(RED);
        fb.pixel(3, 5);
        assert_eq!(fb.get(3, 5), Some(RED));
        assert_eq!(fb.get(5, 3), Some(BLACK));
    }

    #[test]
    fn test_out_of_range_is_discarded() {
        let mut fb = Surface::new();
        fb.set_pen(RED);
        fb.pixel(-1, 0);
        fb.pixel(0, -1);
        fb.pixel(WIDTH, 0);
        fb.pixel(0, HEIGHT);
        fb.pixel(i32::MIN, i32::MAX);
        assert!(fb.pixels().iter().all(|&p| p == BLACK));

        assert_eq!(fb.get(-1, 0), None);
        assert_eq!(fb.get(WIDTH, HEIGHT), None);
    }

    #[test]
    fn test_clear_uses_pen() {
        let mut fb = Surface::new();
        fb.set_pen(RED);
        fb.clear();
        assert!(fb.pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn test_line_endpoints() {
        let mut fb = Surface::new();
        fb.set_pen(RED);
        fb.line(2.0, 2.0, 9.0, 6.0);
        assert_eq!(fb.get(2, 2), Some(RED));
        assert_eq!(fb.get(9, 6), Some(RED));
    }

    #[test]
    fn test_line_clips_offscreen_segments() {
        let mut fb = Surface::new();
        fb.set_pen(RED);
        fb.line(-10.0, 16.0, 40.0, 16.0);
        // The on-screen span is drawn, everything else dropped
        assert_eq!(fb.get(0, 16), Some(RED));
        assert_eq!(fb.get(31, 16), Some(RED));
        assert_eq!(fb.get(0, 15), Some(BLACK));
    }
}
