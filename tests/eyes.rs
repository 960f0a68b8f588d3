mod tests {
    use embassy_time::Instant;
    use hallowgrove::color::Rgb;
    use hallowgrove::eyes::{EyeConfig, EyeEngine, EyeShape, fade_color};
    use hallowgrove::surface::Surface;

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn oval(x: f32, y: f32) -> EyeConfig {
        EyeConfig {
            x,
            y,
            color: GREEN,
            radius_x: 1.5,
            radius_y: 1.0,
            shape: EyeShape::Oval,
            glow: 0.8,
        }
    }

    fn point(x: f32, y: f32, color: Rgb) -> EyeConfig {
        EyeConfig {
            x,
            y,
            color,
            radius_x: 0.5,
            radius_y: 0.5,
            shape: EyeShape::Point,
            glow: 0.5,
        }
    }

    #[test]
    fn test_pair_bookkeeping() {
        let mut eyes = EyeEngine::new(1);
        eyes.add_pair(oval(8.0, 10.0), oval(13.0, 10.0));
        assert_eq!(eyes.eye_count(), 2);
        assert_eq!(eyes.pair_count(), 1);
        assert_eq!(eyes.eye_pair_index(0), eyes.eye_pair_index(1));
        assert_eq!(eyes.eye_pair_index(0), Some(0));

        eyes.clear();
        assert_eq!(eyes.eye_count(), 0);
        assert_eq!(eyes.pair_count(), 0);

        eyes.add_eye(oval(4.0, 4.0));
        assert_eq!(eyes.eye_count(), 1);
        assert_eq!(eyes.pair_count(), 1);
    }

    #[test]
    fn test_positions_fixed_without_repositioning() {
        let mut eyes = EyeEngine::new(2);
        eyes.add_pair(oval(8.0, 10.0), oval(13.0, 10.0));
        let left = eyes.eye_position(0).unwrap();
        let right = eyes.eye_position(1).unwrap();

        for ms in (0..60_000).step_by(20) {
            eyes.update(Instant::from_millis(ms));
        }
        assert_eq!(eyes.eye_position(0), Some(left));
        assert_eq!(eyes.eye_position(1), Some(right));
    }

    #[test]
    fn test_state_invariants_over_time() {
        let mut eyes = EyeEngine::new(3);
        eyes.add_pair(oval(5.0, 8.0), oval(10.0, 8.0));
        eyes.add_pair(oval(20.0, 20.0), oval(25.0, 20.0));
        eyes.add_eye(point(16.0, 4.0, GREEN));
        eyes.enable_repositioning();

        for ms in (0..120_000).step_by(20) {
            eyes.update(Instant::from_millis(ms));
            for pair in eyes.pairs() {
                let phase = pair.blink_phase();
                assert!((0.0..=1.0).contains(&phase), "blink phase {phase}");
                let (px, py) = pair.pupil();
                assert!((-1.5..=1.5).contains(&px), "pupil x {px}");
                assert!((-1.5..=1.5).contains(&py), "pupil y {py}");
                assert!((0.0..=1.0).contains(&pair.fade_phase()));
                if pair.is_repositioning() {
                    // Eyes stay shut for the whole closed window
                    assert_eq!(pair.blink_phase(), 1.0);
                }
            }
        }
    }

    #[test]
    fn test_repositioned_pair_keeps_spacing() {
        let mut eyes = EyeEngine::new(4);
        eyes.add_pair(oval(8.0, 10.0), oval(13.0, 10.0));
        eyes.enable_repositioning();

        let start = eyes.eye_position(0).unwrap();
        let mut moved = false;
        for ms in (0..120_000).step_by(20) {
            eyes.update(Instant::from_millis(ms));
            if eyes.eye_position(0) != Some(start) {
                moved = true;
                let (lx, ly) = eyes.eye_position(0).unwrap();
                let (rx, ry) = eyes.eye_position(1).unwrap();
                assert_eq!(rx - lx, 4.0);
                assert_eq!(ly, ry);
            }
        }
        assert!(moved, "pair never repositioned in two minutes");
    }

    #[test]
    fn test_fade_color_midpoint() {
        let base = Rgb { r: 80, g: 40, b: 40 };
        assert_eq!(
            fade_color(base, true, 0.5),
            Rgb {
                r: 168,
                g: 20,
                b: 20
            }
        );
        assert_eq!(fade_color(base, true, 0.0), base);
        assert_eq!(fade_color(base, true, 1.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(fade_color(base, false, 1.0), base);
    }

    #[test]
    fn test_point_eye_draws_faded_color() {
        let base = Rgb { r: 80, g: 40, b: 40 };
        let mut eyes = EyeEngine::new(5);
        eyes.add_pair(point(10.0, 10.0, base), point(14.0, 10.0, base));

        let mut fb = Surface::new();
        for ms in (0..5_000).step_by(50) {
            eyes.update(Instant::from_millis(ms));
            eyes.draw(&mut fb, 0.0);

            let pair = &eyes.pairs()[0];
            if pair.blink_phase() <= 0.9 {
                let expected = fade_color(base, pair.is_fading_to_red(), pair.fade_phase());
                assert_eq!(fb.get(10, 10), Some(expected));
                assert_eq!(fb.get(14, 10), Some(expected));
            }
        }
    }

    #[test]
    fn test_corner_eyes_clip_cleanly() {
        let mut eyes = EyeEngine::new(6);
        for (x, y) in [(0.0, 0.0), (31.0, 0.0), (0.0, 31.0), (31.0, 31.0)] {
            eyes.add_eye(oval(x, y));
        }
        eyes.update(Instant::from_millis(16));

        let mut fb = Surface::new();
        eyes.draw(&mut fb, 1.0);
        // Body pixels that land on the panel are written; everything else
        // was silently clipped.
        assert_eq!(fb.get(0, 0), Some(GREEN));
        assert_eq!(fb.get(31, 31), Some(GREEN));
    }

    #[test]
    fn test_pool_is_bounded() {
        let mut eyes = EyeEngine::new(7);
        for i in 0..40 {
            eyes.add_eye(oval(i as f32, 16.0));
        }
        assert!(eyes.eye_count() <= 16);
        assert_eq!(eyes.eye_count(), eyes.pair_count());
    }
}
