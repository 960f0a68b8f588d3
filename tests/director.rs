mod tests {
    use embassy_time::Instant;
    use hallowgrove::director::Director;
    use hallowgrove::input::Buttons;
    use hallowgrove::scene::SceneId;
    use hallowgrove::surface::Surface;

    const STEP_MS: u64 = 50;

    fn run_until(director: &mut Director, from_ms: u64, to_ms: u64) {
        let buttons = Buttons::default();
        let mut ms = from_ms;
        while ms <= to_ms {
            assert!(director.update(Instant::from_millis(ms), &buttons));
            ms += STEP_MS;
        }
    }

    fn press(director: &mut Director, ms: u64, buttons: Buttons) -> bool {
        let running = director.update(Instant::from_millis(ms), &buttons);
        // Release on the next tick so the edge detector re-arms
        director.update(Instant::from_millis(ms + STEP_MS), &Buttons::default()) && running
    }

    #[test]
    fn test_scene_sequencing_with_transitions() {
        let mut director = Director::new(42);
        let buttons = Buttons::default();

        let mut order = vec![director.scene_id()];
        let mut ms = 0;
        while order.len() < 6 && ms < 200_000 {
            director.update(Instant::from_millis(ms), &buttons);
            if director.scene_id() != *order.last().unwrap() {
                order.push(director.scene_id());
            }
            ms += STEP_MS;
        }

        assert_eq!(
            &order[..5],
            &[
                SceneId::CreepyEyes,
                SceneId::WoodlandPath,
                SceneId::Pumpkin,
                SceneId::WoodlandPath,
                SceneId::FlyingBats,
            ]
        );
    }

    #[test]
    fn test_never_two_catalog_scenes_back_to_back() {
        let mut director = Director::new(7);
        let buttons = Buttons::default();

        let mut previous = director.scene_id();
        for ms in (0..600_000).step_by(STEP_MS as usize) {
            director.update(Instant::from_millis(ms), &buttons);
            let current = director.scene_id();
            if current != previous {
                assert!(
                    previous == SceneId::WoodlandPath || current == SceneId::WoodlandPath,
                    "{previous:?} -> {current:?} without a transition"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_dwell_multipliers() {
        let mut director = Director::new(9);

        // Creepy eyes holds for 24 s
        run_until(&mut director, 0, 23_950);
        assert_eq!(director.scene_id(), SceneId::CreepyEyes);
        run_until(&mut director, 24_000, 24_100);
        assert_eq!(director.scene_id(), SceneId::WoodlandPath);
        assert!(director.in_transition());

        // The transition holds for 16 s
        run_until(&mut director, 24_150, 40_050);
        assert_eq!(director.scene_id(), SceneId::WoodlandPath);
        run_until(&mut director, 40_100, 40_200);
        assert_eq!(director.scene_id(), SceneId::Pumpkin);
        assert!(!director.in_transition());
    }

    #[test]
    fn test_button_a_advances_immediately() {
        let mut director = Director::new(3);
        director.update(Instant::from_millis(0), &Buttons::default());
        assert_eq!(director.scene_id(), SceneId::CreepyEyes);

        let a = Buttons {
            a: true,
            ..Buttons::default()
        };
        press(&mut director, 100, a);
        assert_eq!(director.scene_id(), SceneId::WoodlandPath);

        // Holding A must not advance again
        let mut director = Director::new(3);
        director.update(Instant::from_millis(0), &Buttons::default());
        let held = Buttons {
            a: true,
            ..Buttons::default()
        };
        director.update(Instant::from_millis(100), &held);
        director.update(Instant::from_millis(150), &held);
        director.update(Instant::from_millis(200), &held);
        assert_eq!(director.scene_id(), SceneId::WoodlandPath);
    }

    #[test]
    fn test_pause_freezes_dwell_only() {
        let mut director = Director::new(11);
        run_until(&mut director, 0, 2_950);

        let b = Buttons {
            b: true,
            ..Buttons::default()
        };
        press(&mut director, 3_000, b);
        assert!(director.is_paused());

        // Way past the 24 s dwell, the scene is still pinned
        run_until(&mut director, 3_100, 40_000);
        assert_eq!(director.scene_id(), SceneId::CreepyEyes);

        press(&mut director, 40_050, b);
        assert!(!director.is_paused());

        // Dwell expired long ago, so the next unpaused tick advances
        run_until(&mut director, 40_150, 40_250);
        assert_eq!(director.scene_id(), SceneId::WoodlandPath);
    }

    #[test]
    fn test_button_d_requests_exit() {
        let mut director = Director::new(13);
        assert!(director.update(Instant::from_millis(0), &Buttons::default()));

        let d = Buttons {
            d: true,
            ..Buttons::default()
        };
        assert!(!director.update(Instant::from_millis(50), &d));
    }

    #[test]
    fn test_render_smoke_across_catalog() {
        let mut director = Director::new(17);
        let a = Buttons {
            a: true,
            ..Buttons::default()
        };
        let mut fb = Surface::new();

        // Walk the whole catalog (with transitions) and render each scene
        let mut ms = 0;
        for _ in 0..30 {
            director.update(Instant::from_millis(ms), &Buttons::default());
            director.render(&mut fb);
            ms += STEP_MS;
            director.update(Instant::from_millis(ms), &a);
            director.render(&mut fb);
            ms += STEP_MS;
        }
    }
}
