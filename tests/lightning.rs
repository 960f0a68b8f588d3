mod tests {
    use hallowgrove::lightning::{Lightning, LightningConfig, MAX_BRANCHES, Strike};
    use hallowgrove::surface::Surface;

    fn storm(spawn_chance: f32, seed: u64) -> Lightning {
        Lightning::new(
            LightningConfig {
                spawn_chance,
                ..LightningConfig::default()
            },
            seed,
        )
    }

    #[test]
    fn test_branch_pool_never_overflows() {
        let mut lightning = storm(1.0, 1);
        let mut strikes = 0;
        for _ in 0..600 {
            lightning.update(0.016, &mut |_strike| strikes += 1);
            assert!(lightning.branch_count() <= MAX_BRANCHES);
        }
        // Spawn chance 1.0 means a strike on every single frame
        assert_eq!(strikes, 600);
    }

    #[test]
    fn test_callback_fires_once_per_strike() {
        let mut lightning = storm(0.0, 2);
        for _ in 0..50 {
            let mut fired = 0;
            lightning.trigger_strike(&mut |_strike| fired += 1);
            assert_eq!(fired, 1);
        }
    }

    #[test]
    fn test_callback_reports_strike_origin() {
        let mut lightning = storm(0.0, 3);
        let mut seen: Option<Strike> = None;
        lightning.strike_from(16.0, 4.0, 16.0, 30.0, &mut |strike| seen = Some(strike));
        let strike = seen.expect("strike callback");
        assert_eq!(strike.x, 16.0);
        assert_eq!(strike.y, 4.0);
        assert_eq!(strike.intensity, 1.0);
        assert!(lightning.branch_count() > 0);
        assert!(lightning.is_flashing());
    }

    #[test]
    fn test_short_strike_emits_nothing() {
        let mut lightning = storm(0.0, 4);
        let mut fired = 0;
        // Target closer than the minimum branch length
        lightning.strike_from(5.0, 5.0, 5.0, 6.0, &mut |_strike| fired += 1);
        assert_eq!(fired, 0);
        assert_eq!(lightning.branch_count(), 0);
        assert!(!lightning.is_flashing());
    }

    #[test]
    fn test_branches_die_out() {
        let mut lightning = storm(0.0, 5);
        lightning.trigger_strike(&mut |_strike| {});
        assert!(lightning.branch_count() > 0);

        // Branch lifetimes top out at 0.2 s
        for _ in 0..6 {
            lightning.update(0.05, &mut |_strike| {});
        }
        assert_eq!(lightning.branch_count(), 0);
        assert!(!lightning.is_flashing());
        assert_eq!(lightning.flash_intensity(), 0.0);
    }

    #[test]
    fn test_render_clips_to_panel() {
        let mut lightning = storm(1.0, 6);
        let mut fb = Surface::new();
        for _ in 0..20 {
            lightning.update(0.016, &mut |_strike| {});
            lightning.render(&mut fb);
        }
        // Reaching here without a panic means every draw stayed clipped;
        // spot-check that the buffer is still addressable.
        assert!(fb.get(0, 0).is_some());
        assert!(fb.get(31, 31).is_some());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut lightning = storm(0.0, 7);
        lightning.trigger_strike(&mut |_strike| {});
        assert!(lightning.branch_count() > 0);
        lightning.reset();
        assert_eq!(lightning.branch_count(), 0);
        assert!(!lightning.is_flashing());
    }
}
