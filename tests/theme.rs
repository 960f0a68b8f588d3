mod tests {
    use hallowgrove::color::Rgb;
    use hallowgrove::theme::{THEME_CHANGE_TIME, Theme, ThemeCycler, builtin_catalog, parse_catalog};

    #[test]
    fn test_builtin_catalog() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].name.as_str(), "Classic Halloween");
        assert_eq!(catalog[8].name.as_str(), "Gothic Mist");
        assert_eq!(catalog[0].moon_glow, Rgb { r: 255, g: 255, b: 200 });
        assert_eq!(catalog[3].moon_glow, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_parse_line() {
        let line = "Test Theme: [1,2,3] [4,5,6] [7,8,9] [10,11,12] [13,14,15] \
                    [16,17,18] [19,20,21] [22,23,24] [25,26,27] [28,29,30] [31,32,33]";
        let theme = Theme::parse_line(line).expect("valid theme line");
        assert_eq!(theme.name.as_str(), "Test Theme");
        assert_eq!(theme.sky_top, Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(theme.bat, Rgb { r: 31, g: 32, b: 33 });
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Theme::parse_line("").is_none());
        assert!(Theme::parse_line("# comment").is_none());
        assert!(Theme::parse_line("Missing colors:").is_none());
        assert!(Theme::parse_line("Ten only: [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3]").is_none());
        assert!(Theme::parse_line("Bad channel: [1,2,300] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3] [1,2,3]").is_none());
    }

    #[test]
    fn test_parse_catalog_skips_bad_lines() {
        let text = "# host palette\n\
                    One: [1,1,1] [2,2,2] [3,3,3] [4,4,4] [5,5,5] [6,6,6] [7,7,7] [8,8,8] [9,9,9] [10,10,10] [11,11,11]\n\
                    garbage\n\
                    Two: [1,1,1] [2,2,2] [3,3,3] [4,4,4] [5,5,5] [6,6,6] [7,7,7] [8,8,8] [9,9,9] [10,10,10] [11,11,11]\n";
        let catalog = parse_catalog(text);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name.as_str(), "One");
        assert_eq!(catalog[1].name.as_str(), "Two");
    }

    #[test]
    fn test_empty_catalog_falls_back_to_builtin() {
        let cycler = ThemeCycler::new(parse_catalog("no themes here"));
        assert_eq!(cycler.current().name.as_str(), "Classic Halloween");
    }

    #[test]
    fn test_automatic_cycling() {
        let mut cycler = ThemeCycler::default();
        assert_eq!(cycler.index(), 0);

        let mut elapsed = 0.0;
        while elapsed < THEME_CHANGE_TIME - 0.1 {
            cycler.tick(0.05);
            elapsed += 0.05;
        }
        assert_eq!(cycler.index(), 0);

        cycler.tick(0.2);
        assert_eq!(cycler.index(), 1);
    }

    #[test]
    fn test_manual_advance_resets_timer() {
        let mut cycler = ThemeCycler::default();

        // Nearly due for an automatic change
        let mut elapsed = 0.0;
        while elapsed < THEME_CHANGE_TIME - 0.2 {
            cycler.tick(0.05);
            elapsed += 0.05;
        }

        // Two manual presses inside one automatic period: exactly two changes
        cycler.advance();
        cycler.advance();
        assert_eq!(cycler.index(), 2);

        // The automatic timer restarted, so nothing fires for a while
        for _ in 0..20 {
            cycler.tick(0.05);
        }
        assert_eq!(cycler.index(), 2);
    }

    #[test]
    fn test_index_wraps() {
        let mut cycler = ThemeCycler::default();
        for _ in 0..9 {
            cycler.advance();
        }
        assert_eq!(cycler.index(), 0);
    }
}
