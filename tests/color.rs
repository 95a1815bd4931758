mod tests {
    use padlight::color::{BLACK, Rgb, STATIC_PALETTE, hsv_to_rgb, hue_color, scale, wrap_unit};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_color(0.0), RED);
        assert_eq!(hue_color(0.5), CYAN);
        assert_eq!(
            hue_color(1.0 / 6.0),
            Rgb {
                r: 255,
                g: 255,
                b: 0
            }
        );
        assert_eq!(hue_color(2.0 / 6.0), GREEN);
        assert_eq!(hue_color(4.0 / 6.0), BLUE);
    }

    #[test]
    fn test_channels_are_truncated() {
        // h * 6 = 0.78 -> green = 0.78 * 255 = 198.9
        assert_eq!(
            hue_color(0.13),
            Rgb {
                r: 255,
                g: 198,
                b: 0
            }
        );
        assert_eq!(
            hsv_to_rgb(0.0, 0.0, 0.5),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_hue_wraps_around() {
        // Sampled away from truncation boundaries, see the next test
        for hue in [0.13, 0.37, 0.61, 0.87, -0.42, 3.29, -7.45] {
            assert_eq!(hue_color(hue), hue_color(hue + 1.0), "hue {hue}");
            assert_eq!(hue_color(hue), hue_color(hue - 2.0), "hue {hue}");
        }
        assert_eq!(hue_color(-0.5), CYAN);
        assert_eq!(hue_color(7.0), RED);
    }

    #[test]
    fn test_wrapped_hue_is_within_one_step() {
        // Wrapping 1.2 yields 0.19999999999999996, enough to flip the
        // truncated red channel of a hue of 0.2
        assert_eq!(hue_color(0.2).r, 203);
        assert_eq!(hue_color(1.2).r, 204);

        for i in 0..10_000 {
            let hue = f64::from(i) / 10_000.0;
            for shifted in [hue + 1.0, hue - 1.0, hue + 5.0] {
                let (a, b) = (hue_color(hue), hue_color(shifted));
                assert!(a.r.abs_diff(b.r) <= 1, "hue {hue} vs {shifted}");
                assert!(a.g.abs_diff(b.g) <= 1, "hue {hue} vs {shifted}");
                assert!(a.b.abs_diff(b.b) <= 1, "hue {hue} vs {shifted}");
            }
        }
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert!(wrap_unit(-1e-20) < 1.0);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(RED, 1.0), RED);
        assert_eq!(scale(RED, 0.0), BLACK);
        assert_eq!(scale(CYAN, 0.5), Rgb { r: 0, g: 127, b: 127 });
        assert_eq!(scale(RED, 2.0), RED);
        assert_eq!(scale(RED, -1.0), BLACK);
    }

    #[test]
    fn test_static_palette() {
        assert_eq!(STATIC_PALETTE.len(), 6);
        assert_eq!(STATIC_PALETTE[0], RED);
        assert_eq!(STATIC_PALETTE[3], CYAN);
        assert!(!STATIC_PALETTE.contains(&BLACK));
    }
}
