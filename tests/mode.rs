mod tests {
    use std::sync::Arc;
    use std::thread;

    use padlight::color::{BLACK, STATIC_PALETTE};
    use padlight::{EffectId, ModeLayout, ModeSelection, ModeState, Scene};

    #[test]
    fn test_starts_at_zero() {
        let modes = ModeState::new(ModeLayout::Nested);
        assert_eq!(modes.read(), ModeSelection::default());
        assert_eq!(modes.scene(), Scene::Animated(EffectId::Rainbow));
    }

    #[test]
    fn test_mode_cycle_closes_and_resets_sub_mode() {
        for layout in [ModeLayout::Flat, ModeLayout::Nested] {
            let modes = ModeState::new(layout);
            modes.advance_sub_mode();
            for _ in 0..layout.mode_count() {
                let selection = modes.advance_mode();
                assert_eq!(selection.sub_mode, 0);
                assert_eq!(modes.read(), selection);
            }
            assert_eq!(modes.read().mode, 0);
        }
    }

    #[test]
    fn test_sub_mode_wraps_per_mode() {
        let modes = ModeState::new(ModeLayout::Nested);
        for expected in [1, 2, 0] {
            assert_eq!(modes.advance_sub_mode().sub_mode, expected);
        }

        modes.advance_mode();
        for _ in 0..STATIC_PALETTE.len() - 1 {
            modes.advance_sub_mode();
        }
        assert_eq!(modes.scene(), Scene::Solid(STATIC_PALETTE[5]));
        assert_eq!(modes.advance_sub_mode().sub_mode, 0);

        modes.advance_mode();
        assert_eq!(modes.advance_sub_mode(), ModeSelection { mode: 2, sub_mode: 0 });
        assert_eq!(modes.scene(), Scene::Off);
    }

    #[test]
    fn test_flat_layout_has_no_sub_modes() {
        let modes = ModeState::new(ModeLayout::Flat);
        assert_eq!(modes.advance_sub_mode(), ModeSelection::default());
        assert_eq!(modes.advance_mode().mode, 1);
        assert_eq!(modes.scene(), Scene::Animated(EffectId::Breathe));
        assert_eq!(modes.advance_mode().mode, 2);
        assert_eq!(modes.scene(), Scene::Animated(EffectId::Scanner));
    }

    #[test]
    fn test_nested_scenes() {
        let layout = ModeLayout::Nested;
        let scene = |mode, sub_mode| layout.scene(ModeSelection { mode, sub_mode });

        assert_eq!(scene(0, 1), Scene::Animated(EffectId::Breathe));
        assert_eq!(scene(0, 2), Scene::Animated(EffectId::Scanner));
        assert_eq!(scene(1, 0), Scene::Solid(STATIC_PALETTE[0]));
        assert_eq!(scene(2, 0), Scene::Off);
        assert_eq!(Scene::Off.solid_color(), Some(BLACK));
        assert_eq!(scene(0, 0).solid_color(), None);
        assert_eq!(scene(0, 2).name(), "scanner");
        assert_eq!(scene(1, 3).name(), "solid");
        assert_eq!(scene(2, 0).name(), "off");
        assert_eq!(layout.sub_mode_count(1), 6);
        assert_eq!(layout.sub_mode_count(2), 1);
    }

    #[test]
    fn test_concurrent_updates_stay_in_range() {
        let modes = Arc::new(ModeState::new(ModeLayout::Nested));
        let writers: Vec<_> = (0..4)
            .map(|i| {
                let modes = Arc::clone(&modes);
                thread::spawn(move || {
                    for _ in 0..500 {
                        if i % 2 == 0 {
                            modes.advance_mode();
                        } else {
                            modes.advance_sub_mode();
                        }
                    }
                })
            })
            .collect();

        for _ in 0..2000 {
            let selection = modes.read();
            let layout = modes.layout();
            assert!(selection.mode < layout.mode_count());
            assert!(selection.sub_mode < layout.sub_mode_count(selection.mode));
        }
        for writer in writers {
            writer.join().unwrap();
        }
    }
}
