mod tests {
    use std::sync::Arc;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use padlight::{Rgb, Shutdown, ShutdownState, StripDriver};

    /// Strip double counting commits into a shared counter
    struct CountingStrip {
        commits: Arc<AtomicUsize>,
        cleared: bool,
        fail: bool,
    }

    impl CountingStrip {
        fn new(commits: &Arc<AtomicUsize>) -> Self {
            Self {
                commits: Arc::clone(commits),
                cleared: false,
                fail: false,
            }
        }
    }

    impl StripDriver for CountingStrip {
        type Error = &'static str;

        fn set_pixel(&mut self, _index: usize, _color: Rgb) {
            self.cleared = false;
        }

        fn clear(&mut self) {
            self.cleared = true;
        }

        fn show(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err("device gone");
            }
            assert!(self.cleared);
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_state_transitions() {
        let shutdown = Shutdown::new();
        let commits = Arc::new(AtomicUsize::new(0));
        let mut strip = CountingStrip::new(&commits);

        assert_eq!(shutdown.state(), ShutdownState::Running);
        assert!(shutdown.is_running());

        assert!(shutdown.request_stop());
        assert!(!shutdown.request_stop());
        assert_eq!(shutdown.state(), ShutdownState::Stopping);
        assert!(!shutdown.is_running());

        assert_eq!(shutdown.finish(&mut strip), Ok(true));
        assert_eq!(shutdown.state(), ShutdownState::Stopped);
        assert!(!shutdown.request_stop());
        assert_eq!(shutdown.finish(&mut strip), Ok(false));
        assert_eq!(commits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_finish_without_request() {
        let shutdown = Shutdown::default();
        let commits = Arc::new(AtomicUsize::new(0));

        assert_eq!(shutdown.finish(&mut CountingStrip::new(&commits)), Ok(true));
        assert_eq!(shutdown.state(), ShutdownState::Stopped);
        assert_eq!(commits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_finish_blanks_once() {
        for _ in 0..50 {
            let shutdown = Arc::new(Shutdown::new());
            let commits = Arc::new(AtomicUsize::new(0));
            let barrier = Arc::new(Barrier::new(4));

            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let shutdown = Arc::clone(&shutdown);
                    let barrier = Arc::clone(&barrier);
                    let mut strip = CountingStrip::new(&commits);
                    thread::spawn(move || {
                        barrier.wait();
                        shutdown.request_stop();
                        shutdown.finish(&mut strip).unwrap()
                    })
                })
                .collect();

            let winners = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|won| *won)
                .count();
            assert_eq!(winners, 1);
            assert_eq!(commits.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_finish_error_is_returned_once() {
        let shutdown = Shutdown::new();
        let commits = Arc::new(AtomicUsize::new(0));
        let mut strip = CountingStrip::new(&commits);
        strip.fail = true;

        shutdown.request_stop();
        assert_eq!(shutdown.finish(&mut strip), Err("device gone"));
        assert_eq!(shutdown.state(), ShutdownState::Stopped);

        strip.fail = false;
        assert_eq!(shutdown.finish(&mut strip), Ok(false));
        assert_eq!(commits.load(Ordering::SeqCst), 0);
    }
}
