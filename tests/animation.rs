mod common;

use common::{fire, ManualScheduler, RecordingSurface};
use waves_wasm::{Animation, FrameStats, WaveConfig, WaveFieldRenderer};

fn animation(surface: RecordingSurface) -> Animation<RecordingSurface, ManualScheduler> {
    let mut renderer = WaveFieldRenderer::new(WaveConfig::default());
    renderer.resize(40, 64);
    Animation::new(renderer, surface, ManualScheduler::default())
}

#[test]
fn start_requests_one_frame() {
    let mut animation = animation(RecordingSurface::default());
    assert!(!animation.is_active());

    animation.start().unwrap();
    animation.start().unwrap();

    assert!(animation.is_active());
    assert_eq!(animation.scheduler().pending, vec![1]);
    assert!(animation.surface().clears.is_empty());
}

#[test]
fn each_frame_requests_the_next() {
    let mut animation = animation(RecordingSurface::default());
    animation.start().unwrap();

    for time in [16.0, 33.0, 50.0] {
        assert!(fire(&mut animation, time));
        assert_eq!(animation.scheduler().pending.len(), 1);
    }

    assert_eq!(animation.surface().clears.len(), 3);
    assert_eq!(animation.surface().paths.len(), 5);
    assert_eq!(animation.stats(), FrameStats { frames: 3, faults: 0 });
}

#[test]
fn faulted_frame_keeps_the_loop_alive() {
    let mut animation = animation(RecordingSurface::failing_at(0));
    animation.start().unwrap();

    assert!(fire(&mut animation, 16.0));
    assert!(animation.is_active());
    assert_eq!(animation.scheduler().pending.len(), 1);

    assert!(fire(&mut animation, f64::NAN));
    assert_eq!(animation.scheduler().pending.len(), 1);
    assert_eq!(animation.stats(), FrameStats { frames: 2, faults: 2 });
}

#[test]
fn frames_read_latest_input() {
    let mut animation = animation(RecordingSurface::default());
    animation.start().unwrap();
    fire(&mut animation, 0.0);
    assert_eq!(animation.surface().paths.len(), 5);

    animation.renderer_mut().resize(100, 64);
    assert_eq!(animation.renderer().line_count(), 11);
    fire(&mut animation, 16.0);
    assert_eq!(animation.surface().paths.len(), 11);
}

#[test]
fn cancel_withdraws_pending_frame() {
    let mut animation = animation(RecordingSurface::default());
    animation.start().unwrap();
    fire(&mut animation, 16.0);

    animation.cancel();
    animation.cancel();

    assert!(!animation.is_active());
    assert!(animation.scheduler().pending.is_empty());
    assert_eq!(animation.scheduler().cancelled, vec![2]);

    // A callback already in flight must not draw or reschedule.
    animation.on_frame(33.0);
    assert!(animation.scheduler().pending.is_empty());
    assert_eq!(animation.stats().frames, 1);
}

#[test]
fn restart_after_cancel() {
    let mut animation = animation(RecordingSurface::default());
    animation.start().unwrap();
    animation.cancel();
    animation.start().unwrap();
    assert!(animation.is_active());
    assert!(fire(&mut animation, 16.0));
    assert_eq!(animation.stats().frames, 1);
}

#[test]
fn scheduler_refusal_stops_the_loop() {
    let mut animation = animation(RecordingSurface::default());
    animation.scheduler_mut().refuse = true;
    assert!(animation.start().is_err());
    assert!(!animation.is_active());

    animation.scheduler_mut().refuse = false;
    animation.start().unwrap();
    animation.scheduler_mut().refuse = true;
    assert!(fire(&mut animation, 16.0));
    assert!(!animation.is_active());
    assert_eq!(animation.stats().frames, 1);
}
