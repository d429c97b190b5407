use tui_snake::core::{GameConfig, GameEngine};
use tui_snake::term::{frame_fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn paused_engine_produces_a_stable_fingerprint() {
    let mut engine = GameEngine::new(GameConfig::with_seed(4)).unwrap();
    engine.start();
    engine.tick();
    engine.pause();

    let before = frame_fingerprint(&engine.snapshot(), (80, 24));
    engine.tick();
    let after = frame_fingerprint(&engine.snapshot(), (80, 24));
    assert_eq!(before, after);

    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, before, true));
    assert!(!t.should_render(100, after, true));

    engine.toggle_sound();
    let muted = frame_fingerprint(&engine.snapshot(), (80, 24));
    assert!(t.should_render(101, muted, true));
}
